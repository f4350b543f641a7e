use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use kira_textqc::input::{load_batch, read_prompt_file};
use kira_textqc::logging;
use kira_textqc::model::profile::ScoringProfile;
use kira_textqc::pipeline::stage1_prepare::prepare_prompt;
use kira_textqc::pipeline::stage5_report::{
    ReportMode, Stage5Input, aggregate_mode_label, write_reports,
};
use kira_textqc::Scorer;

#[derive(Parser, Debug)]
#[command(
    name = "kira-textqc",
    about = "Score batches of generated text responses against their prompt",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a batch file and write reports
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Batch file (.json, .jsonl, optionally .gz); `-` reads JSON from stdin
    #[arg(long)]
    input: PathBuf,
    /// Output directory
    #[arg(long)]
    out: PathBuf,
    /// Prompt text; overrides any prompt stored in the batch file
    #[arg(long, conflicts_with = "prompt_file")]
    prompt: Option<String>,
    /// Read the prompt from a file
    #[arg(long)]
    prompt_file: Option<PathBuf>,
    /// CSV layout
    #[arg(long, value_enum, default_value_t = CliReportMode::Entry)]
    mode: CliReportMode,
    /// JSON scoring profile; missing fields use the defaults
    #[arg(long, conflicts_with = "legacy_aggregate")]
    profile: Option<PathBuf>,
    /// Use the earlier six-term aggregate weighting
    #[arg(long)]
    legacy_aggregate: bool,
    /// Worker threads for batch scoring (default: all cores)
    #[arg(long)]
    threads: Option<usize>,
    /// Model name recorded in exports
    #[arg(long)]
    model: Option<String>,
    /// Debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum CliReportMode {
    Entry,
    ParamSet,
}

impl From<CliReportMode> for ReportMode {
    fn from(mode: CliReportMode) -> Self {
        match mode {
            CliReportMode::Entry => ReportMode::Entry,
            CliReportMode::ParamSet => ReportMode::ParamSet,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Run(args) => run_scoring(&args),
    }
}

fn run_scoring(args: &RunArgs) -> Result<(), String> {
    logging::init(args.verbose);

    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| e.to_string())?;
    }

    let profile = resolve_profile(args)?;
    let prompt_override = match &args.prompt_file {
        Some(path) => Some(read_prompt_file(path).map_err(|e| e.to_string())?),
        None => args.prompt.clone(),
    };
    let bundle = load_batch(&args.input, prompt_override).map_err(|e| e.to_string())?;

    tracing::info!(
        aggregate = aggregate_mode_label(profile.aggregate_mode),
        n_entries = bundle.entries.len(),
        "scoring"
    );
    let prepared_prompt = prepare_prompt(&bundle.prompt);
    let prompt_tokens = prepared_prompt.tokens.len();
    let prompt_keywords = prepared_prompt.keyword_count(profile.keyword_min_len);
    let aggregate_mode = profile.aggregate_mode;
    let scorer = Scorer::new(profile).map_err(|e| e.to_string())?;
    let scored = scorer.score_batch(&bundle.prompt, bundle.entries);

    let input = Stage5Input {
        prompt: &bundle.prompt,
        prompt_tokens,
        prompt_keywords,
        entries: &scored,
        aggregate_mode,
        model: args.model.clone(),
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let paths = write_reports(&input, &args.out, args.mode.into()).map_err(|e| e.to_string())?;
    tracing::info!(path = %paths.scores_json.display(), "scores written");
    Ok(())
}

fn resolve_profile(args: &RunArgs) -> Result<ScoringProfile, String> {
    if let Some(path) = &args.profile {
        return ScoringProfile::from_json_file(path).map_err(|e| e.to_string());
    }
    if args.legacy_aggregate {
        tracing::warn!("legacy six-term aggregate enabled (--legacy-aggregate); clarity is not weighted");
        return Ok(ScoringProfile::legacy_v0());
    }
    Ok(ScoringProfile::default_v1())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
