use super::*;

use kira_textqc::model::profile::AggregateMode;

fn parse(args: &[&str]) -> RunArgs {
    let cli = Cli::try_parse_from(args).unwrap();
    match cli.command {
        Command::Run(args) => args,
    }
}

#[test]
fn test_parse_args_defaults() {
    let args = parse(&["kira-textqc", "run", "--input", "batch.json", "--out", "out"]);
    assert_eq!(args.input, PathBuf::from("batch.json"));
    assert_eq!(args.mode, CliReportMode::Entry);
    assert!(!args.legacy_aggregate);
    assert!(args.threads.is_none());
}

#[test]
fn test_parse_args_param_set_mode() {
    let args = parse(&[
        "kira-textqc",
        "run",
        "--input",
        "batch.jsonl",
        "--out",
        "out",
        "--mode",
        "param-set",
        "--prompt",
        "Explain",
        "--threads",
        "2",
    ]);
    assert_eq!(args.mode, CliReportMode::ParamSet);
    assert_eq!(args.prompt.as_deref(), Some("Explain"));
    assert_eq!(args.threads, Some(2));
}

#[test]
fn test_parse_args_rejects_missing_out() {
    assert!(Cli::try_parse_from(["kira-textqc", "run", "--input", "batch.json"]).is_err());
}

#[test]
fn test_parse_args_prompt_conflicts() {
    let res = Cli::try_parse_from([
        "kira-textqc",
        "run",
        "--input",
        "b.json",
        "--out",
        "o",
        "--prompt",
        "x",
        "--prompt-file",
        "p.txt",
    ]);
    assert!(res.is_err());
}

#[test]
fn test_resolve_profile_legacy() {
    let args = parse(&[
        "kira-textqc",
        "run",
        "--input",
        "b.json",
        "--out",
        "o",
        "--legacy-aggregate",
    ]);
    let profile = resolve_profile(&args).unwrap();
    assert_eq!(profile.aggregate_mode, AggregateMode::LegacySixTerm);
}

#[test]
fn test_resolve_profile_default() {
    let args = parse(&["kira-textqc", "run", "--input", "b.json", "--out", "o"]);
    let profile = resolve_profile(&args).unwrap();
    assert_eq!(profile, ScoringProfile::default_v1());
}
