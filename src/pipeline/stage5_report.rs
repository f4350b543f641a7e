use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::entry::AnnotatedEntry;
use crate::model::metrics::METRIC_NAMES;
use crate::model::profile::AggregateMode;
use crate::report::export::{write_entries_csv, write_groups_csv};
use crate::report::json::{render_scores_json, render_summary_json};
use crate::report::text::render_report_text;
use crate::report::{EntryRef, GroupStats, NamedStats, SummaryData, mean, median, p10, p90};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Entry,
    ParamSet,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub prompt: &'a str,
    pub prompt_tokens: usize,
    pub prompt_keywords: usize,
    pub entries: &'a [AnnotatedEntry],
    pub aggregate_mode: AggregateMode,
    pub model: Option<String>,
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub scores_json: PathBuf,
    pub scores_csv: PathBuf,
    pub summary_json: PathBuf,
    pub report_txt: PathBuf,
}

pub fn write_reports(
    input: &Stage5Input<'_>,
    out_dir: &Path,
    mode: ReportMode,
) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(out_dir)?;
    let summary = build_summary(input);

    let paths = ReportPaths {
        scores_json: out_dir.join("scores.json"),
        scores_csv: out_dir.join("scores.csv"),
        summary_json: out_dir.join("summary.json"),
        report_txt: out_dir.join("report.txt"),
    };

    let scores = render_scores_json(&summary, input.prompt, input.entries)?;
    fs::write(&paths.scores_json, scores)?;

    let csv_out = BufWriter::new(File::create(&paths.scores_csv)?);
    match mode {
        ReportMode::Entry => write_entries_csv(csv_out, input.entries, input.model.as_deref())?,
        ReportMode::ParamSet => write_groups_csv(csv_out, &summary.groups)?,
    }

    fs::write(&paths.summary_json, render_summary_json(&summary)?)?;
    fs::write(&paths.report_txt, render_report_text(&summary))?;

    tracing::info!(out_dir = %out_dir.display(), mode = ?mode, "reports written");
    Ok(paths)
}

pub fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    let entries = input.entries;
    let columns = metric_columns(entries);

    let metrics = METRIC_NAMES
        .iter()
        .zip(&columns)
        .map(|(&name, values)| NamedStats {
            name,
            mean: mean(values),
            median: median(values),
            p10: p10(values),
            p90: p90(values),
        })
        .collect();

    SummaryData {
        tool_name: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        aggregate_mode: aggregate_mode_label(input.aggregate_mode).to_string(),
        model: input.model.clone(),
        prompt_tokens: input.prompt_tokens,
        prompt_keywords: input.prompt_keywords,
        n_entries: entries.len(),
        n_empty_text: entries.iter().filter(|e| e.text.trim().is_empty()).count(),
        metrics,
        best: rank_entry(entries, true),
        worst: rank_entry(entries, false),
        groups: group_by_param_set(entries),
    }
}

pub fn aggregate_mode_label(mode: AggregateMode) -> &'static str {
    match mode {
        AggregateMode::SevenTerm => "seven-term (default)",
        AggregateMode::LegacySixTerm => "legacy six-term",
    }
}

fn metric_columns<'a>(entries: impl IntoIterator<Item = &'a AnnotatedEntry>) -> Vec<Vec<f64>> {
    let mut columns = vec![Vec::new(); METRIC_NAMES.len()];
    for entry in entries {
        for (col, v) in columns.iter_mut().zip(entry.metrics.values()) {
            col.push(v);
        }
    }
    columns
}

/// Highest (or lowest) aggregate; ties go to the earliest entry.
fn rank_entry(entries: &[AnnotatedEntry], best: bool) -> Option<EntryRef> {
    let mut out: Option<EntryRef> = None;
    for (index, entry) in entries.iter().enumerate() {
        let score = entry.metrics.aggregate_score;
        let better = match out {
            None => true,
            Some(cur) if best => score > cur.aggregate_score,
            Some(cur) => score < cur.aggregate_score,
        };
        if better {
            out = Some(EntryRef {
                index,
                aggregate_score: score,
            });
        }
    }
    out
}

/// Groups entries by parameter set in first-seen order.
fn group_by_param_set(entries: &[AnnotatedEntry]) -> Vec<GroupStats> {
    let mut order: Vec<String> = Vec::new();
    let mut members: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, entry) in entries.iter().enumerate() {
        let key = entry.param_set.canonical_key();
        members
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(idx);
    }

    order
        .into_iter()
        .map(|key| {
            let indices = members.remove(&key).unwrap_or_default();
            let mean_values = metric_columns(indices.iter().map(|&i| &entries[i]))
                .iter()
                .map(|c| mean(c))
                .collect();
            let best_aggregate = indices
                .iter()
                .map(|&i| entries[i].metrics.aggregate_score)
                .fold(0.0, f64::max);
            GroupStats {
                param_set: key,
                count: indices.len(),
                indices,
                mean: mean_values,
                best_aggregate,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
