use crate::model::metrics::METRIC_NAMES;
use crate::report::{EntryRef, SummaryData, format_f64_4};
use crate::report::export::response_id;

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Response Quality Report\n");
    out.push_str("=======================\n\n");

    out.push_str("1. Batch\n");
    out.push_str(&format!("Tool: {} {}\n", data.tool_name, data.tool_version));
    if let Some(model) = &data.model {
        out.push_str(&format!("Model: {}\n", model));
    }
    out.push_str(&format!("Aggregate mode: {}\n", data.aggregate_mode));
    out.push_str(&format!("Responses: {}\n", data.n_entries));
    out.push_str(&format!("Empty responses: {}\n", data.n_empty_text));
    out.push_str(&format!("Prompt tokens: {}\n", data.prompt_tokens));
    out.push_str(&format!("Prompt keywords: {}\n\n", data.prompt_keywords));

    if data.n_entries == 0 {
        out.push_str("No responses were scored.\n");
        return out;
    }

    out.push_str("2. Metric distribution\n");
    out.push_str(&format!(
        "{:<18} {:>8} {:>8} {:>8} {:>8}\n",
        "metric", "mean", "median", "p10", "p90"
    ));
    for s in &data.metrics {
        out.push_str(&format!(
            "{:<18} {:>8} {:>8} {:>8} {:>8}\n",
            s.name,
            format_f64_4(s.mean),
            format_f64_4(s.median),
            format_f64_4(s.p10),
            format_f64_4(s.p90)
        ));
    }
    out.push('\n');

    out.push_str("3. Ranking\n");
    out.push_str(&format!("Best: {}\n", entry_label(data.best)));
    out.push_str(&format!("Worst: {}\n\n", entry_label(data.worst)));

    out.push_str("4. By parameter set\n");
    let agg_idx = METRIC_NAMES.len() - 1;
    for group in &data.groups {
        out.push_str(&format!(
            "{} n={} mean_aggregate={} best_aggregate={}\n",
            group.param_set,
            group.count,
            format_f64_4(group.mean.get(agg_idx).copied().unwrap_or(0.0)),
            format_f64_4(group.best_aggregate)
        ));
    }
    out.push('\n');

    out.push_str("5. Caveats\n");
    out.push_str(&caveat_statement(data));
    out.push('\n');
    out
}

fn entry_label(entry: Option<EntryRef>) -> String {
    match entry {
        Some(e) => format!(
            "{} (aggregate {})",
            response_id(e.index),
            format_f64_4(e.aggregate_score)
        ),
        None => "n/a".to_string(),
    }
}

fn caveat_statement(data: &SummaryData) -> String {
    let mut lines = Vec::new();
    if data.prompt_keywords == 0 {
        lines.push("Prompt has no keywords; keyword coverage is 0 for every response.");
    }
    if data.n_empty_text > 0 {
        lines.push("Empty responses score edge values and neutral readability.");
    }
    lines.push("Scores are heuristic text statistics and do not judge factual correctness.");
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
