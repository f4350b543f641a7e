use super::*;
use crate::model::entry::{GeneratedEntry, ParamSet};
use crate::model::metrics::MetricVector;

fn metrics(aggregate: f64) -> MetricVector {
    MetricVector {
        lexical_diversity: 0.5,
        repetition: 0.0,
        length_ok: 1.0,
        structure: 0.4,
        keyword_coverage: 0.5,
        readability: 0.6,
        clarity_score: 1.0,
        aggregate_score: aggregate,
    }
}

fn annotated(temp: f64, text: &str, aggregate: f64) -> AnnotatedEntry {
    AnnotatedEntry::new(
        GeneratedEntry::new(ParamSet::new().with("temperature", temp), text),
        metrics(aggregate),
    )
}

fn build_entries() -> Vec<AnnotatedEntry> {
    vec![
        annotated(0.2, "cold answer, with a comma", 0.6),
        annotated(0.9, "hot answer\nspanning lines", 0.8),
        annotated(0.2, "", 0.2),
        annotated(0.9, "another hot answer", 0.8),
    ]
}

fn build_input(entries: &[AnnotatedEntry]) -> Stage5Input<'_> {
    Stage5Input {
        prompt: "Explain the thing",
        prompt_tokens: 3,
        prompt_keywords: 2,
        entries,
        aggregate_mode: AggregateMode::SevenTerm,
        model: Some("mock".to_string()),
        tool_name: "kira-textqc".to_string(),
        tool_version: "0.0.0".to_string(),
    }
}

#[test]
fn test_summary_counts_and_ranking() {
    let entries = build_entries();
    let summary = build_summary(&build_input(&entries));
    assert_eq!(summary.n_entries, 4);
    assert_eq!(summary.n_empty_text, 1);
    let best = summary.best.unwrap();
    let worst = summary.worst.unwrap();
    assert_eq!(best.index, 1);
    assert_eq!(worst.index, 2);
    assert_eq!(summary.metrics.len(), METRIC_NAMES.len());
    assert_eq!(summary.metrics[7].name, "aggregate_score");
    assert!((summary.metrics[7].mean - 0.6).abs() < 1e-12);
}

#[test]
fn test_groups_in_first_seen_order() {
    let entries = build_entries();
    let summary = build_summary(&build_input(&entries));
    assert_eq!(summary.groups.len(), 2);
    assert_eq!(summary.groups[0].param_set, r#"{"temperature":0.2}"#);
    assert_eq!(summary.groups[0].indices, vec![0, 2]);
    assert_eq!(summary.groups[1].indices, vec![1, 3]);
    assert!((summary.groups[0].mean[7] - 0.4).abs() < 1e-12);
    assert_eq!(summary.groups[1].best_aggregate, 0.8);
}

#[test]
fn test_empty_summary() {
    let summary = build_summary(&build_input(&[]));
    assert_eq!(summary.n_entries, 0);
    assert!(summary.best.is_none());
    assert!(summary.groups.is_empty());
    assert_eq!(summary.metrics[0].median, 0.0);
}

#[test]
fn test_write_reports_entry_mode() {
    let dir = tempfile::tempdir().unwrap();
    let entries = build_entries();
    let paths = write_reports(&build_input(&entries), dir.path(), ReportMode::Entry).unwrap();

    let scores: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.scores_json).unwrap()).unwrap();
    assert_eq!(scores["responses"].as_array().unwrap().len(), 4);
    assert_eq!(scores["responses"][1]["param_set"]["temperature"], 0.9);
    assert_eq!(scores["model"], "mock");

    let mut reader = csv::Reader::from_path(&paths.scores_csv).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "response_id");
    assert_eq!(&headers[4], "metric_lexical_diversity");
    assert_eq!(&headers[11], "metric_aggregate_score");
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(&rows[0][0], "resp-0001");
    assert_eq!(&rows[0][1], "mock");
    assert_eq!(&rows[0][3], "cold answer, with a comma");
    assert_eq!(&rows[1][3], "hot answer\nspanning lines");
    assert_eq!(&rows[1][11], "0.8000");

    let report = std::fs::read_to_string(&paths.report_txt).unwrap();
    assert!(report.contains("Best: resp-0002"));
    assert!(report.contains("Worst: resp-0003"));
    assert!(paths.summary_json.exists());
}

#[test]
fn test_write_reports_param_set_mode() {
    let dir = tempfile::tempdir().unwrap();
    let entries = build_entries();
    let paths = write_reports(&build_input(&entries), dir.path(), ReportMode::ParamSet).unwrap();
    let mut reader = csv::Reader::from_path(&paths.scores_csv).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], r#"{"temperature":0.2}"#);
    assert_eq!(&rows[0][1], "2");
}

#[test]
fn test_summary_json_parses() {
    let entries = build_entries();
    let summary = build_summary(&build_input(&entries));
    let json = crate::report::json::render_summary_json(&summary).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["n_entries"], 4);
    assert_eq!(v["aggregate_mode"], "seven-term (default)");
    assert_eq!(v["best"]["index"], 1);
}

#[test]
fn test_caveat_when_prompt_has_only_short_words() {
    let entries = build_entries();
    let mut input = build_input(&entries);
    input.prompt = "Why is it so?";
    input.prompt_tokens = 4;
    input.prompt_keywords = 0;
    let report = render_report_text(&build_summary(&input));
    assert!(report.contains("Prompt keywords: 0"));
    assert!(report.contains("Prompt has no keywords; keyword coverage is 0 for every response."));

    let report = render_report_text(&build_summary(&build_input(&entries)));
    assert!(!report.contains("Prompt has no keywords"));
}
