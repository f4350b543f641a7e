use serde::Serialize;

use crate::model::entry::AnnotatedEntry;
use crate::report::SummaryData;

#[derive(Debug, Serialize)]
struct ScoresDocument<'a> {
    tool: &'a str,
    version: &'a str,
    aggregate_mode: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    prompt: &'a str,
    responses: &'a [AnnotatedEntry],
}

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

pub fn render_scores_json(
    data: &SummaryData,
    prompt: &str,
    entries: &[AnnotatedEntry],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ScoresDocument {
        tool: &data.tool_name,
        version: &data.tool_version,
        aggregate_mode: &data.aggregate_mode,
        model: data.model.as_deref(),
        prompt,
        responses: entries,
    })
}
