use serde::Serialize;

pub mod export;
pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct NamedStats {
    pub name: &'static str,
    pub mean: f64,
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EntryRef {
    pub index: usize,
    pub aggregate_score: f64,
}

/// Entries sharing one parameter set.
#[derive(Debug, Clone, Serialize)]
pub struct GroupStats {
    pub param_set: String,
    pub count: usize,
    pub indices: Vec<usize>,
    /// Means in `METRIC_NAMES` order.
    pub mean: Vec<f64>,
    pub best_aggregate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,
    pub aggregate_mode: String,
    pub model: Option<String>,
    pub prompt_tokens: usize,
    pub prompt_keywords: usize,
    pub n_entries: usize,
    pub n_empty_text: usize,
    pub metrics: Vec<NamedStats>,
    pub best: Option<EntryRef>,
    pub worst: Option<EntryRef>,
    pub groups: Vec<GroupStats>,
}

pub fn format_f64_4(v: f64) -> String {
    format!("{:.4}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx.min(n - 1)]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
