use std::io::Write;

use crate::model::entry::AnnotatedEntry;
use crate::model::metrics::METRIC_NAMES;
use crate::report::{GroupStats, format_f64_4};

pub fn response_id(index: usize) -> String {
    format!("resp-{:04}", index + 1)
}

/// One row per response: id, model, param set JSON, text, then `metric_*`.
pub fn write_entries_csv<W: Write>(
    writer: W,
    entries: &[AnnotatedEntry],
    model: Option<&str>,
) -> csv::Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    let mut header = vec![
        "response_id".to_string(),
        "model".to_string(),
        "param_set".to_string(),
        "text".to_string(),
    ];
    header.extend(METRIC_NAMES.iter().map(|m| format!("metric_{m}")));
    w.write_record(&header)?;

    for (idx, entry) in entries.iter().enumerate() {
        let mut row = vec![
            response_id(idx),
            model.unwrap_or_default().to_string(),
            entry.param_set.canonical_key(),
            entry.text.clone(),
        ];
        row.extend(entry.metrics.values().iter().map(|v| format_f64_4(*v)));
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}

/// One row per distinct parameter set with mean metrics.
pub fn write_groups_csv<W: Write>(writer: W, groups: &[GroupStats]) -> csv::Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    let mut header = vec!["param_set".to_string(), "n_responses".to_string()];
    header.extend(METRIC_NAMES.iter().map(|m| format!("mean_{m}")));
    header.push("best_aggregate_score".to_string());
    w.write_record(&header)?;

    for group in groups {
        let mut row = vec![group.param_set.clone(), group.count.to_string()];
        row.extend(group.mean.iter().map(|v| format_f64_4(*v)));
        row.push(format_f64_4(group.best_aggregate));
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}
