use std::io::{BufRead, Read};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub mod reader;

use crate::model::entry::{BatchRequest, GeneratedEntry};
use reader::{logical_extension, open_maybe_gz};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    JsonLines,
}

#[derive(Debug, Clone)]
pub struct InputBundle {
    pub prompt: String,
    pub entries: Vec<GeneratedEntry>,
    pub format: InputFormat,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("parse error at line {line}: {source}")]
    ParseLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Request(BatchRequest),
    Entries(Vec<GeneratedEntry>),
}

pub fn detect_format(path: &Path) -> InputFormat {
    match logical_extension(path).as_deref() {
        Some("jsonl") | Some("ndjson") => InputFormat::JsonLines,
        _ => InputFormat::Json,
    }
}

/// Loads a batch. `prompt_override` wins over a prompt stored in the file;
/// JSON Lines input carries no prompt and therefore requires one.
pub fn load_batch(path: &Path, prompt_override: Option<String>) -> Result<InputBundle, InputError> {
    let format = detect_format(path);
    let reader = open_maybe_gz(path)?;
    let (file_prompt, entries) = match format {
        InputFormat::Json => parse_json(reader)?,
        InputFormat::JsonLines => (None, parse_json_lines(reader)?),
    };

    let prompt = prompt_override.or(file_prompt).ok_or_else(|| {
        InputError::MissingInput(format!(
            "no prompt in {} (use --prompt or --prompt-file)",
            path.display()
        ))
    })?;

    tracing::info!(
        path = %path.display(),
        n_entries = entries.len(),
        format = ?format,
        "loaded batch"
    );
    if prompt.trim().is_empty() {
        tracing::warn!("prompt is empty; keyword coverage will be 0 for every entry");
    }
    if entries.is_empty() {
        tracing::warn!("batch has no entries");
    }

    Ok(InputBundle {
        prompt,
        entries,
        format,
    })
}

pub fn parse_json(mut reader: impl Read) -> Result<(Option<String>, Vec<GeneratedEntry>), InputError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    match serde_json::from_str::<JsonDocument>(&buf)? {
        JsonDocument::Request(req) => Ok((req.prompt, req.entries)),
        JsonDocument::Entries(entries) => Ok((None, entries)),
    }
}

pub fn parse_json_lines(reader: impl BufRead) -> Result<Vec<GeneratedEntry>, InputError> {
    let mut entries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry = serde_json::from_str(&line).map_err(|source| InputError::ParseLine {
            line: idx + 1,
            source,
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

pub fn read_prompt_file(path: &Path) -> Result<String, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut prompt = String::new();
    reader.read_to_string(&mut prompt)?;
    Ok(prompt.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
