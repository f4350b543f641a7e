use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::model::metrics::MetricVector;

/// Generation parameters attached to a response. Opaque to scoring and
/// passed through with its original key order and values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet(pub Map<String, Value>);

impl ParamSet {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compact JSON form, used both as the CSV cell and as the grouping key.
    pub fn canonical_key(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub param_set: ParamSet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl GeneratedEntry {
    pub fn new(param_set: ParamSet, text: impl Into<String>) -> Self {
        Self {
            param_set,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedEntry {
    pub param_set: ParamSet,
    pub text: String,
    pub metrics: MetricVector,
}

impl AnnotatedEntry {
    pub fn new(entry: GeneratedEntry, metrics: MetricVector) -> Self {
        Self {
            param_set: entry.param_set,
            text: entry.text,
            metrics,
        }
    }
}

/// A scoring request as stored on disk: one shared prompt and its responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default, alias = "responses")]
    pub entries: Vec<GeneratedEntry>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
