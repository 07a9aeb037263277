// Processing record data models
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{json_kind, ProcessingError, Result};
use crate::utils::lenient::{lenient_f64, lenient_string, number_only_f64};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStep {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Only JSON numbers count; "50" is treated as no progress
    #[serde(default, deserialize_with = "number_only_f64", skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingMetrics {
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub processing_time_seconds: Option<f64>,
}

/// Timing and per-step detail attached to a job by the processing backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingDetails {
    /// Unix seconds
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<f64>,
    /// Unix seconds
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metrics", skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ProcessingMetrics>,
    #[serde(default, deserialize_with = "lenient_steps", skip_serializing_if = "Option::is_none")]
    pub steps: Option<IndexMap<String, ProcessingStep>>,
}

impl ProcessingDetails {
    pub fn from_json_value(value: &Value) -> Result<Self> {
        ensure_object("processing details", value)?;
        Ok(Self::deserialize(value)?)
    }

    pub fn started_at_seconds(&self) -> Option<i64> {
        self.started_at.and_then(floor_seconds)
    }

    pub fn updated_at_seconds(&self) -> Option<i64> {
        self.updated_at.and_then(floor_seconds)
    }

    /// Reported processing duration, only when it is a positive number
    pub fn processing_time_seconds(&self) -> Option<f64> {
        self.metrics
            .as_ref()
            .and_then(|m| m.processing_time_seconds)
            .filter(|s| s.is_finite() && *s > 0.0)
    }
}

/// The subset of a file/job record the status helpers look at
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Only JSON numbers count; "50" is treated as no progress
    #[serde(default, deserialize_with = "number_only_f64", skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(
        default,
        alias = "processingDetails",
        deserialize_with = "lenient_details",
        skip_serializing_if = "Option::is_none"
    )]
    pub processing_details: Option<ProcessingDetails>,
}

impl FileRecord {
    pub fn new(status: impl Into<String>, progress: Option<f64>) -> Self {
        Self {
            status: Some(status.into()),
            progress,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }

    pub fn from_json_value(value: &Value) -> Result<Self> {
        ensure_object("file record", value)?;
        Ok(Self::deserialize(value)?)
    }
}

/// Elapsed / remaining / projected total, in whole seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingEta {
    pub elapsed_seconds: Option<u64>,
    pub remaining_seconds: Option<u64>,
    pub estimated_total_seconds: Option<u64>,
}

impl ProcessingEta {
    pub fn unknown() -> Self {
        Self::default()
    }
}

fn floor_seconds(value: f64) -> Option<i64> {
    if value.is_finite() {
        Some(value.floor() as i64)
    } else {
        None
    }
}

fn ensure_object(record: &'static str, value: &Value) -> Result<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(ProcessingError::NotAnObject {
            record,
            found: json_kind(value),
        })
    }
}

fn lenient_object<'de, D, T>(deserializer: D, what: &str) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(v @ Value::Object(_)) => match serde_json::from_value(v) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!("Dropping malformed {}: {}", what, e);
                None
            }
        },
        Some(Value::Null) | None => None,
        Some(other) => {
            debug!("Dropping {} of type {}", what, json_kind(&other));
            None
        }
    })
}

fn lenient_metrics<'de, D>(deserializer: D) -> std::result::Result<Option<ProcessingMetrics>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_object(deserializer, "metrics")
}

fn lenient_details<'de, D>(deserializer: D) -> std::result::Result<Option<ProcessingDetails>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_object(deserializer, "processing details")
}

fn lenient_steps<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<IndexMap<String, ProcessingStep>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IndexMap<String, Value>> = lenient_object(deserializer, "steps")?;
    Ok(raw.map(|entries| {
        entries
            .into_iter()
            .filter_map(|(key, value)| {
                if !value.is_object() {
                    debug!("Dropping step {:?} of type {}", key, json_kind(&value));
                    return None;
                }
                match serde_json::from_value::<ProcessingStep>(value) {
                    Ok(step) => Some((key, step)),
                    Err(e) => {
                        debug!("Dropping malformed step {:?}: {}", key, e);
                        None
                    }
                }
            })
            .collect()
    }))
}
