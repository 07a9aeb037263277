use thiserror::Error;

/// Failures while decoding job records handed over by the UI layer
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Failed to parse processing record: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected a JSON object for {record}, found {found}")]
    NotAnObject { record: &'static str, found: &'static str },
}

pub type Result<T> = std::result::Result<T, ProcessingError>;

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
