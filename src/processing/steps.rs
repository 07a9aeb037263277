use crate::models::{ProcessingDetails, ProcessingStep};

/// Steps in the order the backend reported them
pub fn resolve_processing_steps(details: Option<&ProcessingDetails>) -> Vec<(&str, &ProcessingStep)> {
    details
        .and_then(|d| d.steps.as_ref())
        .map(|steps| steps.iter().map(|(key, step)| (key.as_str(), step)).collect())
        .unwrap_or_default()
}
