// Display settings data models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// How many units a short duration shows, coarsest first ("1h 1m" at 2)
    #[serde(default = "default_max_duration_units")]
    pub max_duration_units: usize,
    /// Label a job by its status when it reports no stage
    #[serde(default = "default_stage_fallback_to_status")]
    pub stage_fallback_to_status: bool,
}

fn default_max_duration_units() -> usize {
    2
}

fn default_stage_fallback_to_status() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_duration_units: default_max_duration_units(),
            stage_fallback_to_status: default_stage_fallback_to_status(),
        }
    }
}
