// ETA estimation for running and finished jobs
// Linear projection: total = elapsed / (progress / 100)

use log::{debug, trace};

use super::progress::progress_fraction;
use super::status::{is_completed_status, normalize_status};
use crate::models::{ProcessingDetails, ProcessingEta};
use crate::utils::{Clock, SystemClock};

/// Estimates timing figures against an injected clock
#[derive(Debug, Clone, Default)]
pub struct EtaEstimator<C = SystemClock> {
    clock: C,
}

impl EtaEstimator<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> EtaEstimator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn estimate(
        &self,
        details: Option<&ProcessingDetails>,
        progress: Option<f64>,
        status: Option<&str>,
    ) -> ProcessingEta {
        let is_completed = is_completed_status(&normalize_status(status));

        let Some(details) = details else {
            return ProcessingEta::unknown();
        };
        let Some(started_at) = details.started_at_seconds() else {
            debug!("No start time on processing details, skipping estimate");
            return ProcessingEta::unknown();
        };
        let updated_at = details.updated_at_seconds();
        let started = started_at as f64;

        // Running jobs never report less elapsed time than "now" implies
        let reference = if is_completed {
            updated_at.unwrap_or(started_at) as f64
        } else {
            (updated_at.unwrap_or(started_at) as f64)
                .max(started)
                .max(self.clock.now_seconds())
        };
        let elapsed = round_non_negative(reference - started);

        if is_completed {
            let total = details
                .processing_time_seconds()
                .map(round_non_negative)
                .unwrap_or(elapsed);
            return ProcessingEta {
                elapsed_seconds: Some(elapsed),
                remaining_seconds: Some(0),
                estimated_total_seconds: Some(total),
            };
        }

        let Some(fraction) = progress_fraction(progress) else {
            return ProcessingEta {
                elapsed_seconds: Some(elapsed),
                ..ProcessingEta::unknown()
            };
        };

        let projected = elapsed as f64 / fraction;
        trace!(
            "Projected total {:.1}s from {}s elapsed at {:.3} done",
            projected,
            elapsed,
            fraction
        );

        ProcessingEta {
            elapsed_seconds: Some(elapsed),
            remaining_seconds: Some(round_non_negative(projected - elapsed as f64)),
            estimated_total_seconds: Some(round_non_negative(projected)),
        }
    }
}

/// Estimate against the system clock
pub fn estimate_processing_times(
    details: Option<&ProcessingDetails>,
    progress: Option<f64>,
    status: Option<&str>,
) -> ProcessingEta {
    EtaEstimator::new().estimate(details, progress, status)
}

fn round_non_negative(seconds: f64) -> u64 {
    if seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    }
}
