//! Status, progress and ETA derivations for asynchronous file-processing jobs.
//!
//! Everything here is a pure function of the record it is given, apart from
//! the ETA estimator reading the current time through a [`Clock`].

pub mod error;
pub mod models;
pub mod processing;
pub mod utils;

pub use error::{ProcessingError, Result};
pub use models::{
    DisplaySettings, FileRecord, ProcessingDetails, ProcessingEta, ProcessingMetrics, ProcessingStep,
};
pub use processing::{
    estimate_processing_times, format_duration_short, format_duration_with_units,
    format_processing_stage, is_file_processing, is_processing_status, normalize_progress,
    resolve_processing_steps, summarize_file, EtaEstimator, ProcessingSummary, StepSummary,
};
pub use utils::{Clock, FixedClock, SystemClock};
