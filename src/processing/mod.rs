// Presentation helpers for file-processing jobs
pub mod duration;
pub mod eta;
pub mod progress;
pub mod stage;
pub mod status;
pub mod steps;
pub mod summary;

pub use duration::{format_duration_short, format_duration_with_units};
pub use eta::{estimate_processing_times, EtaEstimator};
pub use progress::normalize_progress;
pub use stage::format_processing_stage;
pub use status::{is_completed_status, is_file_processing, is_processing_status, normalize_status, COMPLETED_STATUSES};
pub use steps::resolve_processing_steps;
pub use summary::{summarize_file, ProcessingSummary, StepSummary};
