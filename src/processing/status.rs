// Processing status classification

use crate::models::FileRecord;

/// Terminal states: no further progress will be reported once a job reaches one
pub const COMPLETED_STATUSES: &[&str] = &[
    "completed",
    "failed",
    "ready",
    "available",
    "success",
    "skipped",
];

pub fn normalize_status(status: Option<&str>) -> String {
    status.map(|s| s.trim().to_lowercase()).unwrap_or_default()
}

pub fn is_completed_status(normalized: &str) -> bool {
    COMPLETED_STATUSES.contains(&normalized)
}

/// Whether a job should still be shown as in progress.
///
/// Progress overrides the status token except for "failed": `>= 100` means done,
/// a negative value means the job has started but reports no progress yet.
/// A record with neither status nor progress is treated as finished (legacy
/// items carry no processing metadata).
pub fn is_processing_status(status: Option<&str>, progress: Option<f64>) -> bool {
    let normalized = normalize_status(status);

    if normalized == "failed" {
        return false;
    }

    if let Some(progress) = progress.filter(|p| !p.is_nan()) {
        if progress >= 100.0 {
            return false;
        }
        if progress < 0.0 {
            return true;
        }
    }

    if normalized.is_empty() {
        return false;
    }

    !is_completed_status(&normalized)
}

pub fn is_file_processing(file: Option<&FileRecord>) -> bool {
    match file {
        Some(file) => is_processing_status(file.status.as_deref(), file.progress),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_status() {
        assert_eq!(normalize_status(Some("  Completed\n")), "completed");
        assert_eq!(normalize_status(None), "");
    }

    #[test]
    fn test_failed_is_never_processing() {
        assert!(!is_processing_status(Some("failed"), None));
        assert!(!is_processing_status(Some(" FAILED "), Some(-1.0)));
        assert!(!is_processing_status(Some("failed"), Some(20.0)));
    }

    #[test]
    fn test_missing_metadata_is_done() {
        assert!(!is_processing_status(None, None));
        assert!(!is_processing_status(Some("   "), None));
        assert!(!is_processing_status(None, Some(f64::NAN)));
    }

    #[test]
    fn test_negative_progress_overrides_status() {
        assert!(is_processing_status(None, Some(-1.0)));
        assert!(is_processing_status(Some("completed"), Some(-1.0)));
    }

    #[test]
    fn test_status_decides_mid_progress() {
        assert!(is_processing_status(Some("running"), Some(40.0)));
        assert!(is_processing_status(Some("queued"), None));
        assert!(!is_processing_status(Some("Ready"), Some(40.0)));
        assert!(!is_processing_status(Some("skipped"), None));
        assert!(!is_processing_status(None, Some(40.0)));
    }

    #[test]
    fn test_is_file_processing() {
        assert!(!is_file_processing(None));
        assert!(is_file_processing(Some(&FileRecord::new("processing", Some(10.0)))));
        assert!(!is_file_processing(Some(&FileRecord::new("processing", Some(100.0)))));
        assert!(!is_file_processing(Some(&FileRecord::default())));
    }

    proptest! {
        #[test]
        fn prop_full_progress_is_done(status in ".*", progress in 100.0f64..1e9) {
            prop_assert!(!is_processing_status(Some(status.as_str()), Some(progress)));
        }

        #[test]
        fn prop_negative_progress_is_processing(status in "[a-z ]{0,12}", progress in -1e9f64..-1e-9) {
            let expected = normalize_status(Some(status.as_str())) != "failed";
            prop_assert_eq!(is_processing_status(Some(status.as_str()), Some(progress)), expected);
        }
    }
}
