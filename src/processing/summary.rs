// Everything a file row needs to render its processing state, in one pass

use serde::Serialize;

use super::duration::format_duration_with_units;
use super::eta::EtaEstimator;
use super::progress::normalize_progress;
use super::stage::format_processing_stage;
use super::status::{is_file_processing, is_processing_status};
use super::steps::resolve_processing_steps;
use crate::models::{DisplaySettings, FileRecord, ProcessingEta};
use crate::utils::{Clock, SystemClock};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepSummary {
    pub key: String,
    pub label: String,
    pub status: Option<String>,
    pub is_processing: bool,
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingSummary {
    pub is_processing: bool,
    pub progress: Option<u8>,
    pub stage_label: String,
    pub steps: Vec<StepSummary>,
    pub eta: ProcessingEta,
    pub elapsed_label: String,
    pub remaining_label: String,
    pub total_label: String,
}

impl ProcessingSummary {
    pub fn for_file(file: &FileRecord) -> Self {
        summarize_file(file, &SystemClock, &DisplaySettings::default())
    }
}

pub fn summarize_file<C: Clock>(
    file: &FileRecord,
    clock: &C,
    settings: &DisplaySettings,
) -> ProcessingSummary {
    let details = file.processing_details.as_ref();
    let status_fallback = if settings.stage_fallback_to_status {
        file.status.as_deref()
    } else {
        None
    };

    let steps = resolve_processing_steps(details)
        .into_iter()
        .map(|(key, step)| StepSummary {
            key: key.to_string(),
            label: format_processing_stage(step.label.as_deref(), Some(key)),
            status: step.status.clone(),
            is_processing: is_processing_status(step.status.as_deref(), step.progress),
            progress: normalize_progress(step.progress),
        })
        .collect();

    let eta = EtaEstimator::with_clock(clock).estimate(details, file.progress, file.status.as_deref());
    let label = |seconds: Option<u64>| {
        format_duration_with_units(seconds.map(|s| s as f64), settings.max_duration_units)
    };

    ProcessingSummary {
        is_processing: is_file_processing(Some(file)),
        progress: normalize_progress(file.progress),
        stage_label: format_processing_stage(file.stage.as_deref(), status_fallback),
        steps,
        eta,
        elapsed_label: label(eta.elapsed_seconds),
        remaining_label: label(eta.remaining_seconds),
        total_label: label(eta.estimated_total_seconds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FixedClock;
    use serde_json::json;

    const T: f64 = 1_700_000_000.0;

    fn running_file() -> FileRecord {
        FileRecord::from_json_value(&json!({
            "status": "processing",
            "progress": 25,
            "stage": "extracting_text",
            "processing_details": {
                "started_at": T,
                "steps": {
                    "upload": { "label": "Upload", "status": "completed", "progress": 100 },
                    "ocr_pass": { "status": "running", "progress": 12.4 },
                    "embed": {}
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_running_summary() {
        let summary = summarize_file(&running_file(), &FixedClock(T + 900.0), &DisplaySettings::default());

        assert!(summary.is_processing);
        assert_eq!(summary.progress, Some(25));
        assert_eq!(summary.stage_label, "Extracting Text");
        assert_eq!(summary.eta.elapsed_seconds, Some(900));
        assert_eq!(summary.eta.estimated_total_seconds, Some(3600));
        assert_eq!(summary.eta.remaining_seconds, Some(2700));
        assert_eq!(summary.elapsed_label, "15m");
        assert_eq!(summary.remaining_label, "45m");
        assert_eq!(summary.total_label, "1h");

        let labels: Vec<&str> = summary.steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Upload", "Ocr Pass", "Embed"]);
        assert!(!summary.steps[0].is_processing);
        assert!(summary.steps[1].is_processing);
        assert_eq!(summary.steps[1].progress, Some(12));
        assert!(!summary.steps[2].is_processing);
    }

    #[test]
    fn test_stage_falls_back_to_status() {
        let file = FileRecord::new("waiting_for_upload", None);
        let summary = summarize_file(&file, &FixedClock(T), &DisplaySettings::default());
        assert_eq!(summary.stage_label, "Waiting For Upload");
        assert_eq!(summary.eta, ProcessingEta::unknown());
        assert_eq!(summary.elapsed_label, "");

        let settings = DisplaySettings {
            stage_fallback_to_status: false,
            ..Default::default()
        };
        assert_eq!(summarize_file(&file, &FixedClock(T), &settings).stage_label, "");
    }

    #[test]
    fn test_summary_serializes_for_ui() {
        let value = serde_json::to_value(summarize_file(
            &running_file(),
            &FixedClock(T + 60.0),
            &DisplaySettings::default(),
        ))
        .unwrap();
        assert_eq!(value["isProcessing"], json!(true));
        assert_eq!(value["eta"]["elapsedSeconds"], json!(60));
        assert_eq!(value["steps"][1]["key"], json!("ocr_pass"));
    }

    #[test]
    fn test_for_file_on_legacy_record() {
        let summary = ProcessingSummary::for_file(&FileRecord::default());
        assert!(!summary.is_processing);
        assert_eq!(summary.progress, None);
        assert!(summary.steps.is_empty());
        assert_eq!(summary.stage_label, "");
    }
}
