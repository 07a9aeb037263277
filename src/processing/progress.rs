/// Clamp a raw progress value to a whole percentage
pub fn normalize_progress(progress: Option<f64>) -> Option<u8> {
    let progress = progress.filter(|p| !p.is_nan())?;
    Some(progress.clamp(0.0, 100.0).round() as u8)
}

/// Progress as a projection fraction, only when it lies in (0, 1]
pub(crate) fn progress_fraction(progress: Option<f64>) -> Option<f64> {
    progress
        .filter(|p| p.is_finite())
        .map(|p| p / 100.0)
        .filter(|f| *f > 0.0 && *f <= 1.0)
}
