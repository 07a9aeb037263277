// Compact duration labels ("2d 3h", "4m 10s")

const UNITS: [(u64, &str); 4] = [(86_400, "d"), (3_600, "h"), (60, "m"), (1, "s")];

const DEFAULT_MAX_UNITS: usize = 2;

pub fn format_duration_short(seconds: Option<f64>) -> String {
    format_duration_with_units(seconds, DEFAULT_MAX_UNITS)
}

/// Render up to `max_units` of the coarsest non-zero units
pub fn format_duration_with_units(seconds: Option<f64>, max_units: usize) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite()) else {
        return String::new();
    };

    let mut remaining = if seconds > 0.0 { seconds.round() as u64 } else { 0 };
    if remaining == 0 {
        return "0s".to_string();
    }

    let max_units = max_units.max(1);
    let mut parts = Vec::with_capacity(max_units);
    for (size, label) in UNITS {
        if remaining >= size {
            let count = remaining / size;
            remaining -= count * size;
            parts.push(format!("{}{}", count, label));
        }
        if parts.len() == max_units {
            break;
        }
    }

    if parts.is_empty() {
        return "1s".to_string();
    }
    parts.join(" ")
}
