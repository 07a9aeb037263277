/// Turn a stage token like "extracting_text" into a display label.
///
/// Only the first character of each fragment is upper-cased; the rest is kept
/// as-is, so "OCR_pass" stays "OCR Pass" and "parseHTML" stays "ParseHTML".
pub fn format_processing_stage(stage: Option<&str>, fallback: Option<&str>) -> String {
    let source = match stage.filter(|s| !s.is_empty()).or(fallback) {
        Some(source) if !source.is_empty() => source,
        _ => return String::new(),
    };

    source
        .split(is_separator)
        .filter(|part| !part.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

// char::is_whitespace leaves out U+FEFF
fn is_separator(c: char) -> bool {
    c == '_' || c == '\u{FEFF}' || c.is_whitespace()
}

fn capitalize_first(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
