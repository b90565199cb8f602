// Output formatting — terminal report, TSV record and JSON document.
//
// Renderers are read-only views over a finished `Analysis`; none of them
// computes anything the pipeline did not already produce.

pub mod json;
pub mod terminal;
pub mod tsv;

/// Which renderer prints the main result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Coloured tables for people
    Human,
    /// The fixed-schema tab-separated record
    Tsv,
    /// The full report as JSON
    Json,
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with "…".
///
/// Counts characters, not bytes, so multi-byte words never split mid-char.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some(_) => {
            let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
            format!("{kept}…")
        }
    }
}

/// A proportion as a percentage with the given precision.
pub fn percent(value: f64, precision: usize) -> String {
    format!("{:.*}%", precision, value * 100.0)
}
