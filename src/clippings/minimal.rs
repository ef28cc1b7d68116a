//! Minimal extraction: every record is one opaque block of text.
//!
//! Segmentation is line based. A line that *starts with* the delimiter
//! closes the current record; a delimiter appearing later in a line is
//! ordinary text. Blank lines are dropped, the remaining lines keep their
//! line breaks, and each record is trimmed.

use super::DELIMITER;

/// Split an export into trimmed, non-empty text blocks in source order.
pub fn extract(text: &str) -> Vec<String> {
    extract_delimited(text, DELIMITER)
}

/// Same as [`extract`] with a custom delimiter.
pub fn extract_delimited(text: &str, delimiter: &str) -> Vec<String> {
    let mut notes = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.starts_with(delimiter) {
            flush(&mut current, &mut notes);
        } else if !line.trim().is_empty() {
            current.push_str(line);
            current.push('\n');
        }
    }

    // Trailing record without a closing delimiter
    flush(&mut current, &mut notes);

    tracing::debug!(records = notes.len(), "minimal extraction finished");
    notes
}

fn flush(current: &mut String, notes: &mut Vec<String>) {
    if !current.is_empty() {
        notes.push(current.trim().to_string());
        current.clear();
    }
}
