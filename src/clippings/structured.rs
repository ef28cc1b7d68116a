//! Structured extraction: recover five fields from every record.
//!
//! Segmentation splits on every literal occurrence of the delimiter, even
//! in the middle of a line. Each trimmed, non-empty segment is then matched
//! against one pattern per field; only the first match of each pattern is
//! used.
//!
//! Patterns (first capture group is the value):
//!
//! | field       | pattern                              |
//! |-------------|--------------------------------------|
//! | `title`     | `^([^\n(]+)`                         |
//! | `author`    | `\((.*?)\)`                          |
//! | `page`      | `on page ([0-9]+)`                   |
//! | `when`      | `Added on[\t\n\x0C\r ]+(.+)`         |
//! | `highlight` | `Added on[^\n]+\n?\r?\n?(.*)`        |
//!
//! `highlight` takes the first line after the "Added on" line. Neither
//! `title` nor any other value is trimmed. Whitespace and digit classes are
//! ASCII only, so a non-breaking space after "Added on" does not count.

use std::sync::LazyLock;

use regex::Regex;

use super::error::FieldExtractionError;
use super::types::{Clipping, Field, OnMalformed};
use super::DELIMITER;

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\n(]+)").expect("title pattern is valid"));
static AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("author pattern is valid"));
static PAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"on page ([0-9]+)").expect("page pattern is valid"));
static WHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Added on[\t\n\x0C\r ]+(.+)").expect("when pattern is valid"));
static HIGHLIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Added on[^\n]+\n?\r?\n?(.*)").expect("highlight pattern is valid")
});

impl Field {
    fn pattern(&self) -> &'static Regex {
        match self {
            Field::Title => &TITLE,
            Field::Author => &AUTHOR,
            Field::Page => &PAGE,
            Field::When => &WHEN,
            Field::Highlight => &HIGHLIGHT,
        }
    }
}

/// Extract every record, failing on the first malformed one.
///
/// Records after the malformed one are not examined.
pub fn extract(text: &str) -> Result<Vec<Clipping>, FieldExtractionError> {
    let clippings = extract_each(text).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(records = clippings.len(), "structured extraction finished");
    Ok(clippings)
}

/// Extract every record, yielding one result per non-empty segment.
pub fn extract_each(
    text: &str,
) -> impl Iterator<Item = Result<Clipping, FieldExtractionError>> + '_ {
    extract_each_delimited(text, DELIMITER)
}

/// Same as [`extract_each`] with a custom delimiter.
pub fn extract_each_delimited<'a>(
    text: &'a str,
    delimiter: &'a str,
) -> impl Iterator<Item = Result<Clipping, FieldExtractionError>> + 'a {
    segments(text, delimiter)
        .enumerate()
        .map(|(i, segment)| parse_segment(segment, i + 1))
}

/// Extract with an explicit policy for malformed records.
pub fn extract_with(
    text: &str,
    policy: OnMalformed,
) -> Result<Vec<Clipping>, FieldExtractionError> {
    match policy {
        OnMalformed::Abort => extract(text),
        OnMalformed::Skip => {
            let mut skipped = 0usize;
            let clippings: Vec<Clipping> = extract_each(text)
                .filter_map(|result| match result {
                    Ok(clipping) => Some(clipping),
                    Err(e) => {
                        tracing::warn!("Skipping malformed record: {}", e);
                        skipped += 1;
                        None
                    }
                })
                .collect();
            tracing::debug!(
                records = clippings.len(),
                skipped,
                "structured extraction finished"
            );
            Ok(clippings)
        }
    }
}

/// Trimmed, non-empty segments between literal delimiters.
fn segments<'a>(text: &'a str, delimiter: &'a str) -> impl Iterator<Item = &'a str> {
    text.split(delimiter)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

fn parse_segment(segment: &str, index: usize) -> Result<Clipping, FieldExtractionError> {
    let [title, author, page, when, highlight] = Field::ALL;
    Ok(Clipping::new(
        capture(segment, title, index)?,
        capture(segment, author, index)?,
        capture(segment, page, index)?,
        capture(segment, when, index)?,
        capture(segment, highlight, index)?,
    ))
}

/// First capture group of the field's first match.
fn capture(segment: &str, field: Field, index: usize) -> Result<String, FieldExtractionError> {
    field
        .pattern()
        .captures(segment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(FieldExtractionError { field, index })
}
