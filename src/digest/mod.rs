//! Digest assembly: turn a selection of records into deliverable text.
//!
//! - Minimal records are joined with a blank line between entries.
//! - Structured records are handed to a [`Renderer`] as template input.

mod render;

pub use render::{JinjaRenderer, RenderError, Renderer, BUILTIN_TEMPLATE, BUILTIN_TEMPLATE_NAME};

use crate::clippings::Clipping;

/// Separator placed between minimal records.
pub const NOTE_SEPARATOR: &str = "\n\n";

/// Kind of text a digest body contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Plain,
    Html,
}

impl ContentType {
    /// HTML for `.html`/`.htm` template names, plain text otherwise.
    pub fn from_template_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".html") || lower.ends_with(".htm") {
            Self::Html
        } else {
            Self::Plain
        }
    }

    /// MIME type for message headers.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Plain => "text/plain; charset=utf-8",
            Self::Html => "text/html; charset=utf-8",
        }
    }
}

/// A finished digest, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub body: String,
    pub content_type: ContentType,
    /// Number of records the digest was built from
    pub entries: usize,
}

/// Join minimal records with a blank line between consecutive entries.
pub fn join_notes(notes: &[String]) -> String {
    notes.join(NOTE_SEPARATOR)
}

/// Build a plain digest from minimal records.
pub fn assemble_notes(notes: &[String]) -> Digest {
    Digest {
        body: join_notes(notes),
        content_type: ContentType::Plain,
        entries: notes.len(),
    }
}

/// Build a digest from structured records through a template renderer.
///
/// Rendering failures are returned unchanged.
pub fn assemble(selection: &[Clipping], renderer: &dyn Renderer) -> Result<Digest, RenderError> {
    let body = renderer.render(selection)?;
    tracing::debug!(
        template = renderer.name(),
        entries = selection.len(),
        "rendered digest"
    );
    Ok(Digest {
        body,
        content_type: renderer.content_type(),
        entries: selection.len(),
    })
}
