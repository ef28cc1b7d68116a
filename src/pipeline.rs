//! End-to-end digest pipeline.
//!
//! raw export -> records -> selection -> digest -> gateway
//!
//! Every stage returns its error to the caller untouched, and delivery only
//! runs once a complete digest exists, so a failed run never sends anything.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::clippings::{minimal, structured, FieldExtractionError, OnMalformed};
use crate::delivery::{DeliveryError, Envelope, Gateway, Message, Receipt};
use crate::digest::{self, Digest, RenderError, Renderer};
use crate::sampler::{SampleError, Sampler};

/// Errors that can abort a digest run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to read clippings from {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Extract(#[from] FieldExtractionError),

    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Deliver(#[from] DeliveryError),
}

/// How records are extracted and assembled.
pub enum Layout<'a> {
    /// Opaque text blocks joined by blank lines
    Minimal,
    /// Five-field clippings rendered through a template
    Structured {
        renderer: &'a dyn Renderer,
        on_malformed: OnMalformed,
    },
}

/// Read an export file as text.
///
/// A leading byte order mark is removed; e-reader exports often start
/// with one.
pub fn read_export(path: &Path) -> Result<String, PipelineError> {
    let text = fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read clippings export");
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Extract, sample and assemble a digest from export text.
pub fn compose<R: Rng>(
    export: &str,
    layout: &Layout<'_>,
    count: usize,
    sampler: &mut Sampler<R>,
) -> Result<Digest, PipelineError> {
    match layout {
        Layout::Minimal => {
            let notes = minimal::extract(export);
            tracing::info!(records = notes.len(), count, "sampling minimal records");
            let selection = sampler.sample(notes, count)?;
            Ok(digest::assemble_notes(&selection))
        }
        Layout::Structured {
            renderer,
            on_malformed,
        } => {
            let clippings = structured::extract_with(export, *on_malformed)?;
            tracing::info!(records = clippings.len(), count, "sampling clippings");
            let selection = sampler.sample(clippings, count)?;
            Ok(digest::assemble(&selection, *renderer)?)
        }
    }
}

/// Address a digest and hand it to a gateway.
pub fn deliver(
    digest: &Digest,
    envelope: Envelope,
    gateway: &dyn Gateway,
) -> Result<Receipt, PipelineError> {
    let message = Message::new(envelope, digest);
    let receipt = gateway.deliver(&message)?;
    tracing::info!(
        gateway = gateway.name(),
        entries = digest.entries,
        "digest delivered"
    );
    Ok(receipt)
}
