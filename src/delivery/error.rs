//! Delivery errors.

use std::io;

/// Errors that can occur while handing a digest to a gateway.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("No {0} address configured")]
    MissingAddress(&'static str),

    #[error("File delivery needs an output path")]
    MissingOutput,

    #[error("No mail command configured")]
    NoCommand,

    #[error("Failed to start '{program}': {source}")]
    Spawn { program: String, source: io::Error },

    #[error("Mail command '{program}' failed with status {status}: {stderr}")]
    Rejected {
        program: String,
        status: i32,
        stderr: String,
    },

    #[error("Failed to write digest: {0}")]
    Io(#[from] io::Error),
}

impl DeliveryError {
    /// Status code reported by the transport, if any.
    pub fn status(&self) -> Option<i32> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
