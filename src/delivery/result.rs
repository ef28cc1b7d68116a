//! Delivery outcomes and method identifiers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The result of a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    /// Digest body was printed to standard output
    Printed,
    /// Full message was written to a file
    Written { path: PathBuf, size_bytes: usize },
    /// Full message was accepted by a mail command
    Sent { program: String, recipient: String },
}

impl Receipt {
    /// User-friendly message describing what happened.
    ///
    /// `None` when the digest itself was the output.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Printed => None,
            Self::Written { path, size_bytes } => Some(format!(
                "Wrote digest to {} ({} bytes)",
                path.display(),
                size_bytes
            )),
            Self::Sent { program, recipient } => {
                Some(format!("Sent digest to {} via {}", recipient, program))
            }
        }
    }
}

/// How a digest leaves the process.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    /// Print the digest body
    #[default]
    Stdout,
    /// Write the full message to a file
    File,
    /// Pipe the full message into a mail command such as `sendmail -t`
    Command,
}

impl DeliveryMethod {
    /// Method name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::File => "file",
            Self::Command => "command",
        }
    }
}
