//! File gateway.

use std::fs;
use std::path::{Path, PathBuf};

use crate::delivery::error::DeliveryError;
use crate::delivery::gateway::Gateway;
use crate::delivery::message::Message;
use crate::delivery::result::{DeliveryMethod, Receipt};

/// Writes the full message, headers included, to a file.
///
/// An existing file is replaced.
pub struct FileGateway {
    path: PathBuf,
}

impl FileGateway {
    /// Create a gateway writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Gateway for FileGateway {
    fn method(&self) -> DeliveryMethod {
        DeliveryMethod::File
    }

    fn deliver(&self, message: &Message) -> Result<Receipt, DeliveryError> {
        let content = message.render();
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, &content)?;
        Ok(Receipt::Written {
            path: self.path.clone(),
            size_bytes: content.len(),
        })
    }
}
