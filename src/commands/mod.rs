//! Command handlers for the remind binary.

pub mod completions;
pub mod config;
pub mod list;
pub mod send;

use std::path::PathBuf;

use anyhow::{bail, Result};

use remind::cli::SourceArgs;
use remind::config::CLIPPINGS_PATH_ENV;
use remind::{Config, OnMalformed};

/// Apply source flags to the loaded config.
pub fn apply_source_args(config: &mut Config, source: &SourceArgs) {
    if let Some(path) = &source.clippings {
        config.clippings.path = Some(path.clone());
    }
    if let Some(variant) = source.variant {
        config.clippings.variant = variant;
    }
    if source.skip_malformed {
        config.clippings.on_malformed = OnMalformed::Skip;
    }
}

/// The clippings export to read, or a helpful error.
pub fn clippings_path(config: &Config) -> Result<PathBuf> {
    match &config.clippings.path {
        Some(path) => Ok(path.clone()),
        None => bail!(
            "No clippings file configured. Pass --clippings, set {} or add [clippings] path to the config file.",
            CLIPPINGS_PATH_ENV
        ),
    }
}
