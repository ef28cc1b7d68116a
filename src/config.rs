//! Configuration loaded from a TOML file, environment and CLI flags.
//!
//! Precedence, lowest first: built-in defaults, the config file,
//! environment variables, command line flags.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::clippings::{OnMalformed, Variant};
use crate::delivery::{DeliveryMethod, Envelope, DEFAULT_SUBJECT};

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "REMIND_CONFIG";

/// Environment variable naming the clippings export.
pub const CLIPPINGS_PATH_ENV: &str = "CLIPPINGS_FILE_PATH";

/// Environment variable for the sender address.
pub const SENDER_ENV: &str = "SENDER_EMAIL";

/// Environment variable for the recipient address.
pub const RECIPIENT_ENV: &str = "RECIPIENT_EMAIL";

/// Number of records in a digest unless configured otherwise.
pub const DEFAULT_COUNT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub clippings: ClippingsConfig,
    pub digest: DigestConfig,
    pub delivery: DeliveryConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClippingsConfig {
    /// Path to the e-reader export, e.g. "My Clippings.txt"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub variant: Variant,
    pub on_malformed: OnMalformed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    pub count: usize,
    /// Template for structured digests; the built-in one when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            template: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    pub method: DeliveryMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    pub subject: String,
    /// Destination for the `file` method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Program and arguments for the `command` method
    pub command: Vec<String>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            method: DeliveryMethod::Stdout,
            sender: None,
            recipient: None,
            subject: DEFAULT_SUBJECT.to_string(),
            output: None,
            command: vec!["sendmail".to_string(), "-t".to_string()],
        }
    }
}

impl DeliveryConfig {
    /// Sender, recipient and subject as an envelope.
    pub fn envelope(&self) -> Envelope {
        Envelope {
            sender: self.sender.clone(),
            recipient: self.recipient.clone(),
            subject: self.subject.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Append log events to this file in addition to stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load from the config file (if any) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            Self::from_toml(&content)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Location of the config file.
    ///
    /// `$REMIND_CONFIG` when set, otherwise `<config dir>/remind/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("remind").join("config.toml"))
    }

    /// Write this config to the config file, creating parent directories.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, self.to_toml()?)?;
        Ok(path)
    }

    /// Apply environment overrides through a lookup function.
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = get(CLIPPINGS_PATH_ENV) {
            self.clippings.path = Some(PathBuf::from(path));
        }
        if let Some(sender) = get(SENDER_ENV) {
            self.delivery.sender = Some(sender);
        }
        if let Some(recipient) = get(RECIPIENT_ENV) {
            self.delivery.recipient = Some(recipient);
        }
    }
}
