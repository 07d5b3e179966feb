//! Credential configuration for the exporter
//!
//! The API token is read from a small JSON file (`config.json` in the working
//! directory by default) holding a `TOKEN` string field.

use crate::error::{ExportError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use todoist_export_common::{CONFIG_FILENAME, TOKEN_FIELD};
use tracing::debug;

/// API token used to authenticate against Todoist.
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building the `Authorization` header
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// On-disk layout of the config file; other keys are ignored
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "TOKEN")]
    token: Option<String>,
}

/// Exporter configuration loaded from disk
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// API token
    pub credential: Credential,
    /// File the configuration was read from
    pub source: PathBuf,
}

impl ExporterConfig {
    /// Load `config.json` from the current working directory
    ///
    /// # Errors
    /// Returns an error if the file is missing, is not a JSON object, or lacks
    /// a non-empty `TOKEN` string
    pub fn load() -> Result<Self> {
        Self::from_file(CONFIG_FILENAME)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    /// Returns an error if the file is missing, is not a JSON object, or lacks
    /// a non-empty `TOKEN` string
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from file: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExportError::ConfigNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ExportError::configuration(format!("Failed to read {}: {e}", path.display()))
            }
        })?;

        let credential = Self::parse_credential(path, &content)?;

        Ok(Self {
            credential,
            source: path.to_path_buf(),
        })
    }

    fn parse_credential(path: &Path, content: &str) -> Result<Credential> {
        let invalid =
            |message: String| ExportError::configuration(format!("{}: {message}", path.display()));

        let value: Value =
            serde_json::from_str(content).map_err(|e| invalid(format!("invalid JSON: {e}")))?;
        if !value.is_object() {
            return Err(invalid("expected a JSON object".to_string()));
        }

        let raw: RawConfig = serde_json::from_value(value)
            .map_err(|e| invalid(format!("{TOKEN_FIELD} entry must be a string: {e}")))?;

        match raw.token.as_deref().map(str::trim) {
            Some("") => Err(invalid(format!("{TOKEN_FIELD} entry is empty"))),
            Some(token) => Ok(Credential::new(token)),
            None => Err(invalid(format!("missing {TOKEN_FIELD} entry"))),
        }
    }
}
