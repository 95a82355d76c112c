//! YAML configuration file support.
//!
//! Loads the extraction settings and the field mapping from a single YAML
//! file.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "media library"
//!
//! extraction:
//!   text_cutoff_length: 64000
//!
//! fields:
//!   content: "_Content"
//!   title: "Title"
//!   keywords: "Keywords"
//!   description: "Description"
//!
//! env_overrides:
//!   MediaIndexing.PdfTextCutOffLength: "32000"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use normalize::{DEFAULT_TEXT_CUTOFF_LENGTH, NormalizeConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::writer::FieldMapping;

/// Setting name whose `env_overrides` entry replaces the text cutoff.
pub const CUTOFF_OVERRIDE_KEY: &str = "MediaIndexing.PdfTextCutOffLength";

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MediaIndexConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub extraction: ExtractionYamlConfig,

    /// Item fields receiving extraction results
    #[serde(default)]
    pub fields: FieldMapping,

    /// Host setting overrides, keyed by setting name
    #[serde(default)]
    pub env_overrides: HashMap<String, String>,
}

impl MediaIndexConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: MediaIndexConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.cutoff_override()?;

        for (key, name) in [
            ("fields.content", &self.fields.content),
            ("fields.title", &self.fields.title),
            ("fields.keywords", &self.fields.keywords),
            ("fields.description", &self.fields.description),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigLoadError::Validation(format!(
                    "{key} must not be empty"
                )));
            }
        }

        Ok(())
    }

    fn cutoff_override(&self) -> Result<Option<usize>, ConfigLoadError> {
        self.env_overrides
            .get(CUTOFF_OVERRIDE_KEY)
            .map(|raw| {
                raw.trim().parse::<usize>().map_err(|_| {
                    ConfigLoadError::Validation(format!(
                        "{CUTOFF_OVERRIDE_KEY} must be a non-negative integer, got {raw:?}"
                    ))
                })
            })
            .transpose()
    }

    /// Normalization settings, with the cutoff override applied.
    ///
    /// The override is parsed again here, so an entry edited after loading
    /// is reported instead of silently ignored.
    pub fn normalize_config(&self) -> Result<NormalizeConfig, ConfigLoadError> {
        let cutoff = self
            .cutoff_override()?
            .unwrap_or(self.extraction.text_cutoff_length);
        Ok(NormalizeConfig::with_cutoff(cutoff))
    }

    pub fn field_mapping(&self) -> FieldMapping {
        self.fields.clone()
    }
}

impl Default for MediaIndexConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            extraction: ExtractionYamlConfig::default(),
            fields: FieldMapping::default(),
            env_overrides: HashMap::new(),
        }
    }
}

/// Extraction YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionYamlConfig {
    /// Soft limit on normalized characters per document
    #[serde(default = "default_text_cutoff_length")]
    pub text_cutoff_length: usize,
}

impl Default for ExtractionYamlConfig {
    fn default() -> Self {
        Self {
            text_cutoff_length: default_text_cutoff_length(),
        }
    }
}

fn default_text_cutoff_length() -> usize {
    DEFAULT_TEXT_CUTOFF_LENGTH
}
