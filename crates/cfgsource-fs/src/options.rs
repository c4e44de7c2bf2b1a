//! Directory source options

use std::path::Path;

use cfgsource_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Behaviour options for a [`DirectorySource`](crate::DirectorySource)
///
/// Fixed at construction; a source never changes policy afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DirectorySourceOptions {
    /// Descend into subdirectories when listing
    #[serde(alias = "recursive")]
    pub recurse: bool,

    /// Resolve the root path against the current working directory
    #[serde(alias = "relativeRootPath", alias = "relative_root", alias = "relative_root_path")]
    pub relative_root: bool,

    /// Surface failed reads as errors instead of absent values
    #[serde(alias = "throw_errors")]
    pub throw_errors: bool,
}

/// Options file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// TOML format
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a file extension, defaulting to YAML
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

impl DirectorySourceOptions {
    /// Options with every flag off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether subdirectories are traversed
    pub fn with_recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }

    /// Set whether the root is resolved against the working directory
    pub fn with_relative_root(mut self, relative_root: bool) -> Self {
        self.relative_root = relative_root;
        self
    }

    /// Set whether failed reads are surfaced as errors
    pub fn with_throw_errors(mut self, throw_errors: bool) -> Self {
        self.throw_errors = throw_errors;
        self
    }

    /// Parse options from a JSON, YAML or TOML document
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Json => serde_json::from_str(content)
                .map_err(|e| Error::Config(format!("Invalid JSON: {}", e))),
            ConfigFormat::Yaml => {
                // An empty YAML document means "all defaults"
                if content.trim().is_empty() {
                    return Ok(Self::default());
                }
                serde_yaml::from_str(content)
                    .map_err(|e| Error::Config(format!("Invalid YAML: {}", e)))
            }
            ConfigFormat::Toml => {
                toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
            }
        }
    }

    /// Load options from a file, picking the format from its extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            error!("Failed to read options file {:?}: {}", path, e);
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let options = Self::parse(&contents, ConfigFormat::detect(path))?;
        debug!(?path, ?options, "Loaded directory source options");
        Ok(options)
    }
}
