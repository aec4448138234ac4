//! Loading configurations from files.

use displaydoc::Display;
use lifegrid_lib::Config;
use std::{fs, io, path::Path};
use thiserror::Error;

/// Errors when loading a configuration file.
#[derive(Debug, Display, Error)]
pub(crate) enum LoadError {
    /// Unable to read {path}: {source}
    Io { path: String, source: io::Error },
    /// Invalid JSON: {0}
    Json(#[from] serde_json::Error),
    /// Invalid YAML: {0}
    Yaml(#[from] serde_yaml::Error),
    /// Invalid TOML: {0}
    Toml(#[from] toml::de::Error),
    /// Unknown config format {0:?}, expected json, yaml, yml or toml.
    UnknownFormat(String),
}

/// Formats of configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Guesses the format from the file extension.
    pub(crate) fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            _ => Err(LoadError::UnknownFormat(ext)),
        }
    }
}

/// Parses a configuration. Missing fields take their default values.
pub(crate) fn parse_config(text: &str, format: Format) -> Result<Config, LoadError> {
    let config = match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Yaml => serde_yaml::from_str(text)?,
        Format::Toml => toml::from_str(text)?,
    };
    Ok(config)
}

/// Reads and parses a configuration file.
pub(crate) fn load_config(path: &Path) -> Result<Config, LoadError> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&text, format)
}
