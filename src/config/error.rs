//! Configuration errors.

use std::path::PathBuf;

use http::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

/// Error raised while loading, merging or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write config file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value with no default was given neither on the command line nor
    /// in the config file.
    #[error("Missing {field}: {hint}")]
    MissingRequired {
        field: &'static str,
        hint: &'static str,
    },

    #[error("Base URL '{url}' is invalid: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{field} must be greater than 0")]
    ZeroDuration { field: &'static str },

    #[error("--data is not valid JSON")]
    InvalidData {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid header '{header}'")]
    InvalidHeader {
        header: String,
        #[source]
        source: HeaderError,
    },
}

/// Why a header given on the command line or in the config file was rejected.
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("expected 'Key=Value' or 'Key: Value'")]
    MissingSeparator,

    #[error(transparent)]
    Name(#[from] InvalidHeaderName),

    #[error(transparent)]
    Value(#[from] InvalidHeaderValue),
}

/// Field names reported by [`ConfigError::MissingRequired`].
pub mod field {
    pub const METHOD: &str = "method";
    pub const PATH: &str = "path";
    pub const BASE_URL: &str = "base_url";
}

impl ConfigError {
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }

    pub(crate) fn header(header: impl Into<String>, source: impl Into<HeaderError>) -> Self {
        Self::InvalidHeader {
            header: header.into(),
            source: source.into(),
        }
    }
}
