//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::client::{Credentials, PASSWORD_KEY, USERNAME_KEY};

use super::cli::{Cli, Verb};
use super::defaults;
use super::error::{ConfigError, HeaderError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Verb to issue (required)
    pub verb: Verb,

    /// Request path relative to `base_url` (required)
    pub path: String,

    /// Base URL of the remote API (required)
    pub base_url: Url,

    /// Parsed request body
    pub data: Option<Value>,

    /// HTTP headers sent with the request
    pub headers: HeaderMap,

    /// Basic-auth credentials
    pub credentials: Credentials,

    /// Per-request timeout
    pub timeout: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let user = self
            .credentials
            .normalize()
            .map_or_else(|| "none".to_string(), |auth| auth.username().to_string());

        write!(
            f,
            "Config {{ verb: {}, base_url: {}, path: {}, timeout: {}s, headers: {}, user: {} }}",
            self.verb,
            self.base_url,
            self.path,
            self.timeout.as_secs(),
            self.headers.len(),
            user,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`method`, `path`, `base_url`)
    /// - URL is invalid
    /// - `--data` is not valid JSON
    /// - Timeout is zero
    /// - Header format is invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let verb = cli.verb.ok_or_else(|| {
            ConfigError::missing(field::METHOD, "Pass one of head, get, put, post, delete")
        })?;

        let path = cli.path.clone().ok_or_else(|| {
            ConfigError::missing(field::PATH, "Pass the request path after the method")
        })?;

        let base_url = Self::resolve_base_url(cli, toml)?;
        let data = Self::resolve_data(cli)?;
        let headers = Self::resolve_headers(cli, toml)?;
        let credentials = Self::resolve_credentials(cli, toml);
        let timeout = Self::resolve_timeout(cli, toml)?;

        Ok(Self {
            verb,
            path,
            base_url,
            data,
            headers,
            credentials,
            timeout,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.base_url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::BASE_URL,
                    "Use --base-url or set client.base_url in config file",
                )
            })?;

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: "cannot be used as a base URL".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_data(cli: &Cli) -> Result<Option<Value>, ConfigError> {
        cli.data
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|source| ConfigError::InvalidData { source })
    }

    fn resolve_headers(cli: &Cli, toml: Option<&TomlConfig>) -> Result<HeaderMap, ConfigError> {
        let from_file = toml
            .into_iter()
            .flat_map(|t| &t.client.headers)
            .map(|(name, value)| (name.as_str(), value.as_str()));
        let from_cli = cli
            .headers
            .iter()
            .map(|raw| {
                split_header(raw)
                    .ok_or_else(|| ConfigError::header(raw, HeaderError::MissingSeparator))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // File entries first: `insert` lets a CLI header replace one of the same name
        let mut headers = HeaderMap::new();
        for (name, value) in from_file.chain(from_cli) {
            let (name, value) = to_header(name, value)?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Each key is resolved on its own; an absent key stays out of the raw
    /// mapping and is normalized to an empty string later.
    fn resolve_credentials(cli: &Cli, toml: Option<&TomlConfig>) -> Credentials {
        let auth = toml.map(|t| &t.auth);

        let username = cli
            .user
            .clone()
            .or_else(|| auth.and_then(|a| a.username.clone()));
        let password = cli
            .password
            .clone()
            .or_else(|| auth.and_then(|a| a.password.clone()));

        if username.is_none() && password.is_none() {
            return Credentials::None;
        }

        let mut map = HashMap::new();
        if let Some(username) = username {
            map.insert(USERNAME_KEY.to_string(), username);
        }
        if let Some(password) = password {
            map.insert(PASSWORD_KEY.to_string(), password);
        }
        Credentials::Raw(map)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.client.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::ZeroDuration { field: "timeout" });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the commented configuration template to `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Write`] if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, super::toml::default_config_template()).map_err(|source| {
        ConfigError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Splits `Key=Value` or `Key: Value`, trimming both halves. `=` is tried first.
fn split_header(raw: &str) -> Option<(&str, &str)> {
    raw.split_once('=')
        .or_else(|| raw.split_once(':'))
        .map(|(name, value)| (name.trim(), value.trim()))
}

fn to_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ConfigError> {
    let header_name = HeaderName::try_from(name).map_err(|e| ConfigError::header(name, e))?;
    let header_value = HeaderValue::try_from(value).map_err(|e| ConfigError::header(name, e))?;
    Ok((header_name, header_value))
}
