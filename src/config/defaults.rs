//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use crate::client::DEFAULT_TIMEOUT;

/// Default per-request timeout in seconds, matching [`DEFAULT_TIMEOUT`].
pub const TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT.as_secs();

/// Default output path for `omi-http init`.
pub const CONFIG_FILE: &str = "omi-http.toml";
