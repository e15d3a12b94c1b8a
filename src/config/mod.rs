//! Configuration layer for the `omi-http` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`], [`Verb`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The verb and path are positional and CLI-only. `base_url` has no default
//! and must come from one of the two sources.
//!
//! Headers are merged: TOML headers are applied first and a CLI `--header`
//! with the same name replaces the TOML value.
//!
//! `username` and `password` are resolved independently, so a CLI `--user`
//! can be paired with a password kept in the config file.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command, Verb};
pub use error::{ConfigError, HeaderError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
