//! Solver configuration.
//!
//! Configuration is a single TOML file. `${VAR}` placeholders are replaced
//! from the environment before parsing, so secrets such as the private key
//! never need to be written to disk.

use thiserror::Error;

mod loader;
mod serde_helpers;
mod types;

pub use loader::{parse_config, ConfigLoader};
pub use types::*;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),
}
