//! Configuration validation utilities.
//!
//! Implementation-specific configuration sections (for example the account
//! provider's `[account.config]` table) are kept as raw TOML and checked
//! against a [`Schema`] published by the implementation before use.

use thiserror::Error;

/// Errors that can occur during configuration validation.
#[derive(Debug, Error)]
pub enum ValidationError {
	#[error("Missing required field: {0}")]
	MissingField(String),
	#[error("Invalid value for field '{field}': {message}")]
	InvalidValue { field: String, message: String },
	#[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
	TypeMismatch {
		field: String,
		expected: &'static str,
		actual: String,
	},
}

/// Type alias for field validator functions.
pub type FieldValidator = fn(&toml::Value) -> Result<(), String>;

/// A required string field with an optional value check.
#[derive(Debug)]
pub struct Field {
	pub name: &'static str,
	pub validator: Option<FieldValidator>,
}

impl Field {
	pub fn new(name: &'static str) -> Self {
		Self {
			name,
			validator: None,
		}
	}

	pub fn with_validator(mut self, validator: FieldValidator) -> Self {
		self.validator = Some(validator);
		self
	}

	fn check(&self, value: &toml::Value) -> Result<(), ValidationError> {
		if !value.is_str() {
			return Err(ValidationError::TypeMismatch {
				field: self.name.to_string(),
				expected: "string",
				actual: value.type_str().to_string(),
			});
		}
		if let Some(validator) = self.validator {
			validator(value).map_err(|message| ValidationError::InvalidValue {
				field: self.name.to_string(),
				message,
			})?;
		}
		Ok(())
	}
}

/// Set of fields a configuration table must carry.
#[derive(Debug, Default)]
pub struct Schema {
	pub required: Vec<Field>,
}

impl Schema {
	pub fn new(required: Vec<Field>) -> Self {
		Self { required }
	}

	/// Validates a TOML table against this schema.
	pub fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		let table = config
			.as_table()
			.ok_or_else(|| ValidationError::TypeMismatch {
				field: "root".to_string(),
				expected: "table",
				actual: config.type_str().to_string(),
			})?;

		for field in &self.required {
			let value = table
				.get(field.name)
				.ok_or_else(|| ValidationError::MissingField(field.name.to_string()))?;
			field.check(value)?;
		}

		Ok(())
	}
}

/// Trait implemented by anything that publishes a configuration schema.
pub trait ConfigSchema: Send + Sync {
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError>;
}

/// Accepts `http://` and `https://` URLs.
pub fn http_url(value: &toml::Value) -> Result<(), String> {
	let url = value.as_str().unwrap_or_default();
	if url.starts_with("http://") || url.starts_with("https://") {
		Ok(())
	} else {
		Err("RPC URL must start with http:// or https://".to_string())
	}
}

/// Accepts a 32-byte hex private key with or without `0x` prefix.
pub fn hex_private_key(value: &toml::Value) -> Result<(), String> {
	let key = value.as_str().unwrap_or_default();
	let key = key.strip_prefix("0x").unwrap_or(key);
	if key.len() != 64 {
		return Err("Private key must be 64 hex characters (32 bytes)".to_string());
	}
	if !key.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err("Private key must be valid hexadecimal".to_string());
	}
	Ok(())
}
