//! Local private-key account.
//!
//! Suitable for testnets and development, where the key is supplied through
//! configuration (usually via `${PRIVATE_KEY}` substitution).

use crate::{AccountError, AccountInterface};
use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use solver_types::{hex_private_key, ConfigSchema, Field, Schema, ValidationError};

/// Account backed by an in-memory private key.
pub struct LocalWallet {
	signer: PrivateKeySigner,
}

impl LocalWallet {
	/// Parses a hex private key, with or without `0x` prefix.
	pub fn new(private_key_hex: &str) -> Result<Self, AccountError> {
		let signer = private_key_hex
			.parse::<PrivateKeySigner>()
			.map_err(|e| AccountError::InvalidKey(format!("Invalid private key: {}", e)))?;

		Ok(Self { signer })
	}
}

/// Configuration schema for LocalWallet.
pub struct LocalWalletSchema;

impl ConfigSchema for LocalWalletSchema {
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		Schema::new(vec![
			Field::new("private_key").with_validator(hex_private_key)
		])
		.validate(config)
	}
}

#[async_trait]
impl AccountInterface for LocalWallet {
	async fn address(&self) -> Result<Address, AccountError> {
		Ok(self.signer.address())
	}

	fn wallet(&self) -> EthereumWallet {
		EthereumWallet::from(self.signer.clone())
	}
}

/// Creates a [`LocalWallet`] from an `[account.config]` table.
pub fn create_account(config: &toml::Value) -> Result<Box<dyn AccountInterface>, AccountError> {
	LocalWalletSchema.validate(config)?;

	let private_key = config
		.get("private_key")
		.and_then(|v| v.as_str())
		.ok_or_else(|| AccountError::InvalidKey("private_key is required".to_string()))?;

	Ok(Box::new(LocalWallet::new(private_key)?))
}

#[cfg(test)]
mod tests {
	use super::*;

	// First well-known development key.
	const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

	#[tokio::test]
	async fn test_address_from_key() {
		let config: toml::Value = toml::from_str(&format!("private_key = \"{}\"", DEV_KEY)).unwrap();
		let account = create_account(&config).unwrap();
		let expected: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap();
		assert_eq!(account.address().await.unwrap(), expected);
	}

	#[test]
	fn test_rejects_malformed_key() {
		let config: toml::Value = toml::from_str("private_key = \"0x1234\"").unwrap();
		assert!(matches!(
			create_account(&config),
			Err(AccountError::InvalidConfig(ValidationError::InvalidValue { .. }))
		));

		let config: toml::Value = toml::from_str("other = 1").unwrap();
		assert!(matches!(
			create_account(&config),
			Err(AccountError::InvalidConfig(ValidationError::MissingField(_)))
		));
	}
}
