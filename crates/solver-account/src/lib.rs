//! Solver account management.
//!
//! The account supplies the solver's identity: the address the registry bonds
//! and the wallet delivery signs with. Keys never leave this crate; delivery
//! receives an [`EthereumWallet`] and signs through it.

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use async_trait::async_trait;
use solver_types::ValidationError;
use thiserror::Error;

pub mod implementations {
	pub mod local;
}

#[derive(Debug, Error)]
pub enum AccountError {
	#[error("Invalid key: {0}")]
	InvalidKey(String),
	#[error("Unknown account provider: {0}")]
	UnknownProvider(String),
	#[error("Invalid configuration: {0}")]
	InvalidConfig(#[from] ValidationError),
}

#[async_trait]
pub trait AccountInterface: Send + Sync {
	async fn address(&self) -> Result<Address, AccountError>;

	/// Wallet handed to delivery for transaction signing.
	fn wallet(&self) -> EthereumWallet;
}

pub struct AccountService {
	provider: Box<dyn AccountInterface>,
}

impl AccountService {
	pub fn new(provider: Box<dyn AccountInterface>) -> Self {
		Self { provider }
	}

	pub async fn get_address(&self) -> Result<Address, AccountError> {
		self.provider.address().await
	}

	pub fn wallet(&self) -> EthereumWallet {
		self.provider.wallet()
	}
}

/// Builds the account provider named by `provider` from its config table.
pub fn create_account(
	provider: &str,
	config: &toml::Value,
) -> Result<Box<dyn AccountInterface>, AccountError> {
	match provider {
		"local" => implementations::local::create_account(config),
		other => Err(AccountError::UnknownProvider(other.to_string())),
	}
}
