//! Intent types for the solver system.
//!
//! This module defines the intent record owned by the ledger contract, the
//! lightweight view produced by event discovery, and the handler seam through
//! which discovery hands intents to the fill pipeline.

use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::ChainId;

/// 32-byte identifier assigned to an intent by the ledger contract.
pub type IntentId = B256;

/// Lifecycle status of an intent as stored on the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentStatus {
	Open,
	Filled,
	Expired,
	Cancelled,
	/// A code this solver does not know; never fillable.
	Unknown(u8),
}

impl IntentStatus {
	/// Converts the contract's `uint8` status code.
	pub fn from_code(code: u8) -> Self {
		match code {
			0 => Self::Open,
			1 => Self::Filled,
			2 => Self::Expired,
			3 => Self::Cancelled,
			other => Self::Unknown(other),
		}
	}

	pub fn code(&self) -> u8 {
		match self {
			Self::Open => 0,
			Self::Filled => 1,
			Self::Expired => 2,
			Self::Cancelled => 3,
			Self::Unknown(code) => *code,
		}
	}
}

impl fmt::Display for IntentStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Open => write!(f, "open"),
			Self::Filled => write!(f, "filled"),
			Self::Expired => write!(f, "expired"),
			Self::Cancelled => write!(f, "cancelled"),
			Self::Unknown(code) => write!(f, "unknown({})", code),
		}
	}
}

/// Full intent record as returned by the ledger's `getIntent`.
///
/// The solver only ever reads intents; the ledger contract owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
	/// Identifier the intent was submitted under.
	pub id: IntentId,
	/// Account that posted the intent.
	pub user: Address,
	/// Chain the assets leave from.
	pub from_chain_id: ChainId,
	/// Chain the assets should arrive on.
	pub to_chain_id: ChainId,
	/// Asset deposited by the user (zero address = native token).
	pub asset_in: Address,
	/// Asset the user wants to receive (zero address = native token).
	pub asset_out: Address,
	/// Amount deposited, in 18-decimal units.
	pub amount_in: U256,
	/// Minimum amount the user accepts on the destination.
	pub min_amount_out: U256,
	/// Upper bound on the fee the user pays the solver.
	pub max_fee: U256,
	/// Unix timestamp after which the intent can no longer be filled.
	pub deadline: u64,
	/// Current ledger status.
	pub status: IntentStatus,
}

impl Intent {
	/// An intent is fillable only while open and not past its deadline.
	pub fn is_fillable_at(&self, now: u64) -> bool {
		self.status == IntentStatus::Open && now <= self.deadline
	}
}

/// Intent reference decoded from an `IntentSubmitted` log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredIntent {
	pub id: IntentId,
	pub user: Address,
	pub amount_in: U256,
	/// Block the submission event was emitted in.
	pub block_number: u64,
}

/// Error returned by an [`IntentHandler`] when a discovered intent could not
/// be processed and the enclosing block range must be retried.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HandlerError(pub String);

/// Receiver for intents found by discovery.
///
/// Discovery calls the handler for each intent, in log order, before it
/// advances past the scanned range.
#[async_trait]
pub trait IntentHandler: Send + Sync {
	async fn handle_intent(&self, intent: &DiscoveredIntent) -> Result<(), HandlerError>;
}
