//! Transaction delivery types for the solver system.
//!
//! This module defines the types returned once a transaction has been
//! submitted and mined.

use alloy::primitives::B256;

/// Hash of a submitted transaction.
pub type TransactionHash = B256;

/// Transaction receipt containing execution details.
///
/// Provides information about a transaction after it has been included in a block,
/// including its success status and block number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionReceipt {
	/// The hash of the transaction.
	pub hash: TransactionHash,
	/// The block number where the transaction was included.
	pub block_number: u64,
	/// Whether the transaction executed successfully.
	pub success: bool,
}
