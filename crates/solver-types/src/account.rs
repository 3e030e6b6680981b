//! Account-related types for the solver system.
//!
//! This module defines the transaction shape handed from the contract clients
//! to delivery, and the bonding record the registry keeps for each solver.

use alloy::primitives::{Address, Bytes, TxKind, U256};
use alloy::rpc::types::{TransactionInput, TransactionRequest};

/// Contract call ready to be signed and submitted.
///
/// Built by the ledger, settlement and registry clients from ABI-encoded
/// calldata. Nonce and gas are left to the delivery provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
	/// Contract being called.
	pub to: Address,
	/// ABI-encoded calldata.
	pub data: Bytes,
	/// Native value attached to the call (the bond for registration).
	pub value: U256,
	/// Chain ID for replay protection.
	pub chain_id: u64,
}

impl Transaction {
	/// Creates a call with no native value attached.
	pub fn call(to: Address, data: impl Into<Bytes>, chain_id: u64) -> Self {
		Self {
			to,
			data: data.into(),
			value: U256::ZERO,
			chain_id,
		}
	}

	/// Attaches native value to the call.
	pub fn with_value(mut self, value: U256) -> Self {
		self.value = value;
		self
	}
}

/// Conversion from our Transaction type to Alloy's TransactionRequest.
impl From<Transaction> for TransactionRequest {
	fn from(tx: Transaction) -> Self {
		TransactionRequest {
			chain_id: Some(tx.chain_id),
			to: Some(TxKind::Call(tx.to)),
			value: Some(tx.value),
			input: TransactionInput::new(tx.data),
			..Default::default()
		}
	}
}

/// Bonding record of a solver as stored by the registry contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatus {
	/// Stake currently locked by the solver.
	pub bond_amount: U256,
	/// Number of intents the solver has filled.
	pub filled_count: U256,
	/// Number of times the solver has been slashed.
	pub slash_count: U256,
	/// Whether the solver may fill intents.
	pub active: bool,
}
