//! Solver bonding and payouts.
//!
//! The registry contract gates participation (a solver must hold an active
//! bond before filling) and pays out fills once the challenge window has
//! passed. This crate wraps both sides: the [`RegistrationGate`] run once at
//! startup, and the [`PayoutScheduler`] that claims each fill after a delay.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use solver_delivery::DeliveryError;
use solver_types::{IntentId, SolverStatus, Transaction};
use thiserror::Error;

pub mod implementations {
	pub mod registry;
}

pub mod payout;
pub mod registration;

pub use payout::{PayoutScheduler, ScheduledPayout};
pub use registration::{Registration, RegistrationGate};

#[derive(Debug, Error)]
pub enum SettlementError {
	#[error("Contract error: {0}")]
	Contract(String),
	#[error("Delivery failed: {0}")]
	Delivery(#[from] DeliveryError),
}

/// Registry contract surface used by the solver.
#[async_trait]
pub trait SettlementInterface: Send + Sync {
	/// Bonding record for `solver`.
	async fn solver_status(&self, solver: Address) -> Result<SolverStatus, SettlementError>;

	/// Minimum bond the registry accepts.
	async fn min_bond(&self) -> Result<U256, SettlementError>;

	/// Registration call carrying `bond` as value.
	fn register_transaction(&self, bond: U256) -> Transaction;

	/// Payout claim for a filled intent.
	fn claim_transaction(&self, intent_id: IntentId) -> Transaction;
}

/// Registration gate and payout scheduler over one registry.
pub struct SettlementService {
	gate: RegistrationGate,
	payouts: PayoutScheduler,
}

impl SettlementService {
	pub fn new(gate: RegistrationGate, payouts: PayoutScheduler) -> Self {
		Self { gate, payouts }
	}

	pub async fn ensure_registered(&self, solver: Address) -> Result<Registration, SettlementError> {
		self.gate.ensure_registered(solver).await
	}

	pub fn schedule_payout(&self, intent_id: IntentId, now: u64) -> ScheduledPayout {
		self.payouts.schedule(intent_id, now)
	}
}
