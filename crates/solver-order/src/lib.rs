//! Order processing module for the intent solver.
//!
//! This module reads intent records from the ledger, decides whether an
//! intent may be filled right now, and produces the settlement transaction
//! that fills it. It also owns the [`FillTracker`], the per-process record of
//! which intents have already been attempted.

use async_trait::async_trait;
use solver_types::{Intent, IntentId, IntentStatus, SkipReason, Transaction};
use thiserror::Error;

pub mod implementations {
	pub mod intent_box;
}

pub mod tracker;

pub use tracker::{FillState, FillTracker};

/// Errors that can occur during order processing operations.
#[derive(Debug, Error)]
pub enum OrderError {
	/// A ledger read failed.
	#[error("Contract error: {0}")]
	Contract(String),
}

/// Trait defining the interface to the intent ledger and settlement contract.
#[async_trait]
pub trait OrderInterface: Send + Sync {
	/// Reads the full intent record for `id` from the ledger.
	async fn fetch_intent(&self, id: IntentId) -> Result<Intent, OrderError>;

	/// Generates the transaction that settles `intent`.
	async fn generate_fill_transaction(&self, intent: &Intent) -> Result<Transaction, OrderError>;
}

/// Checks whether `intent` may be filled at unix time `now`.
///
/// Status is checked before the deadline, so a closed intent is reported as
/// not open even when it has also expired.
pub fn check_fillable(intent: &Intent, now: u64) -> Result<(), SkipReason> {
	if intent.status != IntentStatus::Open {
		return Err(SkipReason::NotOpen(intent.status));
	}
	if now > intent.deadline {
		return Err(SkipReason::Expired {
			deadline: intent.deadline,
			now,
		});
	}
	Ok(())
}

pub struct OrderService {
	implementation: Box<dyn OrderInterface>,
}

impl OrderService {
	pub fn new(implementation: Box<dyn OrderInterface>) -> Self {
		Self { implementation }
	}

	pub async fn fetch_intent(&self, id: IntentId) -> Result<Intent, OrderError> {
		self.implementation.fetch_intent(id).await
	}

	pub fn validate(&self, intent: &Intent, now: u64) -> Result<(), SkipReason> {
		check_fillable(intent, now)
	}

	pub async fn generate_fill_transaction(
		&self,
		intent: &Intent,
	) -> Result<Transaction, OrderError> {
		self.implementation.generate_fill_transaction(intent).await
	}
}
