//! Solver events and the in-process event bus.
//!
//! Components publish what they did as [`SolverEvent`]s; the engine and tests
//! subscribe to observe fills, skips and payout outcomes without reaching into
//! component state.

use alloy::primitives::U256;
use tokio::sync::broadcast;

use crate::{IntentId, SkipReason, TransactionReceipt};

#[derive(Debug, Clone)]
pub enum SolverEvent {
	Discovery(DiscoveryEvent),
	Order(OrderEvent),
	Settlement(SettlementEvent),
}

#[derive(Debug, Clone)]
pub enum DiscoveryEvent {
	IntentDiscovered {
		intent_id: IntentId,
		block_number: u64,
	},
	RangeScanned {
		from_block: u64,
		to_block: u64,
	},
	ScanFailed {
		cursor: u64,
		error: String,
	},
}

#[derive(Debug, Clone)]
pub enum OrderEvent {
	Skipped {
		intent_id: IntentId,
		reason: SkipReason,
	},
	Filled {
		intent_id: IntentId,
		receipt: TransactionReceipt,
	},
	FillFailed {
		intent_id: IntentId,
		error: String,
	},
}

#[derive(Debug, Clone)]
pub enum SettlementEvent {
	Registered {
		bond: U256,
		receipt: TransactionReceipt,
	},
	PayoutScheduled {
		intent_id: IntentId,
		claim_at: u64,
	},
	PayoutClaimed {
		intent_id: IntentId,
		receipt: TransactionReceipt,
	},
	PayoutFailed {
		intent_id: IntentId,
		error: String,
	},
}

/// Event bus for broadcasting solver events to multiple subscribers.
///
/// Cloning an EventBus creates a new handle to the same underlying
/// broadcast channel.
#[derive(Clone)]
pub struct EventBus {
	sender: broadcast::Sender<SolverEvent>,
}

impl EventBus {
	/// Creates a new EventBus with the specified channel capacity.
	///
	/// Subscribers that fall more than `capacity` events behind lose the oldest ones.
	pub fn new(capacity: usize) -> Self {
		let (sender, _) = broadcast::channel(capacity);
		Self { sender }
	}

	pub fn subscribe(&self) -> broadcast::Receiver<SolverEvent> {
		self.sender.subscribe()
	}

	/// Publishes an event to all current subscribers.
	///
	/// Having no subscribers is not an error for the publisher.
	pub fn publish(&self, event: SolverEvent) {
		let _ = self.sender.send(event);
	}
}

impl Default for EventBus {
	fn default() -> Self {
		Self::new(1000)
	}
}
