//! Intent discovery for the solver.
//!
//! Discovery turns `IntentSubmitted` logs into calls on an [`IntentHandler`].
//! Block ranges are scanned from a caller-held cursor: a range is only left
//! behind once every intent in it has been handled, so a failed fetch or a
//! failed handler causes the same range to be scanned again next cycle.

use async_trait::async_trait;
use solver_types::{
	truncate_id, DiscoveredIntent, DiscoveryEvent, EventBus, HandlerError, IntentHandler,
	SolverEvent,
};
use thiserror::Error;

pub mod implementations {
	pub mod onchain {
		pub mod intent_box;
	}
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("Failed to decode log: {0}")]
	Decode(String),
	#[error("Intent handler failed: {0}")]
	Handler(#[from] HandlerError),
}

/// Read access to the intent ledger's event stream.
#[async_trait]
pub trait DiscoveryInterface: Send + Sync {
	/// Current chain head.
	async fn block_number(&self) -> Result<u64, DiscoveryError>;

	/// Intents submitted in `[from_block, to_block]`, in log order.
	async fn intents_in_range(
		&self,
		from_block: u64,
		to_block: u64,
	) -> Result<Vec<DiscoveredIntent>, DiscoveryError>;
}

pub struct DiscoveryService {
	provider: Box<dyn DiscoveryInterface>,
	lookback_blocks: u64,
	event_bus: EventBus,
}

impl DiscoveryService {
	pub fn new(provider: Box<dyn DiscoveryInterface>, lookback_blocks: u64, event_bus: EventBus) -> Self {
		Self {
			provider,
			lookback_blocks,
			event_bus,
		}
	}

	/// Initial cursor: the head minus the lookback window, floored at zero.
	///
	/// Intents submitted before the window are never seen by this process.
	pub async fn seed_cursor(&self) -> Result<u64, DiscoveryError> {
		let head = self.provider.block_number().await?;
		let cursor = head.saturating_sub(self.lookback_blocks);
		tracing::info!(head, cursor, "Seeded discovery cursor");
		Ok(cursor)
	}

	/// Scans `[cursor, head]` and returns the next cursor.
	///
	/// Returns `head + 1` when every intent in the range was handled, and
	/// `cursor` unchanged when the node is behind or anything failed.
	pub async fn scan(&self, cursor: u64, handler: &dyn IntentHandler) -> u64 {
		match self.try_scan(cursor, handler).await {
			Ok(next) => next,
			Err(e) => {
				tracing::warn!(cursor, "Scan failed, range will be retried: {}", e);
				self.event_bus
					.publish(SolverEvent::Discovery(DiscoveryEvent::ScanFailed {
						cursor,
						error: e.to_string(),
					}));
				cursor
			}
		}
	}

	async fn try_scan(&self, cursor: u64, handler: &dyn IntentHandler) -> Result<u64, DiscoveryError> {
		let head = self.provider.block_number().await?;
		if head < cursor {
			tracing::debug!(head, cursor, "Node is behind the cursor");
			return Ok(cursor);
		}

		let intents = self.provider.intents_in_range(cursor, head).await?;

		for intent in &intents {
			tracing::info!(
				intent_id = %truncate_id(&intent.id.to_string()),
				block = intent.block_number,
				"Discovered intent"
			);
			self.event_bus
				.publish(SolverEvent::Discovery(DiscoveryEvent::IntentDiscovered {
					intent_id: intent.id,
					block_number: intent.block_number,
				}));

			handler.handle_intent(intent).await?;
		}

		self.event_bus
			.publish(SolverEvent::Discovery(DiscoveryEvent::RangeScanned {
				from_block: cursor,
				to_block: head,
			}));

		Ok(head + 1)
	}
}
