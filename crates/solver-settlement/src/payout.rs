//! Deferred payout claims.
//!
//! Each confirmed fill gets one claim attempt once the registry's challenge
//! window has passed. The claim runs on its own task; its outcome is published
//! on the event bus and returned through the task's [`JoinHandle`]. A failed
//! claim is not retried.

use crate::{SettlementError, SettlementInterface};
use solver_delivery::DeliveryService;
use solver_types::{
	truncate_id, EventBus, IntentId, SettlementEvent, SolverEvent, TransactionReceipt,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A claim waiting on its timer.
#[derive(Debug)]
pub struct ScheduledPayout {
	pub intent_id: IntentId,
	/// Unix time at which the claim is sent.
	pub claim_at: u64,
	pub handle: JoinHandle<Result<TransactionReceipt, SettlementError>>,
}

pub struct PayoutScheduler {
	settlement: Arc<dyn SettlementInterface>,
	delivery: Arc<DeliveryService>,
	delay: Duration,
	event_bus: EventBus,
}

impl PayoutScheduler {
	pub fn new(
		settlement: Arc<dyn SettlementInterface>,
		delivery: Arc<DeliveryService>,
		delay: Duration,
		event_bus: EventBus,
	) -> Self {
		Self {
			settlement,
			delivery,
			delay,
			event_bus,
		}
	}

	/// Spawns a task that claims the payout for `intent_id` after the delay.
	///
	/// `now` is the unix time of the fill and only determines the reported
	/// `claim_at`; the timer itself runs on the tokio clock.
	pub fn schedule(&self, intent_id: IntentId, now: u64) -> ScheduledPayout {
		let claim_at = now + self.delay.as_secs();
		tracing::info!(
			intent_id = %truncate_id(&intent_id.to_string()),
			claim_at,
			"Payout claim scheduled"
		);
		self.event_bus
			.publish(SolverEvent::Settlement(SettlementEvent::PayoutScheduled {
				intent_id,
				claim_at,
			}));

		let settlement = self.settlement.clone();
		let delivery = self.delivery.clone();
		let event_bus = self.event_bus.clone();
		let delay = self.delay;

		let handle = tokio::spawn(async move {
			tokio::time::sleep(delay).await;

			let result = delivery
				.deliver_and_confirm(settlement.claim_transaction(intent_id))
				.await
				.map_err(SettlementError::from);

			let event = match &result {
				Ok(receipt) => {
					tracing::info!(
						intent_id = %truncate_id(&intent_id.to_string()),
						block = receipt.block_number,
						"Payout claimed"
					);
					SettlementEvent::PayoutClaimed {
						intent_id,
						receipt: *receipt,
					}
				}
				Err(e) => {
					tracing::error!(
						intent_id = %truncate_id(&intent_id.to_string()),
						"Payout claim failed: {}",
						e
					);
					SettlementEvent::PayoutFailed {
						intent_id,
						error: e.to_string(),
					}
				}
			};
			event_bus.publish(SolverEvent::Settlement(event));

			result
		});

		ScheduledPayout {
			intent_id,
			claim_at,
			handle,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mocks::{registry_address, MockDelivery, MockRegistry};
	use alloy::primitives::B256;

	const WINDOW: Duration = Duration::from_secs(1860);

	fn scheduler(delivery: MockDelivery, event_bus: EventBus) -> PayoutScheduler {
		PayoutScheduler::new(
			Arc::new(MockRegistry::with_active(true)),
			Arc::new(DeliveryService::new(Box::new(delivery))),
			WINDOW,
			event_bus,
		)
	}

	#[tokio::test(start_paused = true)]
	async fn test_claim_waits_for_window() {
		let delivery = MockDelivery::default();
		let id = B256::repeat_byte(3);
		let payout = scheduler(delivery.clone(), EventBus::default()).schedule(id, 1_000);

		assert_eq!(payout.claim_at, 2_860);

		tokio::time::sleep(WINDOW - Duration::from_secs(1)).await;
		assert!(delivery.submitted.lock().unwrap().is_empty());

		let receipt = payout.handle.await.unwrap().unwrap();
		assert_eq!(receipt.block_number, 7);

		let submitted = delivery.submitted.lock().unwrap();
		assert_eq!(submitted.len(), 1);
		assert_eq!(submitted[0].to, registry_address());
		assert_eq!(submitted[0].data.as_ref(), id.as_slice());
	}

	#[tokio::test(start_paused = true)]
	async fn test_failed_claim_is_reported_once() {
		let delivery = MockDelivery {
			fail: true,
			..Default::default()
		};
		let bus = EventBus::default();
		let mut events = bus.subscribe();
		let id = B256::repeat_byte(4);

		let payout = scheduler(delivery, bus).schedule(id, 0);
		assert!(matches!(
			payout.handle.await.unwrap(),
			Err(SettlementError::Delivery(_))
		));

		assert!(matches!(
			events.recv().await.unwrap(),
			SolverEvent::Settlement(SettlementEvent::PayoutScheduled { claim_at: 1860, .. })
		));
		assert!(matches!(
			events.recv().await.unwrap(),
			SolverEvent::Settlement(SettlementEvent::PayoutFailed { intent_id, .. }) if intent_id == id
		));
		assert!(events.try_recv().is_err());
	}
}
