//! Per-intent fill pipeline.
//!
//! Each discovered intent is marked in the [`FillTracker`] before anything
//! else happens, so a second discovery of the same id is skipped while the
//! first is in flight or after it has finished. The mark is dropped again only
//! when settlement fails, which lets a later scan retry it. An intent whose
//! ledger record cannot be read stays marked, so it never holds the discovery
//! cursor back.

use alloy::primitives::utils::format_ether;
use async_trait::async_trait;
use solver_delivery::DeliveryService;
use solver_order::{FillState, FillTracker, OrderService};
use solver_routing::{format_route, RouteResolver};
use solver_settlement::{ScheduledPayout, SettlementService};
use solver_types::{
	current_timestamp, truncate_id, DiscoveredIntent, EventBus, FillOutcome, HandlerError, Intent,
	IntentHandler, IntentId, OrderEvent, SkipReason, SolverEvent,
};
use solver_xcm::{address_to_account_id, build_cross_chain_transfer, build_simple_transfer};
use std::sync::{Arc, Mutex};

pub struct FillPipeline {
	order: OrderService,
	tracker: FillTracker,
	routes: RouteResolver,
	delivery: Arc<DeliveryService>,
	settlement: Arc<SettlementService>,
	event_bus: EventBus,
	payouts: Mutex<Vec<ScheduledPayout>>,
	clock: fn() -> u64,
}

impl FillPipeline {
	pub fn new(
		order: OrderService,
		routes: RouteResolver,
		delivery: Arc<DeliveryService>,
		settlement: Arc<SettlementService>,
		event_bus: EventBus,
	) -> Self {
		Self {
			order,
			tracker: FillTracker::new(),
			routes,
			delivery,
			settlement,
			event_bus,
			payouts: Mutex::new(Vec::new()),
			clock: current_timestamp,
		}
	}

	/// Replaces the unix-time source used for deadline checks and claim times.
	pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
		self.clock = clock;
		self
	}

	pub fn tracker(&self) -> &FillTracker {
		&self.tracker
	}

	/// Runs one intent through the fill state machine.
	pub async fn process(&self, discovered: &DiscoveredIntent) -> FillOutcome {
		let id = discovered.id;
		let short_id = truncate_id(&id.to_string());

		if !self.tracker.try_begin(id) {
			tracing::debug!(intent_id = %short_id, "Already processed");
			return self.skip(id, SkipReason::Duplicate);
		}

		tracing::info!(intent_id = %short_id, "Attempting to fill intent");

		let intent = match self.order.fetch_intent(id).await {
			Ok(intent) => intent,
			Err(e) => {
				self.tracker.finish(id, FillState::Unreadable);
				tracing::warn!(intent_id = %short_id, "Failed to read intent: {}", e);
				return self.skip(id, SkipReason::Unreadable(e.to_string()));
			}
		};

		if let Err(reason) = self.order.validate(&intent, (self.clock)()) {
			self.tracker.finish(id, FillState::Closed);
			tracing::info!(intent_id = %short_id, "Skipping: {}", reason);
			return self.skip(id, reason);
		}

		self.describe(&intent).await;

		match self.settle(&intent).await {
			Ok(receipt) => {
				self.tracker.finish(id, FillState::Filled);
				tracing::info!(
					intent_id = %short_id,
					block = receipt.block_number,
					"Filled"
				);
				self.event_bus
					.publish(SolverEvent::Order(OrderEvent::Filled {
						intent_id: id,
						receipt,
					}));

				let payout = self.settlement.schedule_payout(id, (self.clock)());
				let claim_at = payout.claim_at;
				self.track_payout(payout);

				FillOutcome::Filled {
					intent_id: id,
					receipt,
					claim_at,
				}
			}
			Err(error) => {
				self.tracker.release(&id);
				tracing::error!(intent_id = %short_id, "Failed to fill: {}", error);
				self.event_bus
					.publish(SolverEvent::Order(OrderEvent::FillFailed {
						intent_id: id,
						error: error.clone(),
					}));
				FillOutcome::Skipped(SkipReason::Failed(error))
			}
		}
	}

	/// Logs the intent, its route and the cross-chain payload it maps to.
	async fn describe(&self, intent: &Intent) {
		tracing::info!(
			user = %intent.user,
			amount = %format_ether(intent.amount_in),
			max_fee = %format_ether(intent.max_fee),
			"Intent details"
		);

		let route = self
			.routes
			.resolve(intent.from_chain_id, intent.to_chain_id)
			.await;
		tracing::info!(
			route = %format_route(&route.path),
			cost = route.cost,
			source = %route.source,
			"Resolved route"
		);

		let payload = xcm_payload(intent);
		tracing::debug!(
			bytes = payload.len().saturating_sub(2) / 2,
			"Built XCM payload {}",
			truncate_id(&payload)
		);
	}

	async fn settle(&self, intent: &Intent) -> Result<solver_types::TransactionReceipt, String> {
		let tx = self
			.order
			.generate_fill_transaction(intent)
			.await
			.map_err(|e| e.to_string())?;

		self.delivery
			.deliver_and_confirm(tx)
			.await
			.map_err(|e| e.to_string())
	}

	fn skip(&self, intent_id: IntentId, reason: SkipReason) -> FillOutcome {
		self.event_bus
			.publish(SolverEvent::Order(OrderEvent::Skipped {
				intent_id,
				reason: reason.clone(),
			}));
		FillOutcome::Skipped(reason)
	}

	fn track_payout(&self, payout: ScheduledPayout) {
		match self.payouts.lock() {
			Ok(mut payouts) => payouts.push(payout),
			Err(_) => tracing::warn!(
				intent_id = %truncate_id(&payout.intent_id.to_string()),
				claim_at = payout.claim_at,
				"Payout list poisoned, claim runs untracked"
			),
		}
	}

	/// Drops handles of payout claims that have already run.
	pub fn prune_payouts(&self) -> usize {
		match self.payouts.lock() {
			Ok(mut payouts) => {
				payouts.retain(|payout| !payout.handle.is_finished());
				payouts.len()
			}
			Err(_) => 0,
		}
	}

	/// Takes every scheduled payout handle out of the pipeline.
	pub fn take_payouts(&self) -> Vec<ScheduledPayout> {
		self.payouts
			.lock()
			.map(|mut payouts| std::mem::take(&mut *payouts))
			.unwrap_or_default()
	}
}

/// Transfer program for the intent's user: a local deposit when source and
/// destination are the same chain, otherwise a reserve transfer to the
/// destination parachain.
fn xcm_payload(intent: &Intent) -> String {
	let beneficiary = address_to_account_id(intent.user);
	if intent.from_chain_id == intent.to_chain_id {
		build_simple_transfer(intent.amount_in, &beneficiary)
	} else {
		build_cross_chain_transfer(intent.amount_in, &beneficiary, intent.to_chain_id)
	}
}

#[async_trait]
impl IntentHandler for FillPipeline {
	async fn handle_intent(&self, intent: &DiscoveredIntent) -> Result<(), HandlerError> {
		self.process(intent).await;
		Ok(())
	}
}
