//! On-chain discovery of `IntentSubmitted` events.

use crate::{DiscoveryError, DiscoveryInterface};
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::Filter;
use alloy::sol;
use alloy::sol_types::SolEvent;
use async_trait::async_trait;
use solver_types::DiscoveredIntent;

sol! {
	/// Emitted by the intent ledger when a user posts an intent.
	event IntentSubmitted(bytes32 indexed intentId, address indexed user, uint256 amountIn);
}

/// Reads `IntentSubmitted` logs emitted by the intent ledger contract.
pub struct IntentBoxDiscovery {
	provider: DynProvider,
	intent_box: Address,
}

impl IntentBoxDiscovery {
	pub fn new(provider: DynProvider, intent_box: Address) -> Self {
		Self {
			provider,
			intent_box,
		}
	}
}

#[async_trait]
impl DiscoveryInterface for IntentBoxDiscovery {
	async fn block_number(&self) -> Result<u64, DiscoveryError> {
		self.provider
			.get_block_number()
			.await
			.map_err(|e| DiscoveryError::Network(format!("Failed to get block number: {}", e)))
	}

	async fn intents_in_range(
		&self,
		from_block: u64,
		to_block: u64,
	) -> Result<Vec<DiscoveredIntent>, DiscoveryError> {
		let filter = Filter::new()
			.address(self.intent_box)
			.event_signature(IntentSubmitted::SIGNATURE_HASH)
			.from_block(from_block)
			.to_block(to_block);

		let logs = self
			.provider
			.get_logs(&filter)
			.await
			.map_err(|e| DiscoveryError::Network(format!("Failed to get logs: {}", e)))?;

		logs.iter()
			.map(|log| {
				let decoded = log
					.log_decode::<IntentSubmitted>()
					.map_err(|e| DiscoveryError::Decode(e.to_string()))?;
				let event = &decoded.inner.data;

				Ok(DiscoveredIntent {
					id: event.intentId,
					user: event.user,
					amount_in: event.amountIn,
					block_number: log.block_number.unwrap_or(from_block),
				})
			})
			.collect()
	}
}
