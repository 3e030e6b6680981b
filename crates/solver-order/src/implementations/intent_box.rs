//! Intent ledger and settlement contract client.
//!
//! Reads intents through `getIntent` on the ledger and fills them with a
//! single `settleIntentTestnet` call on the settlement contract.

use crate::{OrderError, OrderInterface};
use alloy::primitives::Address;
use alloy::providers::DynProvider;
use alloy::sol;
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use solver_types::{Intent, IntentId, IntentStatus, Transaction};

sol! {
	#[sol(rpc)]
	interface IIntentBox {
		struct IntentRecord {
			address user;
			uint32 fromChainId;
			uint32 toChainId;
			address assetIn;
			address assetOut;
			uint256 amountIn;
			uint256 minAmountOut;
			uint256 deadline;
			uint256 maxFee;
			uint8 status;
		}

		function getIntent(bytes32 intentId) external view returns (IntentRecord memory);
	}

	interface ISettlementEngine {
		function settleIntentTestnet(bytes32 intentId) external;
	}
}

pub struct IntentBoxOrders {
	intent_box: IIntentBox::IIntentBoxInstance<DynProvider>,
	settlement: Address,
	chain_id: u64,
}

impl IntentBoxOrders {
	pub fn new(provider: DynProvider, intent_box: Address, settlement: Address, chain_id: u64) -> Self {
		Self {
			intent_box: IIntentBox::new(intent_box, provider),
			settlement,
			chain_id,
		}
	}
}

/// Converts a raw ledger record into an [`Intent`].
fn intent_from_record(id: IntentId, record: IIntentBox::IntentRecord) -> Intent {
	Intent {
		id,
		user: record.user,
		from_chain_id: record.fromChainId,
		to_chain_id: record.toChainId,
		asset_in: record.assetIn,
		asset_out: record.assetOut,
		amount_in: record.amountIn,
		min_amount_out: record.minAmountOut,
		max_fee: record.maxFee,
		deadline: record.deadline.saturating_to::<u64>(),
		status: IntentStatus::from_code(record.status),
	}
}

#[async_trait]
impl OrderInterface for IntentBoxOrders {
	async fn fetch_intent(&self, id: IntentId) -> Result<Intent, OrderError> {
		let record = self
			.intent_box
			.getIntent(id)
			.call()
			.await
			.map_err(|e| OrderError::Contract(format!("getIntent failed: {}", e)))?;

		tracing::debug!(
			intent_id = %id,
			status = record.status,
			deadline = %record.deadline,
			"Read intent record"
		);
		Ok(intent_from_record(id, record))
	}

	async fn generate_fill_transaction(&self, intent: &Intent) -> Result<Transaction, OrderError> {
		let call = ISettlementEngine::settleIntentTestnetCall {
			intentId: intent.id,
		};

		Ok(Transaction::call(
			self.settlement,
			call.abi_encode(),
			self.chain_id,
		))
	}
}
