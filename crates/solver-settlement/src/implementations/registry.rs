//! Solver registry contract client.

use crate::{SettlementError, SettlementInterface};
use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use alloy::sol;
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use solver_types::{IntentId, SolverStatus, Transaction};

sol! {
	#[sol(rpc)]
	interface ISolverRegistry {
		function registerSolver() external payable;
		function solvers(address solver) external view returns (uint256 bondAmount, uint256 filledCount, uint256 slashCount, bool active);
		function claimPayout(bytes32 intentId) external;
		function MIN_BOND() external view returns (uint256);
	}
}

pub struct RegistryClient {
	registry: ISolverRegistry::ISolverRegistryInstance<DynProvider>,
	chain_id: u64,
}

impl RegistryClient {
	pub fn new(provider: DynProvider, registry: Address, chain_id: u64) -> Self {
		Self {
			registry: ISolverRegistry::new(registry, provider),
			chain_id,
		}
	}
}

#[async_trait]
impl SettlementInterface for RegistryClient {
	async fn solver_status(&self, solver: Address) -> Result<SolverStatus, SettlementError> {
		let info = self
			.registry
			.solvers(solver)
			.call()
			.await
			.map_err(|e| SettlementError::Contract(format!("solvers failed: {}", e)))?;

		Ok(SolverStatus {
			bond_amount: info.bondAmount,
			filled_count: info.filledCount,
			slash_count: info.slashCount,
			active: info.active,
		})
	}

	async fn min_bond(&self) -> Result<U256, SettlementError> {
		self.registry
			.MIN_BOND()
			.call()
			.await
			.map_err(|e| SettlementError::Contract(format!("MIN_BOND failed: {}", e)))
	}

	fn register_transaction(&self, bond: U256) -> Transaction {
		let data = ISolverRegistry::registerSolverCall {}.abi_encode();
		Transaction::call(*self.registry.address(), data, self.chain_id).with_value(bond)
	}

	fn claim_transaction(&self, intent_id: IntentId) -> Transaction {
		let data = ISolverRegistry::claimPayoutCall { intentId: intent_id }.abi_encode();
		Transaction::call(*self.registry.address(), data, self.chain_id)
	}
}
