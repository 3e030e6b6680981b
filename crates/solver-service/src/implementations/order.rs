use super::read_provider;
use solver_config::Config;
use solver_core::SolverError;
use solver_order::implementations::intent_box::IntentBoxOrders;
use solver_order::OrderInterface;

/// Ledger reads go to the intent box; fills are sent to the settlement engine.
pub fn create_order(config: &Config) -> Result<Box<dyn OrderInterface>, SolverError> {
	let provider = read_provider(&config.network.rpc_url)?;
	Ok(Box::new(IntentBoxOrders::new(
		provider,
		config.contracts.intent_box,
		config.contracts.settlement,
		config.network.chain_id,
	)))
}
