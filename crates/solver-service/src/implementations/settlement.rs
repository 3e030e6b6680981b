use super::read_provider;
use solver_config::Config;
use solver_core::SolverError;
use solver_settlement::implementations::registry::RegistryClient;
use solver_settlement::SettlementInterface;

pub fn create_settlement(config: &Config) -> Result<Box<dyn SettlementInterface>, SolverError> {
	let provider = read_provider(&config.network.rpc_url)?;
	Ok(Box::new(RegistryClient::new(
		provider,
		config.contracts.registry,
		config.network.chain_id,
	)))
}
