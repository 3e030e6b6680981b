use super::read_provider;
use solver_config::Config;
use solver_core::SolverError;
use solver_discovery::implementations::onchain::intent_box::IntentBoxDiscovery;
use solver_discovery::DiscoveryInterface;

pub fn create_discovery(config: &Config) -> Result<Box<dyn DiscoveryInterface>, SolverError> {
	let provider = read_provider(&config.network.rpc_url)?;
	Ok(Box::new(IntentBoxDiscovery::new(
		provider,
		config.contracts.intent_box,
	)))
}
