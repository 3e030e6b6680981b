use solver_account::AccountService;
use solver_config::Config;
use solver_core::SolverError;
use solver_delivery::implementations::evm::alloy::{connect_provider, AlloyDelivery};
use solver_delivery::DeliveryInterface;

/// Alloy delivery signing with the account's wallet.
pub fn create_delivery(
	config: &Config,
	account: &AccountService,
) -> Result<Box<dyn DeliveryInterface>, SolverError> {
	let provider = connect_provider(&config.network.rpc_url, account.wallet())
		.map_err(|e| SolverError::Config(e.to_string()))?;

	Ok(Box::new(AlloyDelivery::new(
		provider,
		config.delivery.receipt_poll_interval(),
		config.delivery.receipt_timeout(),
	)))
}
