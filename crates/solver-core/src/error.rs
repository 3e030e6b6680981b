use solver_account::AccountError;
use solver_discovery::DiscoveryError;
use solver_order::OrderError;
use solver_settlement::SettlementError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
	#[error("Configuration error: {0}")]
	Config(String),

	#[error("Account error: {0}")]
	Account(#[from] AccountError),

	#[error("Discovery error: {0}")]
	Discovery(#[from] DiscoveryError),

	#[error("Order error: {0}")]
	Order(#[from] OrderError),

	#[error("Settlement error: {0}")]
	Settlement(#[from] SettlementError),
}
