use solver_account::AccountInterface;
use solver_config::Config;
use solver_core::SolverError;

pub fn create_account(config: &Config) -> Result<Box<dyn AccountInterface>, SolverError> {
	Ok(solver_account::create_account(
		&config.account.provider,
		&config.account.config,
	)?)
}
