//! Configuration loading with environment variable substitution.

use crate::{Config, ConfigError};
use regex::Regex;
use solver_types::http_url;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader with environment variable substitution
#[derive(Debug, Default)]
pub struct ConfigLoader {
	file_path: Option<PathBuf>,
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_path_buf());
		self
	}

	/// Reads, substitutes, parses and validates the configuration file.
	pub async fn load(&self) -> Result<Config, ConfigError> {
		let file_path = self.file_path.as_ref().ok_or_else(|| {
			ConfigError::FileNotFound("No configuration file specified".to_string())
		})?;

		let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
			ConfigError::FileNotFound(format!("{}: {}", file_path.display(), e))
		})?;

		let config = parse_config(&content)?;
		tracing::debug!(path = %file_path.display(), "Loaded configuration");
		Ok(config)
	}
}

/// Parses and validates configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
	let substituted = substitute_env_vars(content)?;

	let config: Config =
		toml::from_str(&substituted).map_err(|e| ConfigError::ParseError(e.to_string()))?;

	validate_config(&config)?;
	Ok(config)
}

/// Replaces every `${VAR_NAME}` with the value of the environment variable.
fn substitute_env_vars(content: &str) -> Result<String, ConfigError> {
	let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::ParseError(e.to_string()))?;

	let mut result = String::with_capacity(content.len());
	let mut last = 0;
	for cap in re.captures_iter(content) {
		let (Some(full_match), Some(var_name)) = (cap.get(0), cap.get(1)) else {
			continue;
		};
		let value = env::var(var_name.as_str())
			.map_err(|_| ConfigError::EnvVarNotFound(var_name.as_str().to_string()))?;

		result.push_str(&content[last..full_match.start()]);
		result.push_str(&value);
		last = full_match.end();
	}
	result.push_str(&content[last..]);

	Ok(result)
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
	let invalid = |msg: &str| Err(ConfigError::ValidationError(msg.to_string()));

	if config.solver.id.trim().is_empty() {
		return invalid("solver.id must not be empty");
	}
	if config.solver.poll_interval_secs == 0 {
		return invalid("solver.poll_interval_secs must be greater than 0");
	}
	if config.solver.payout_delay_secs == 0 {
		return invalid("solver.payout_delay_secs must be greater than 0");
	}
	if let Err(message) = http_url(&toml::Value::String(config.network.rpc_url.clone())) {
		return invalid(&format!("network.rpc_url: {}", message));
	}
	if config.network.chain_id == 0 {
		return invalid("network.chain_id must be greater than 0");
	}
	if config.account.provider.trim().is_empty() {
		return invalid("account.provider must not be empty");
	}
	if !config.account.config.is_table() {
		return invalid("account.config must be a table");
	}
	if config.delivery.receipt_poll_interval_secs == 0 {
		return invalid("delivery.receipt_poll_interval_secs must be greater than 0");
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	const MINIMAL: &str = r#"
		[solver]
		id = "test-solver"

		[network]
		rpc_url = "https://testnet-passet-hub-eth-rpc.polkadot.io"
		chain_id = 420420417

		[account]
		provider = "local"
		[account.config]
		private_key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"

		[contracts]
		intent_box = "0x1111111111111111111111111111111111111111"
		registry = "0x2222222222222222222222222222222222222222"
		settlement = "0x3333333333333333333333333333333333333333"
	"#;

	#[test]
	fn test_defaults_match_fixed_cadence() {
		let config = parse_config(MINIMAL).unwrap();
		assert_eq!(config.solver.poll_interval_secs, 4);
		assert_eq!(config.solver.lookback_blocks, 1000);
		assert_eq!(config.solver.payout_delay_secs, 1860);
		assert_eq!(config.delivery.receipt_poll_interval_secs, 2);
		assert_eq!(config.delivery.receipt_timeout(), None);
		assert_eq!(config.routing.pathfinder, None);
	}

	#[test]
	fn test_env_substitution() {
		env::set_var("SOLVER_CONFIG_TEST_RPC", "http://127.0.0.1:8545");
		let content = MINIMAL.replace(
			"https://testnet-passet-hub-eth-rpc.polkadot.io",
			"${SOLVER_CONFIG_TEST_RPC}",
		);
		let config = parse_config(&content).unwrap();
		assert_eq!(config.network.rpc_url, "http://127.0.0.1:8545");
	}

	#[test]
	fn test_missing_env_var() {
		let content = MINIMAL.replace("test-solver", "${SOLVER_CONFIG_TEST_UNSET_VAR}");
		assert!(matches!(
			parse_config(&content),
			Err(ConfigError::EnvVarNotFound(name)) if name == "SOLVER_CONFIG_TEST_UNSET_VAR"
		));
	}

	#[test]
	fn test_validation_errors() {
		let ws = MINIMAL.replace("https://testnet", "ws://testnet");
		assert!(matches!(
			parse_config(&ws),
			Err(ConfigError::ValidationError(msg)) if msg.starts_with("network.rpc_url")
		));

		let zero_poll = MINIMAL.replace("id = \"test-solver\"", "id = \"s\"\npoll_interval_secs = 0");
		assert!(matches!(parse_config(&zero_poll), Err(ConfigError::ValidationError(_))));

		let bad_addr = MINIMAL.replace("0x3333333333333333333333333333333333333333", "0x33");
		assert!(matches!(parse_config(&bad_addr), Err(ConfigError::ParseError(_))));
	}

	#[tokio::test]
	async fn test_load_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		let content = format!(
			"{}\n[routing]\npathfinder = \"0x7013DC4df91c1A8f0D33d6D6F44310e1565FBb5c\"\n\n[delivery]\nreceipt_timeout_secs = 600\n",
			MINIMAL
		);
		file.write_all(content.as_bytes()).unwrap();

		let config = ConfigLoader::new().with_file(file.path()).load().await.unwrap();
		assert!(config.routing.pathfinder.is_some());
		assert_eq!(config.delivery.receipt_timeout_secs, Some(600));
		assert_eq!(config.account.provider, "local");
	}

	#[tokio::test]
	async fn test_load_missing_file() {
		let result = ConfigLoader::new()
			.with_file("/nonexistent/solver.toml")
			.load()
			.await;
		assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
	}
}
