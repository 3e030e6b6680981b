//! Configuration types for the solver.

use crate::serde_helpers::{deserialize_address, deserialize_optional_address};
use alloy::primitives::Address;
use serde::Deserialize;
use std::time::Duration;

/// Complete solver configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub solver: SolverSettings,
	pub network: NetworkConfig,
	pub account: AccountConfig,
	pub contracts: ContractsConfig,
	#[serde(default)]
	pub routing: RoutingConfig,
	#[serde(default)]
	pub delivery: DeliveryConfig,
}

/// Solver identity and loop cadence
#[derive(Debug, Clone, Deserialize)]
pub struct SolverSettings {
	/// Name used in logs
	pub id: String,
	/// Seconds between discovery cycles
	#[serde(default = "default_poll_interval_secs")]
	pub poll_interval_secs: u64,
	/// Blocks behind the head the first scan starts from
	#[serde(default = "default_lookback_blocks")]
	pub lookback_blocks: u64,
	/// Seconds between a confirmed fill and its payout claim
	#[serde(default = "default_payout_delay_secs")]
	pub payout_delay_secs: u64,
}

impl SolverSettings {
	pub fn poll_interval(&self) -> Duration {
		Duration::from_secs(self.poll_interval_secs)
	}

	pub fn payout_delay(&self) -> Duration {
		Duration::from_secs(self.payout_delay_secs)
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
	pub rpc_url: String,
	pub chain_id: u64,
}

/// Account provider selection and its implementation-specific table
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
	pub provider: String,
	#[serde(default = "empty_table")]
	pub config: toml::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContractsConfig {
	/// Intent ledger
	#[serde(deserialize_with = "deserialize_address")]
	pub intent_box: Address,
	/// Solver registry (bonding and payouts)
	#[serde(deserialize_with = "deserialize_address")]
	pub registry: Address,
	/// Settlement engine
	#[serde(deserialize_with = "deserialize_address")]
	pub settlement: Address,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoutingConfig {
	/// On-chain pathfinder; routes come from the static table when unset
	#[serde(default, deserialize_with = "deserialize_optional_address")]
	pub pathfinder: Option<Address>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
	#[serde(default = "default_receipt_poll_interval_secs")]
	pub receipt_poll_interval_secs: u64,
	/// Receipt waits are unbounded when unset
	#[serde(default)]
	pub receipt_timeout_secs: Option<u64>,
}

impl DeliveryConfig {
	pub fn receipt_poll_interval(&self) -> Duration {
		Duration::from_secs(self.receipt_poll_interval_secs)
	}

	pub fn receipt_timeout(&self) -> Option<Duration> {
		self.receipt_timeout_secs.map(Duration::from_secs)
	}
}

impl Default for DeliveryConfig {
	fn default() -> Self {
		Self {
			receipt_poll_interval_secs: default_receipt_poll_interval_secs(),
			receipt_timeout_secs: None,
		}
	}
}

fn default_poll_interval_secs() -> u64 {
	4
}

fn default_lookback_blocks() -> u64 {
	1000
}

fn default_payout_delay_secs() -> u64 {
	31 * 60
}

fn default_receipt_poll_interval_secs() -> u64 {
	2
}

fn empty_table() -> toml::Value {
	toml::Value::Table(toml::Table::new())
}
