//! Factories that build the solver's components from configuration.
//!
//! Each submodule adapts one component crate to the [`SolverBuilder`]
//! factory signature. Delivery gets a signing provider; every other
//! component only reads the chain and shares a plain HTTP provider.
//!
//! [`SolverBuilder`]: solver_core::SolverBuilder

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use solver_core::SolverError;

/// Account provider implementations (local private key).
pub mod account;
/// Transaction delivery over an Alloy signing provider.
pub mod delivery;
/// `IntentSubmitted` log scanning on the intent ledger.
pub mod discovery;
/// Intent ledger reads and settlement calldata.
pub mod order;
/// Optional on-chain pathfinder.
pub mod routing;
/// Solver registry (bond and payout claims).
pub mod settlement;

/// Builds a read-only HTTP provider for `rpc_url`.
pub fn read_provider(rpc_url: &str) -> Result<DynProvider, SolverError> {
	let url = rpc_url
		.parse()
		.map_err(|e| SolverError::Config(format!("Invalid RPC URL {}: {}", rpc_url, e)))?;

	Ok(ProviderBuilder::new().connect_http(url).erased())
}
