//! Client for the on-chain Pathfinder routing contract.
//!
//! The Pathfinder is a PVM contract; when the node cannot serve it through
//! the EVM call interface the calls fail and resolution falls back to the
//! static table.

use crate::{RouteQuery, RoutingError};
use alloy::primitives::Address;
use alloy::providers::DynProvider;
use alloy::sol;
use async_trait::async_trait;
use solver_types::ChainId;

sol! {
	#[sol(rpc)]
	interface IPathfinder {
		function find_route(uint32 from, uint32 to) external view returns (uint32[] memory);
		function get_edge_cost(uint32 from, uint32 to) external view returns (uint128);
	}
}

/// Queries a deployed Pathfinder contract over JSON-RPC.
pub struct PathfinderClient {
	contract: IPathfinder::IPathfinderInstance<DynProvider>,
}

impl PathfinderClient {
	pub fn new(address: Address, provider: DynProvider) -> Self {
		Self {
			contract: IPathfinder::new(address, provider),
		}
	}
}

#[async_trait]
impl RouteQuery for PathfinderClient {
	async fn find_route(&self, from: ChainId, to: ChainId) -> Result<Vec<ChainId>, RoutingError> {
		self.contract
			.find_route(from, to)
			.call()
			.await
			.map_err(|e| RoutingError::Contract(format!("find_route failed: {}", e)))
	}

	async fn edge_cost(&self, from: ChainId, to: ChainId) -> Result<u128, RoutingError> {
		self.contract
			.get_edge_cost(from, to)
			.call()
			.await
			.map_err(|e| RoutingError::Contract(format!("get_edge_cost failed: {}", e)))
	}
}
