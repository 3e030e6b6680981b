use super::read_provider;
use solver_config::Config;
use solver_core::SolverError;
use solver_routing::implementations::pathfinder::PathfinderClient;
use solver_routing::RouteQuery;

/// Pathfinder client when `routing.pathfinder` is set, otherwise `None`.
pub fn create_route_query(config: &Config) -> Result<Option<Box<dyn RouteQuery>>, SolverError> {
	let Some(address) = config.routing.pathfinder else {
		return Ok(None);
	};

	let provider = read_provider(&config.network.rpc_url)?;
	Ok(Some(Box::new(PathfinderClient::new(address, provider))))
}
