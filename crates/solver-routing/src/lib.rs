//! Cross-chain route resolution.
//!
//! Routes are resolved through a fixed ladder: an optional live query against
//! the on-chain pathfinder, then the static relay table, then a direct
//! two-node guess. Resolution never fails; the returned [`RouteSource`] tells
//! callers how much to trust the answer.

use async_trait::async_trait;
use solver_types::{ChainId, Route, RouteSource};
use thiserror::Error;

pub mod implementations {
	pub mod pathfinder;
}

pub mod table;

pub use table::{chain_name, direct_route, format_route, lookup_local};

/// Errors returned by a live route query.
#[derive(Debug, Error)]
pub enum RoutingError {
	#[error("Contract error: {0}")]
	Contract(String),
	#[error("Malformed route: {0}")]
	MalformedRoute(String),
}

/// Live source of routing information, typically an on-chain contract.
#[async_trait]
pub trait RouteQuery: Send + Sync {
	/// Returns the hop path from `from` to `to`, endpoints included.
	async fn find_route(&self, from: ChainId, to: ChainId) -> Result<Vec<ChainId>, RoutingError>;

	/// Returns the estimated cost of the `from` to `to` leg.
	async fn edge_cost(&self, from: ChainId, to: ChainId) -> Result<u128, RoutingError>;
}

/// Resolves a route from `from` to `to`, preferring the live `query` when given.
pub async fn resolve_route(from: ChainId, to: ChainId, query: Option<&dyn RouteQuery>) -> Route {
	if let Some(query) = query {
		match query_on_chain(query, from, to).await {
			Ok(route) => return route,
			Err(e) => tracing::debug!(from, to, "On-chain route query missed: {}", e),
		}
	}

	lookup_local(from, to).unwrap_or_else(|| direct_route(from, to))
}

async fn query_on_chain(
	query: &dyn RouteQuery,
	from: ChainId,
	to: ChainId,
) -> Result<Route, RoutingError> {
	let path = query.find_route(from, to).await?;

	if path.len() < 2 || path.first() != Some(&from) || path.last() != Some(&to) {
		return Err(RoutingError::MalformedRoute(format!(
			"expected path {} → {}, got {:?}",
			from, to, path
		)));
	}

	let cost = query.edge_cost(from, to).await?;

	Ok(Route {
		path,
		cost,
		source: RouteSource::OnChain,
	})
}

/// Owns the optional live query and resolves routes with it.
pub struct RouteResolver {
	query: Option<Box<dyn RouteQuery>>,
}

impl RouteResolver {
	pub fn new(query: Option<Box<dyn RouteQuery>>) -> Self {
		Self { query }
	}

	/// Resolver that only consults the static table.
	pub fn local_only() -> Self {
		Self { query: None }
	}

	pub async fn resolve(&self, from: ChainId, to: ChainId) -> Route {
		resolve_route(from, to, self.query.as_deref()).await
	}
}
