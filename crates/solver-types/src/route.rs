//! Cross-chain routing types.

use std::fmt;

/// 32-bit chain identifier (EVM chain id or parachain id).
pub type ChainId = u32;

/// Where a resolved route came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSource {
	/// Answered by the on-chain pathfinder contract.
	OnChain,
	/// Found in the static table of relay-routed paths.
	LocalTable { name: &'static str },
	/// No known route; a direct hop was assumed.
	DirectFallback,
}

impl RouteSource {
	/// Whether the route came from an authoritative source rather than a guess.
	pub fn is_known(&self) -> bool {
		!matches!(self, Self::DirectFallback)
	}
}

impl fmt::Display for RouteSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::OnChain => write!(f, "on-chain (PVM Pathfinder)"),
			Self::LocalTable { name } => write!(f, "local table ({})", name),
			Self::DirectFallback => write!(f, "local table (direct, no known route)"),
		}
	}
}

/// Ordered hop path between two chains with an estimated cost.
///
/// The path always has at least two entries; the first is the source chain
/// and the last is the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
	pub path: Vec<ChainId>,
	/// Fee estimate in the destination's smallest unit.
	pub cost: u128,
	pub source: RouteSource,
}

impl Route {
	pub fn hops(&self) -> usize {
		self.path.len().saturating_sub(1)
	}
}
