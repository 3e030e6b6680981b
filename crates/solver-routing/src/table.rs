//! Static table of known relay-routed paths and chain display names.

use solver_types::{ChainId, Route, RouteSource};

pub const POLKADOT_HUB: ChainId = 420420417;
pub const ASSET_HUB: ChainId = 1000;

/// Fee estimate used when no route is known for a pair.
pub const DEFAULT_DIRECT_COST: u128 = 200_000_000;

struct KnownRoute {
	from: ChainId,
	to: ChainId,
	path: &'static [ChainId],
	cost: u128,
	name: &'static str,
}

const KNOWN_ROUTES: &[KnownRoute] = &[
	KnownRoute {
		from: POLKADOT_HUB,
		to: 2000,
		path: &[POLKADOT_HUB, ASSET_HUB, 2000],
		cost: 100_000_000,
		name: "Hub → AssetHub → Acala",
	},
	KnownRoute {
		from: POLKADOT_HUB,
		to: 2004,
		path: &[POLKADOT_HUB, ASSET_HUB, 2004],
		cost: 100_000_000,
		name: "Hub → AssetHub → Moonbeam",
	},
	KnownRoute {
		from: POLKADOT_HUB,
		to: 2006,
		path: &[POLKADOT_HUB, ASSET_HUB, 2006],
		cost: 100_000_000,
		name: "Hub → AssetHub → Astar",
	},
	KnownRoute {
		from: POLKADOT_HUB,
		to: 2030,
		path: &[POLKADOT_HUB, ASSET_HUB, 2030],
		cost: 100_000_000,
		name: "Hub → AssetHub → Bifrost",
	},
	KnownRoute {
		from: POLKADOT_HUB,
		to: 2034,
		path: &[POLKADOT_HUB, ASSET_HUB, 2034],
		cost: 100_000_000,
		name: "Hub → AssetHub → Hydration",
	},
	KnownRoute {
		from: POLKADOT_HUB,
		to: ASSET_HUB,
		path: &[POLKADOT_HUB, ASSET_HUB],
		cost: 50_000_000,
		name: "Hub → AssetHub (direct)",
	},
];

/// Looks up the exact `(from, to)` pair in the static table.
pub fn lookup_local(from: ChainId, to: ChainId) -> Option<Route> {
	KNOWN_ROUTES
		.iter()
		.find(|route| route.from == from && route.to == to)
		.map(|route| Route {
			path: route.path.to_vec(),
			cost: route.cost,
			source: RouteSource::LocalTable { name: route.name },
		})
}

/// Two-node guess used when nothing better is known.
pub fn direct_route(from: ChainId, to: ChainId) -> Route {
	Route {
		path: vec![from, to],
		cost: DEFAULT_DIRECT_COST,
		source: RouteSource::DirectFallback,
	}
}

pub fn chain_name(id: ChainId) -> Option<&'static str> {
	match id {
		POLKADOT_HUB => Some("PolkadotHub"),
		ASSET_HUB => Some("AssetHub"),
		2000 => Some("Acala"),
		2004 => Some("Moonbeam"),
		2006 => Some("Astar"),
		2030 => Some("Bifrost"),
		2034 => Some("Hydration"),
		_ => None,
	}
}

/// Renders a path like `PolkadotHub → AssetHub → Para(3000)`.
pub fn format_route(path: &[ChainId]) -> String {
	path.iter()
		.map(|id| match chain_name(*id) {
			Some(name) => name.to_string(),
			None => format!("Para({})", id),
		})
		.collect::<Vec<_>>()
		.join(" → ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lookup_hydration() {
		let route = lookup_local(POLKADOT_HUB, 2034).unwrap();
		assert_eq!(route.path, vec![POLKADOT_HUB, ASSET_HUB, 2034]);
		assert_eq!(route.cost, 100_000_000);
		assert_eq!(
			route.source.to_string(),
			"local table (Hub → AssetHub → Hydration)"
		);
	}

	#[test]
	fn test_lookup_is_directional() {
		assert!(lookup_local(2034, POLKADOT_HUB).is_none());
		assert_eq!(lookup_local(POLKADOT_HUB, ASSET_HUB).unwrap().cost, 50_000_000);
	}

	#[test]
	fn test_every_entry_is_well_formed() {
		for entry in KNOWN_ROUTES {
			assert!(entry.path.len() >= 2);
			assert_eq!(entry.path.first(), Some(&entry.from));
			assert_eq!(entry.path.last(), Some(&entry.to));
		}
	}

	#[test]
	fn test_format_route() {
		assert_eq!(
			format_route(&[POLKADOT_HUB, ASSET_HUB, 2034]),
			"PolkadotHub → AssetHub → Hydration"
		);
		assert_eq!(format_route(&[2004, 3000]), "Moonbeam → Para(3000)");
		assert_eq!(format_route(&[]), "");
	}
}
