//! Solver engine.
//!
//! Wires account, delivery, discovery, order, routing and settlement services
//! into a single polling loop: register once, then scan the ledger for new
//! intents every cycle and push each one through the [`FillPipeline`].

use solver_account::{AccountInterface, AccountService};
use solver_config::Config;
use solver_delivery::{DeliveryInterface, DeliveryService};
use solver_discovery::{DiscoveryInterface, DiscoveryService};
use solver_order::{OrderInterface, OrderService};
use solver_routing::{RouteQuery, RouteResolver};
use solver_settlement::{PayoutScheduler, RegistrationGate, SettlementInterface, SettlementService};
use solver_types::EventBus;
use std::sync::Arc;
use tokio::sync::mpsc;

mod error;
pub mod pipeline;

#[cfg(test)]
mod mocks;

pub use error::SolverError;
pub use pipeline::FillPipeline;

pub struct SolverEngine {
	config: Config,
	account: Arc<AccountService>,
	discovery: DiscoveryService,
	pipeline: Arc<FillPipeline>,
	settlement: Arc<SettlementService>,
	event_bus: EventBus,
}

impl SolverEngine {
	/// Registers the solver if needed, then polls for intents until a value
	/// arrives on `stop_rx` or its sender is dropped.
	///
	/// Registration and the initial head read are the only fatal steps; every
	/// later failure is logged and retried on the next cycle.
	pub async fn run(&self, mut stop_rx: mpsc::Receiver<()>) -> Result<(), SolverError> {
		tracing::info!(
			solver = %self.config.solver.id,
			chain_id = self.config.network.chain_id,
			intent_box = %self.config.contracts.intent_box,
			registry = %self.config.contracts.registry,
			settlement = %self.config.contracts.settlement,
			"Starting solver"
		);
		match self.config.routing.pathfinder {
			Some(pathfinder) => tracing::info!(%pathfinder, "Routing through on-chain pathfinder"),
			None => tracing::info!("Routing from local table only"),
		}

		let address = self.account.get_address().await?;
		tracing::info!(%address, "Solver account");

		self.settlement.ensure_registered(address).await?;

		let mut cursor = self.discovery.seed_cursor().await?;
		let poll_interval = self.config.solver.poll_interval();

		loop {
			cursor = self.discovery.scan(cursor, self.pipeline.as_ref()).await;

			let pending = self.pipeline.prune_payouts();
			tracing::trace!(cursor, pending_payouts = pending, "Cycle complete");

			tokio::select! {
				_ = tokio::time::sleep(poll_interval) => {}
				_ = stop_rx.recv() => {
					tracing::info!("Shutting down solver");
					break;
				}
			}
		}

		let pending = self.pipeline.prune_payouts();
		if pending > 0 {
			tracing::warn!(pending, "Exiting with payout claims still scheduled");
		}

		Ok(())
	}

	pub fn event_bus(&self) -> &EventBus {
		&self.event_bus
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn pipeline(&self) -> &FillPipeline {
		&self.pipeline
	}
}

// Type aliases for factory functions
type AccountFactory =
	Box<dyn Fn(&Config) -> Result<Box<dyn AccountInterface>, SolverError> + Send>;
type DeliveryFactory = Box<
	dyn Fn(&Config, &AccountService) -> Result<Box<dyn DeliveryInterface>, SolverError> + Send,
>;
type DiscoveryFactory =
	Box<dyn Fn(&Config) -> Result<Box<dyn DiscoveryInterface>, SolverError> + Send>;
type OrderFactory = Box<dyn Fn(&Config) -> Result<Box<dyn OrderInterface>, SolverError> + Send>;
type SettlementFactory =
	Box<dyn Fn(&Config) -> Result<Box<dyn SettlementInterface>, SolverError> + Send>;
type RouteQueryFactory =
	Box<dyn Fn(&Config) -> Result<Option<Box<dyn RouteQuery>>, SolverError> + Send>;

/// Assembles a [`SolverEngine`] from a configuration and one factory per
/// component. Every factory except routing is required.
pub struct SolverBuilder {
	config: Config,
	account_factory: Option<AccountFactory>,
	delivery_factory: Option<DeliveryFactory>,
	discovery_factory: Option<DiscoveryFactory>,
	order_factory: Option<OrderFactory>,
	settlement_factory: Option<SettlementFactory>,
	route_query_factory: Option<RouteQueryFactory>,
}

impl SolverBuilder {
	pub fn new(config: Config) -> Self {
		Self {
			config,
			account_factory: None,
			delivery_factory: None,
			discovery_factory: None,
			order_factory: None,
			settlement_factory: None,
			route_query_factory: None,
		}
	}

	pub fn with_account_factory<F>(mut self, factory: F) -> Self
	where
		F: Fn(&Config) -> Result<Box<dyn AccountInterface>, SolverError> + Send + 'static,
	{
		self.account_factory = Some(Box::new(factory));
		self
	}

	pub fn with_delivery_factory<F>(mut self, factory: F) -> Self
	where
		F: Fn(&Config, &AccountService) -> Result<Box<dyn DeliveryInterface>, SolverError>
			+ Send
			+ 'static,
	{
		self.delivery_factory = Some(Box::new(factory));
		self
	}

	pub fn with_discovery_factory<F>(mut self, factory: F) -> Self
	where
		F: Fn(&Config) -> Result<Box<dyn DiscoveryInterface>, SolverError> + Send + 'static,
	{
		self.discovery_factory = Some(Box::new(factory));
		self
	}

	pub fn with_order_factory<F>(mut self, factory: F) -> Self
	where
		F: Fn(&Config) -> Result<Box<dyn OrderInterface>, SolverError> + Send + 'static,
	{
		self.order_factory = Some(Box::new(factory));
		self
	}

	pub fn with_settlement_factory<F>(mut self, factory: F) -> Self
	where
		F: Fn(&Config) -> Result<Box<dyn SettlementInterface>, SolverError> + Send + 'static,
	{
		self.settlement_factory = Some(Box::new(factory));
		self
	}

	/// Optional; without it routes come from the local table.
	pub fn with_route_query_factory<F>(mut self, factory: F) -> Self
	where
		F: Fn(&Config) -> Result<Option<Box<dyn RouteQuery>>, SolverError> + Send + 'static,
	{
		self.route_query_factory = Some(Box::new(factory));
		self
	}

	pub fn build(self) -> Result<SolverEngine, SolverError> {
		let missing = |name: &str| SolverError::Config(format!("{} factory not provided", name));
		let event_bus = EventBus::new(1000);

		let account_provider = self.account_factory.ok_or_else(|| missing("Account"))?(&self.config)?;
		let account = Arc::new(AccountService::new(account_provider));

		let delivery_provider =
			self.delivery_factory.ok_or_else(|| missing("Delivery"))?(&self.config, &account)?;
		let delivery = Arc::new(DeliveryService::new(delivery_provider));

		let discovery_source =
			self.discovery_factory.ok_or_else(|| missing("Discovery"))?(&self.config)?;
		let discovery = DiscoveryService::new(
			discovery_source,
			self.config.solver.lookback_blocks,
			event_bus.clone(),
		);

		let order_impl = self.order_factory.ok_or_else(|| missing("Order"))?(&self.config)?;
		let order = OrderService::new(order_impl);

		let registry: Arc<dyn SettlementInterface> = Arc::from(
			self.settlement_factory.ok_or_else(|| missing("Settlement"))?(&self.config)?,
		);
		let settlement = Arc::new(SettlementService::new(
			RegistrationGate::new(registry.clone(), delivery.clone(), event_bus.clone()),
			PayoutScheduler::new(
				registry,
				delivery.clone(),
				self.config.solver.payout_delay(),
				event_bus.clone(),
			),
		));

		let route_query = match self.route_query_factory {
			Some(factory) => factory(&self.config)?,
			None => None,
		};
		let routes = RouteResolver::new(route_query);

		let pipeline = Arc::new(FillPipeline::new(
			order,
			routes,
			delivery,
			settlement.clone(),
			event_bus.clone(),
		));

		Ok(SolverEngine {
			config: self.config,
			account,
			discovery,
			pipeline,
			settlement,
			event_bus,
		})
	}
}
