//! In-memory ledger, registry and delivery used by the engine tests.

use crate::FillPipeline;
use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use solver_config::{parse_config, Config};
use solver_delivery::{DeliveryError, DeliveryInterface, DeliveryService};
use solver_discovery::{DiscoveryError, DiscoveryInterface};
use solver_order::{OrderError, OrderInterface, OrderService};
use solver_routing::RouteResolver;
use solver_settlement::{
	PayoutScheduler, RegistrationGate, SettlementError, SettlementInterface, SettlementService,
};
use solver_types::{
	DiscoveredIntent, EventBus, Intent, IntentId, IntentStatus, SolverStatus, Transaction,
	TransactionHash, TransactionReceipt,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const FIXED_NOW: u64 = 1_750_000_000;
pub const MIN_BOND: u64 = 1_000_000_000_000_000_000;
pub const CHAIN_ID: u64 = 420420417;

pub fn fixed_now() -> u64 {
	FIXED_NOW
}

pub fn settlement_address() -> Address {
	Address::repeat_byte(0x53)
}

pub fn registry_address() -> Address {
	Address::repeat_byte(0x52)
}

pub fn open_intent(id: IntentId, deadline: u64) -> Intent {
	Intent {
		id,
		user: Address::repeat_byte(0x11),
		from_chain_id: 420420417,
		to_chain_id: 2034,
		asset_in: Address::ZERO,
		asset_out: Address::ZERO,
		amount_in: U256::from(100_000_000_000_000_000u64),
		min_amount_out: U256::ZERO,
		max_fee: U256::from(1_000_000_000_000_000u64),
		deadline,
		status: IntentStatus::Open,
	}
}

pub fn discovered(id: IntentId) -> DiscoveredIntent {
	DiscoveredIntent {
		id,
		user: Address::repeat_byte(0x11),
		amount_in: U256::from(100_000_000_000_000_000u64),
		block_number: 100,
	}
}

pub fn test_config() -> Config {
	parse_config(
		r#"
		[solver]
		id = "engine-test"
		poll_interval_secs = 60

		[network]
		rpc_url = "http://127.0.0.1:8545"
		chain_id = 420420417

		[account]
		provider = "local"
		[account.config]
		private_key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"

		[contracts]
		intent_box = "0x4949494949494949494949494949494949494949"
		registry = "0x5252525252525252525252525252525252525252"
		settlement = "0x5353535353535353535353535353535353535353"
	"#,
	)
	.unwrap()
}

#[derive(Clone, Default)]
pub struct MockOrders {
	intents: Arc<Mutex<HashMap<IntentId, Intent>>>,
	fetches: Arc<AtomicUsize>,
}

impl MockOrders {
	pub fn insert(&self, intent: Intent) {
		self.intents.lock().unwrap().insert(intent.id, intent);
	}

	pub fn fetches(&self) -> usize {
		self.fetches.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl OrderInterface for MockOrders {
	async fn fetch_intent(&self, id: IntentId) -> Result<Intent, OrderError> {
		self.fetches.fetch_add(1, Ordering::SeqCst);
		self.intents
			.lock()
			.unwrap()
			.get(&id)
			.cloned()
			.ok_or_else(|| OrderError::Contract("execution reverted".into()))
	}

	async fn generate_fill_transaction(&self, intent: &Intent) -> Result<Transaction, OrderError> {
		Ok(Transaction::call(settlement_address(), intent.id.to_vec(), CHAIN_ID))
	}
}

#[derive(Clone)]
pub struct MockRegistry {
	active: bool,
}

#[async_trait]
impl SettlementInterface for MockRegistry {
	async fn solver_status(&self, _solver: Address) -> Result<SolverStatus, SettlementError> {
		Ok(SolverStatus {
			bond_amount: if self.active { U256::from(MIN_BOND) } else { U256::ZERO },
			filled_count: U256::ZERO,
			slash_count: U256::ZERO,
			active: self.active,
		})
	}

	async fn min_bond(&self) -> Result<U256, SettlementError> {
		Ok(U256::from(MIN_BOND))
	}

	fn register_transaction(&self, bond: U256) -> Transaction {
		Transaction::call(registry_address(), vec![0x01], CHAIN_ID).with_value(bond)
	}

	fn claim_transaction(&self, intent_id: IntentId) -> Transaction {
		Transaction::call(registry_address(), intent_id.to_vec(), CHAIN_ID)
	}
}

/// Records submissions; can be told to fail or revert the next few.
#[derive(Clone, Default)]
pub struct MockDelivery {
	submitted: Arc<Mutex<Vec<Transaction>>>,
	fail_next: Arc<AtomicUsize>,
	revert_next: Arc<AtomicUsize>,
}

impl MockDelivery {
	pub fn fail_next(&self, n: usize) {
		self.fail_next.store(n, Ordering::SeqCst);
	}

	pub fn revert_next(&self, n: usize) {
		self.revert_next.store(n, Ordering::SeqCst);
	}

	pub fn submitted_to(&self, to: Address) -> usize {
		self.submitted
			.lock()
			.unwrap()
			.iter()
			.filter(|tx| tx.to == to)
			.count()
	}

	pub fn total_submitted(&self) -> usize {
		self.submitted.lock().unwrap().len()
	}
}

fn take_one(counter: &AtomicUsize) -> bool {
	counter
		.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
		.is_ok()
}

#[async_trait]
impl DeliveryInterface for MockDelivery {
	async fn submit(&self, tx: Transaction) -> Result<TransactionHash, DeliveryError> {
		if take_one(&self.fail_next) {
			return Err(DeliveryError::Network("connection refused".into()));
		}
		let mut submitted = self.submitted.lock().unwrap();
		submitted.push(tx);
		Ok(B256::with_last_byte(submitted.len() as u8))
	}

	async fn wait_for_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<TransactionReceipt, DeliveryError> {
		Ok(TransactionReceipt {
			hash: *hash,
			block_number: 101,
			success: !take_one(&self.revert_next),
		})
	}
}

#[derive(Clone, Default)]
pub struct MockLedger {
	logs: Arc<Mutex<Vec<DiscoveredIntent>>>,
	head_reads: Arc<AtomicUsize>,
}

impl MockLedger {
	pub fn push(&self, intent: DiscoveredIntent) {
		self.logs.lock().unwrap().push(intent);
	}

	pub fn head_reads(&self) -> usize {
		self.head_reads.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl DiscoveryInterface for MockLedger {
	async fn block_number(&self) -> Result<u64, DiscoveryError> {
		self.head_reads.fetch_add(1, Ordering::SeqCst);
		Ok(100)
	}

	async fn intents_in_range(
		&self,
		from_block: u64,
		to_block: u64,
	) -> Result<Vec<DiscoveredIntent>, DiscoveryError> {
		Ok(self
			.logs
			.lock()
			.unwrap()
			.iter()
			.filter(|i| (from_block..=to_block).contains(&i.block_number))
			.cloned()
			.collect())
	}
}

/// A pipeline over mocks with the clock pinned to [`FIXED_NOW`].
pub struct TestEnv {
	pub pipeline: FillPipeline,
	pub orders: MockOrders,
	pub delivery: MockDelivery,
	pub event_bus: EventBus,
}

impl TestEnv {
	pub fn new() -> Self {
		let orders = MockOrders::default();
		let delivery_mock = MockDelivery::default();
		let event_bus = EventBus::new(64);

		let delivery = Arc::new(DeliveryService::new(Box::new(delivery_mock.clone())));
		let registry: Arc<dyn SettlementInterface> = Arc::new(MockRegistry { active: true });
		let settlement = Arc::new(SettlementService::new(
			RegistrationGate::new(registry.clone(), delivery.clone(), event_bus.clone()),
			PayoutScheduler::new(
				registry,
				delivery.clone(),
				Duration::from_secs(1860),
				event_bus.clone(),
			),
		));

		let pipeline = FillPipeline::new(
			OrderService::new(Box::new(orders.clone())),
			RouteResolver::local_only(),
			delivery,
			settlement,
			event_bus.clone(),
		)
		.with_clock(fixed_now);

		Self {
			pipeline,
			orders,
			delivery: delivery_mock,
			event_bus,
		}
	}
}

/// Mock handles shared with the factories passed to the builder.
pub struct EngineMocks {
	pub delivery: MockDelivery,
	pub ledger: MockLedger,
	pub orders: MockOrders,
	pub registry: MockRegistry,
}

impl EngineMocks {
	pub fn new(registered: bool) -> Self {
		Self {
			delivery: MockDelivery::default(),
			ledger: MockLedger::default(),
			orders: MockOrders::default(),
			registry: MockRegistry { active: registered },
		}
	}
}
