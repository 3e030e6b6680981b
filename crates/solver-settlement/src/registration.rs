//! Startup check that the solver holds an active bond.

use crate::{SettlementError, SettlementInterface};
use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, U256};
use solver_delivery::DeliveryService;
use solver_types::{EventBus, SettlementEvent, SolverEvent, TransactionReceipt};
use std::sync::Arc;

/// Outcome of [`RegistrationGate::ensure_registered`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
	AlreadyActive { bond: U256 },
	Registered { bond: U256, receipt: TransactionReceipt },
}

pub struct RegistrationGate {
	settlement: Arc<dyn SettlementInterface>,
	delivery: Arc<DeliveryService>,
	event_bus: EventBus,
}

impl RegistrationGate {
	pub fn new(
		settlement: Arc<dyn SettlementInterface>,
		delivery: Arc<DeliveryService>,
		event_bus: EventBus,
	) -> Self {
		Self {
			settlement,
			delivery,
			event_bus,
		}
	}

	/// Bonds the solver at the registry's minimum unless it is already active.
	///
	/// Waits for the registration to be mined. Any error here means the
	/// solver must not start filling.
	pub async fn ensure_registered(&self, solver: Address) -> Result<Registration, SettlementError> {
		let status = self.settlement.solver_status(solver).await?;
		if status.active {
			tracing::info!(
				bond = %format_ether(status.bond_amount),
				filled = %status.filled_count,
				"Already registered"
			);
			return Ok(Registration::AlreadyActive {
				bond: status.bond_amount,
			});
		}

		let bond = self.settlement.min_bond().await?;
		tracing::info!(bond = %format_ether(bond), "Registering as solver");

		let receipt = self
			.delivery
			.deliver_and_confirm(self.settlement.register_transaction(bond))
			.await?;

		tracing::info!(
			bond = %format_ether(bond),
			block = receipt.block_number,
			"Registered"
		);
		self.event_bus
			.publish(SolverEvent::Settlement(SettlementEvent::Registered {
				bond,
				receipt,
			}));

		Ok(Registration::Registered { bond, receipt })
	}
}
