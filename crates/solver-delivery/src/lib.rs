//! Transaction delivery for the solver.
//!
//! Delivery is the solver's only write path to the chain: callers hand over a
//! fully-formed [`Transaction`] and get back a receipt once it is mined.
//! Signing, nonce and gas management belong to the implementation.

use async_trait::async_trait;
use solver_types::{truncate_id, Transaction, TransactionHash, TransactionReceipt};
use thiserror::Error;

pub mod implementations {
	pub mod evm {
		pub mod alloy;
	}
}

#[derive(Debug, Error)]
pub enum DeliveryError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("Timed out after {secs}s waiting for receipt of {hash}")]
	Timeout { hash: TransactionHash, secs: u64 },
	#[error("Transaction {0} reverted")]
	Reverted(TransactionHash),
}

#[async_trait]
pub trait DeliveryInterface: Send + Sync {
	/// Signs and broadcasts `tx`, returning as soon as the node accepts it.
	async fn submit(&self, tx: Transaction) -> Result<TransactionHash, DeliveryError>;

	/// Waits until `hash` is mined and returns its receipt, successful or not.
	async fn wait_for_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<TransactionReceipt, DeliveryError>;
}

pub struct DeliveryService {
	provider: Box<dyn DeliveryInterface>,
}

impl DeliveryService {
	pub fn new(provider: Box<dyn DeliveryInterface>) -> Self {
		Self { provider }
	}

	/// Submits `tx` and waits for it to be mined.
	///
	/// A mined transaction with a failed status is reported as
	/// [`DeliveryError::Reverted`].
	pub async fn deliver_and_confirm(
		&self,
		tx: Transaction,
	) -> Result<TransactionReceipt, DeliveryError> {
		let hash = self.provider.submit(tx).await?;
		tracing::debug!(tx_hash = %truncate_id(&hash.to_string()), "Waiting for receipt");

		let receipt = self.provider.wait_for_receipt(&hash).await?;
		if !receipt.success {
			return Err(DeliveryError::Reverted(hash));
		}

		tracing::debug!(
			tx_hash = %truncate_id(&hash.to_string()),
			block = receipt.block_number,
			"Transaction confirmed"
		);
		Ok(receipt)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy::primitives::{Address, B256};
	use std::sync::{Arc, Mutex};

	struct MockDelivery {
		success: bool,
		submitted: Arc<Mutex<Vec<Transaction>>>,
	}

	#[async_trait]
	impl DeliveryInterface for MockDelivery {
		async fn submit(&self, tx: Transaction) -> Result<TransactionHash, DeliveryError> {
			self.submitted.lock().unwrap().push(tx);
			Ok(B256::repeat_byte(0x77))
		}

		async fn wait_for_receipt(
			&self,
			hash: &TransactionHash,
		) -> Result<TransactionReceipt, DeliveryError> {
			Ok(TransactionReceipt {
				hash: *hash,
				block_number: 12,
				success: self.success,
			})
		}
	}

	fn service(success: bool) -> (DeliveryService, Arc<Mutex<Vec<Transaction>>>) {
		let submitted = Arc::new(Mutex::new(Vec::new()));
		let service = DeliveryService::new(Box::new(MockDelivery {
			success,
			submitted: submitted.clone(),
		}));
		(service, submitted)
	}

	#[tokio::test]
	async fn test_deliver_and_confirm() {
		let (service, submitted) = service(true);
		let tx = Transaction::call(Address::repeat_byte(1), vec![0xde, 0xad], 1);

		let receipt = service.deliver_and_confirm(tx.clone()).await.unwrap();
		assert_eq!(receipt.block_number, 12);
		assert_eq!(submitted.lock().unwrap().as_slice(), &[tx]);
	}

	#[tokio::test]
	async fn test_failed_status_is_reverted() {
		let (service, _) = service(false);
		let tx = Transaction::call(Address::repeat_byte(1), Vec::new(), 1);

		match service.deliver_and_confirm(tx).await {
			Err(DeliveryError::Reverted(hash)) => assert_eq!(hash, B256::repeat_byte(0x77)),
			other => panic!("expected revert, got {:?}", other),
		}
	}
}
