//! Alloy-based EVM delivery.
//!
//! Transactions are signed by the wallet attached to the provider and
//! confirmed by polling `eth_getTransactionReceipt`.

use crate::{DeliveryError, DeliveryInterface};
use alloy::network::{EthereumWallet, ReceiptResponse};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use solver_types::{truncate_id, Transaction, TransactionHash, TransactionReceipt};
use std::time::Duration;

/// Builds an HTTP provider that signs with `wallet`.
///
/// The provider fills nonce, gas and chain id, and is shared by delivery and
/// the contract clients.
pub fn connect_provider(rpc_url: &str, wallet: EthereumWallet) -> Result<DynProvider, DeliveryError> {
	let url = rpc_url
		.parse()
		.map_err(|e| DeliveryError::Network(format!("Invalid RPC URL: {}", e)))?;

	Ok(ProviderBuilder::new().wallet(wallet).connect_http(url).erased())
}

pub struct AlloyDelivery {
	provider: DynProvider,
	poll_interval: Duration,
	/// `None` waits for a receipt indefinitely.
	timeout: Option<Duration>,
}

impl AlloyDelivery {
	pub fn new(provider: DynProvider, poll_interval: Duration, timeout: Option<Duration>) -> Self {
		Self {
			provider,
			poll_interval,
			timeout,
		}
	}
}

#[async_trait]
impl DeliveryInterface for AlloyDelivery {
	async fn submit(&self, tx: Transaction) -> Result<TransactionHash, DeliveryError> {
		let request: TransactionRequest = tx.into();

		let pending_tx = self
			.provider
			.send_transaction(request)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to send transaction: {}", e)))?;

		let tx_hash = *pending_tx.tx_hash();
		tracing::info!(tx_hash = %truncate_id(&tx_hash.to_string()), "Submitted transaction");

		Ok(tx_hash)
	}

	async fn wait_for_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<TransactionReceipt, DeliveryError> {
		let start_time = tokio::time::Instant::now();

		loop {
			if let Some(timeout) = self.timeout {
				if start_time.elapsed() > timeout {
					return Err(DeliveryError::Timeout {
						hash: *hash,
						secs: timeout.as_secs(),
					});
				}
			}

			match self.provider.get_transaction_receipt(*hash).await {
				Ok(Some(receipt)) => {
					return Ok(TransactionReceipt {
						hash: receipt.transaction_hash,
						block_number: receipt.block_number.unwrap_or(0),
						success: receipt.status(),
					});
				}
				Ok(None) => {}
				Err(e) => {
					return Err(DeliveryError::Network(format!(
						"Failed to get receipt: {}",
						e
					)));
				}
			}

			tokio::time::sleep(self.poll_interval).await;
		}
	}
}
