//! Fill outcome types.
//!
//! This module defines what the fill pipeline reports back for each intent it
//! is handed: either a confirmed fill or the reason it was skipped.

use std::fmt;

use crate::{IntentId, IntentStatus, TransactionReceipt};

/// Why an intent was not filled on this attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
	/// The intent is already being handled, or was handled earlier in this process.
	Duplicate,
	/// The ledger no longer reports the intent as open.
	NotOpen(IntentStatus),
	/// The deadline has passed.
	Expired { deadline: u64, now: u64 },
	/// The ledger read for the intent failed; it is not retried in this process.
	Unreadable(String),
	/// Settlement was attempted and failed; the intent may be retried.
	Failed(String),
}

impl SkipReason {
	/// Whether a later discovery of the same intent will be attempted again.
	pub fn is_retryable(&self) -> bool {
		matches!(self, Self::Failed(_))
	}
}

impl fmt::Display for SkipReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Duplicate => write!(f, "already processed"),
			Self::NotOpen(status) => write!(f, "not open (status: {})", status),
			Self::Expired { deadline, now } => {
				write!(f, "expired (deadline {} < now {})", deadline, now)
			}
			Self::Unreadable(error) => write!(f, "intent unreadable: {}", error),
			Self::Failed(error) => write!(f, "settlement failed: {}", error),
		}
	}
}

/// Result of handing one intent to the fill pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
	/// Settlement confirmed; a payout claim is scheduled for `claim_at`.
	Filled {
		intent_id: IntentId,
		receipt: TransactionReceipt,
		claim_at: u64,
	},
	Skipped(SkipReason),
}

impl FillOutcome {
	pub fn is_filled(&self) -> bool {
		matches!(self, Self::Filled { .. })
	}
}
