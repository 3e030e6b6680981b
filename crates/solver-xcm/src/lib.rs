//! XCM v4 payload construction for cross-chain transfers.
//!
//! Messages are SCALE-encoded by hand: the solver only ever produces a small,
//! fixed family of programs (withdraw, buy execution, deposit locally or via a
//! reserve chain), so pulling in a full runtime metadata stack is unnecessary.

use alloy::primitives::U256;
use thiserror::Error;

pub mod compact;
pub mod instruction;
pub mod program;

pub use compact::{decode_compact, encode_compact};
pub use instruction::Instruction;
pub use program::{
	address_to_account_id, build_cross_chain_transfer, build_simple_transfer, XcmProgram,
};

/// One unit of the relay chain's native token, in planck (10 decimals).
pub const PAS_UNITS: u64 = 10_000_000_000;
/// One hundredth of a unit.
pub const PAS_CENTS: u64 = PAS_UNITS / 100;
/// Divisor converting 18-decimal EVM amounts to 10-decimal planck.
pub const WEI_PER_PLANCK: u64 = 100_000_000;
/// `VersionedXcm::V4` discriminant.
pub const XCM_V4: u8 = 0x05;

/// Errors that can occur while decoding SCALE data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum XcmError {
	#[error("Unexpected end of input: needed {needed} bytes, got {available}")]
	UnexpectedEof { needed: usize, available: usize },
	#[error("Compact integer of {0} bytes does not fit in 256 bits")]
	Overflow(usize),
}

/// Converts an 18-decimal amount to planck, truncating the remainder.
pub fn to_planck(amount_wei: U256) -> U256 {
	amount_wei / U256::from(WEI_PER_PLANCK)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_to_planck_truncates() {
		assert_eq!(to_planck(U256::from(10u64).pow(U256::from(17))), U256::from(1_000_000_000u64));
		assert_eq!(to_planck(U256::from(99_999_999u64)), U256::ZERO);
	}

	#[test]
	fn test_fee_constants() {
		assert_eq!(PAS_CENTS, 100_000_000);
		assert_eq!(10 * PAS_CENTS, 1_000_000_000);
	}
}
