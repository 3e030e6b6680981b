//! Versioned XCM programs and the two transfer shapes the solver builds.

use alloy::primitives::{Address, B256, U256};

use crate::compact::encode_into;
use crate::{to_planck, Instruction, PAS_CENTS, PAS_UNITS, XCM_V4};

/// Ordered list of instructions executed as one XCM message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XcmProgram {
	pub instructions: Vec<Instruction>,
}

impl XcmProgram {
	pub fn new(instructions: Vec<Instruction>) -> Self {
		Self { instructions }
	}

	/// Encodes as `VersionedXcm::V4`: version byte, compact count, instructions.
	pub fn encode(&self) -> Vec<u8> {
		let mut out = vec![XCM_V4];
		encode_into(U256::from(self.instructions.len()), &mut out);
		for instruction in &self.instructions {
			instruction.encode_to(&mut out);
		}
		out
	}

	/// `0x`-prefixed lowercase hex of [`XcmProgram::encode`].
	pub fn to_hex(&self) -> String {
		format!("0x{}", hex::encode(self.encode()))
	}
}

/// Withdraw, buy execution and deposit into `beneficiary` on the local chain.
///
/// `amount_wei` is in 18-decimal units and is converted to planck; the
/// execution fee is fixed at ten cents.
pub fn build_simple_transfer(amount_wei: U256, beneficiary: &B256) -> String {
	XcmProgram::new(vec![
		Instruction::WithdrawAsset {
			amount: to_planck(amount_wei),
		},
		Instruction::BuyExecution {
			fee: U256::from(10 * PAS_CENTS),
		},
		Instruction::DepositAsset {
			beneficiary: *beneficiary,
		},
	])
	.to_hex()
}

/// Withdraw locally, then forward via the reserve to `dest_para_id`, where the
/// nested program buys execution and deposits into `beneficiary`.
///
/// One unit is budgeted for local execution and ten cents for remote.
pub fn build_cross_chain_transfer(amount_wei: U256, beneficiary: &B256, dest_para_id: u32) -> String {
	XcmProgram::new(vec![
		Instruction::WithdrawAsset {
			amount: to_planck(amount_wei),
		},
		Instruction::BuyExecution {
			fee: U256::from(PAS_UNITS),
		},
		Instruction::DepositReserveAsset {
			dest: dest_para_id,
			xcm: vec![
				Instruction::BuyExecution {
					fee: U256::from(10 * PAS_CENTS),
				},
				Instruction::DepositAsset {
					beneficiary: *beneficiary,
				},
			],
		},
	])
	.to_hex()
}

/// Maps a 20-byte EVM address to a 32-byte account id by left-padding with zeros.
pub fn address_to_account_id(address: Address) -> B256 {
	address.into_word()
}
