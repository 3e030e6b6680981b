//! XCM instructions used by the solver's transfer programs.
//!
//! Every asset referenced here is the relay chain's native token seen from a
//! parachain (`parents: 1, interior: Here`), fungible, and every deposit
//! selects assets with `Wild(AllCounted(1))`.

use alloy::primitives::{B256, U256};

use crate::compact::encode_into;

const WITHDRAW_ASSET: u8 = 0x00;
const DEPOSIT_RESERVE_ASSET: u8 = 0x09;
const DEPOSIT_ASSET: u8 = 0x0d;
const BUY_EXECUTION: u8 = 0x13;

/// `{ parents: 1, interior: Here }` followed by `Fungible`.
const RELAY_NATIVE_FUNGIBLE: [u8; 3] = [0x01, 0x00, 0x00];
/// `Wild(AllCounted(..))`; the count that follows is a plain little-endian u32.
const WILD_ALL_COUNTED: [u8; 2] = [0x01, 0x01];
/// `{ parents: 0, interior: X1(AccountId32 { network: None, .. }) }`.
const LOCAL_ACCOUNT_ID32: [u8; 4] = [0x00, 0x01, 0x01, 0x00];
/// `{ parents: 1, interior: X1(Parachain(..)) }`.
const SIBLING_PARACHAIN: [u8; 3] = [0x01, 0x01, 0x00];
/// `WeightLimit::Unlimited`.
const UNLIMITED_WEIGHT: u8 = 0x00;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
	/// Move `amount` planck out of the origin's account into the holding register.
	WithdrawAsset { amount: U256 },
	/// Pay for execution with up to `fee` planck, without a weight limit.
	BuyExecution { fee: U256 },
	/// Deposit the held asset into a local 32-byte account.
	DepositAsset { beneficiary: B256 },
	/// Send the held asset to parachain `dest` and run `xcm` there.
	DepositReserveAsset { dest: u32, xcm: Vec<Instruction> },
}

impl Instruction {
	pub fn encode(&self) -> Vec<u8> {
		let mut out = Vec::new();
		self.encode_to(&mut out);
		out
	}

	pub fn encode_to(&self, out: &mut Vec<u8>) {
		match self {
			Self::WithdrawAsset { amount } => {
				out.push(WITHDRAW_ASSET);
				encode_into(U256::from(1u8), out);
				out.extend_from_slice(&RELAY_NATIVE_FUNGIBLE);
				encode_into(*amount, out);
			}
			Self::BuyExecution { fee } => {
				out.push(BUY_EXECUTION);
				out.extend_from_slice(&RELAY_NATIVE_FUNGIBLE);
				encode_into(*fee, out);
				out.push(UNLIMITED_WEIGHT);
			}
			Self::DepositAsset { beneficiary } => {
				out.push(DEPOSIT_ASSET);
				out.extend_from_slice(&WILD_ALL_COUNTED);
				out.extend_from_slice(&1u32.to_le_bytes());
				out.extend_from_slice(&LOCAL_ACCOUNT_ID32);
				out.extend_from_slice(beneficiary.as_slice());
			}
			Self::DepositReserveAsset { dest, xcm } => {
				out.push(DEPOSIT_RESERVE_ASSET);
				out.extend_from_slice(&WILD_ALL_COUNTED);
				out.extend_from_slice(&1u32.to_le_bytes());
				out.extend_from_slice(&SIBLING_PARACHAIN);
				out.extend_from_slice(&dest.to_le_bytes());
				// Nested programs carry no version byte.
				encode_into(U256::from(xcm.len()), out);
				for instruction in xcm {
					instruction.encode_to(out);
				}
			}
		}
	}
}

pub fn encode_withdraw(amount: U256) -> Vec<u8> {
	Instruction::WithdrawAsset { amount }.encode()
}

pub fn encode_buy_execution(fee: U256) -> Vec<u8> {
	Instruction::BuyExecution { fee }.encode()
}

pub fn encode_deposit_local(beneficiary: B256) -> Vec<u8> {
	Instruction::DepositAsset { beneficiary }.encode()
}

pub fn encode_deposit_via_reserve(dest: u32, xcm: Vec<Instruction>) -> Vec<u8> {
	Instruction::DepositReserveAsset { dest, xcm }.encode()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_withdraw_and_buy_execution() {
		let amount = U256::from(1_200_000_000u64);
		assert_eq!(hex::encode(encode_withdraw(amount)), "000401000003008c8647");
		assert_eq!(hex::encode(encode_buy_execution(amount)), "1301000003008c864700");
	}

	#[test]
	fn test_deposit_local() {
		let beneficiary = B256::repeat_byte(0xab);
		let encoded = encode_deposit_local(beneficiary);
		assert_eq!(hex::encode(&encoded[..11]), "0d01010100000000010100");
		assert_eq!(&encoded[11..], beneficiary.as_slice());
		assert_eq!(encoded.len(), 43);
	}

	#[test]
	fn test_deposit_via_reserve_header() {
		let encoded = encode_deposit_via_reserve(2034, Vec::new());
		// 2034 = 0x07f2; empty nested program encodes as compact(0).
		assert_eq!(hex::encode(encoded), "09010101000000010100f207000000");
	}
}
