//! SCALE compact integer encoding.
//!
//! The two low bits of the first byte select the mode:
//! `00` single byte, `01` two bytes, `10` four bytes, `11` big-integer mode
//! where the upper six bits hold the payload length minus four.

use alloy::primitives::U256;

use crate::XcmError;

const SINGLE_BYTE_LIMIT: u64 = 1 << 6;
const TWO_BYTE_LIMIT: u64 = 1 << 14;
const FOUR_BYTE_LIMIT: u64 = 1 << 30;

/// Encodes `value` as a SCALE compact integer.
pub fn encode_compact(value: U256) -> Vec<u8> {
	let mut out = Vec::with_capacity(5);
	encode_into(value, &mut out);
	out
}

/// Appends the compact encoding of `value` to `out`.
pub fn encode_into(value: U256, out: &mut Vec<u8>) {
	let small = u64::try_from(value).ok().filter(|v| *v < FOUR_BYTE_LIMIT);

	match small {
		Some(v) if v < SINGLE_BYTE_LIMIT => out.push((v as u8) << 2),
		Some(v) if v < TWO_BYTE_LIMIT => {
			out.extend_from_slice(&(((v as u16) << 2) | 0b01).to_le_bytes())
		}
		Some(v) => out.extend_from_slice(&(((v as u32) << 2) | 0b10).to_le_bytes()),
		None => {
			let len = value.bit_len().div_ceil(8);
			let bytes = value.to_le_bytes::<32>();
			out.push((((len - 4) as u8) << 2) | 0b11);
			out.extend_from_slice(&bytes[..len]);
		}
	}
}

/// Decodes a compact integer from the front of `data`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode_compact(data: &[u8]) -> Result<(U256, usize), XcmError> {
	let first = *data.first().ok_or(XcmError::UnexpectedEof {
		needed: 1,
		available: 0,
	})?;

	let take = |n: usize| -> Result<&[u8], XcmError> {
		data.get(..n).ok_or(XcmError::UnexpectedEof {
			needed: n,
			available: data.len(),
		})
	};

	match first & 0b11 {
		0b00 => Ok((U256::from(first >> 2), 1)),
		0b01 => {
			let raw = take(2)?;
			let v = u16::from_le_bytes([raw[0], raw[1]]) >> 2;
			Ok((U256::from(v), 2))
		}
		0b10 => {
			let raw = take(4)?;
			let v = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) >> 2;
			Ok((U256::from(v), 4))
		}
		_ => {
			let len = (first >> 2) as usize + 4;
			if len > 32 {
				return Err(XcmError::Overflow(len));
			}
			let raw = take(1 + len)?;
			let value = U256::try_from_le_slice(&raw[1..]).ok_or(XcmError::Overflow(len))?;
			Ok((value, 1 + len))
		}
	}
}
