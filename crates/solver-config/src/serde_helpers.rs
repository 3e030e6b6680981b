//! Serde helpers for configuration deserialization

use alloy::primitives::Address;
use serde::{Deserialize, Deserializer};

/// Deserializes a hex string into an [`Address`].
pub fn deserialize_address<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = String::deserialize(deserializer)?;
	parse_address(&raw).map_err(serde::de::Error::custom)
}

/// Deserializes an optional hex string into an [`Address`].
pub fn deserialize_optional_address<'de, D>(deserializer: D) -> Result<Option<Address>, D::Error>
where
	D: Deserializer<'de>,
{
	Option::<String>::deserialize(deserializer)?
		.map(|raw| parse_address(&raw).map_err(serde::de::Error::custom))
		.transpose()
}

fn parse_address(raw: &str) -> Result<Address, String> {
	if !raw.starts_with("0x") {
		return Err(format!("Invalid address '{}': missing 0x prefix", raw));
	}
	raw.parse::<Address>()
		.map_err(|e| format!("Invalid address '{}': {}", raw, e))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Deserialize)]
	struct TestStruct {
		#[serde(deserialize_with = "deserialize_address")]
		target: Address,
		#[serde(default, deserialize_with = "deserialize_optional_address")]
		extra: Option<Address>,
	}

	#[test]
	fn test_deserialize_address() {
		let parsed: TestStruct =
			toml::from_str(r#"target = "0x7013DC4df91c1A8f0D33d6D6F44310e1565FBb5c""#).unwrap();
		assert_eq!(
			parsed.target,
			"0x7013DC4df91c1A8f0D33d6D6F44310e1565FBb5c"
				.parse::<Address>()
				.unwrap()
		);
		assert_eq!(parsed.extra, None);
	}

	#[test]
	fn test_rejects_bad_addresses() {
		for bad in [
			r#"target = "0x1234""#,
			r#"target = "7013DC4df91c1A8f0D33d6D6F44310e1565FBb5c""#,
			r#"target = "0x0000000000000000000000000000000000000000"
			   extra = "nope""#,
		] {
			assert!(toml::from_str::<TestStruct>(bad).is_err(), "accepted {}", bad);
		}
	}
}
