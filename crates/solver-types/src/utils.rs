//! Small helpers shared across the solver crates.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current unix time in seconds.
pub fn current_timestamp() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|d| d.as_secs())
		.unwrap_or_default()
}

/// Truncate a hash or long identifier for display purposes.
///
/// Long values keep the first 6 and last 4 characters, e.g.
/// `"0xa096c418fd1192ba7f5b506beea682a633f9ab82911fa3d7a249b8d80889a0b4"`
/// becomes `"0xa096...a0b4"`. Values of 12 characters or fewer are returned as-is.
pub fn truncate_id(id: &str) -> String {
	if id.len() <= 12 {
		id.to_string()
	} else {
		format!("{}...{}", &id[..6], &id[id.len() - 4..])
	}
}
