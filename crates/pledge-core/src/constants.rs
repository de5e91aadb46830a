/// Seconds in one day, used to turn event age into fractional days.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of hex characters kept from a v4 UUID when minting event ids.
pub const EVENT_ID_HEX_LEN: usize = 16;

/// Length of a SHA-256 digest rendered as lowercase hex.
pub const SHA256_HEX_LEN: usize = 64;
