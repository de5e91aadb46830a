//! Email-native provenance entries and their canonical content hashes.

mod canonical;
mod entry;

pub use canonical::{canonicalize_body, canonicalize_headers, sha256_hex, Headers};
pub use entry::{RawMessage, ThreadEntry};
