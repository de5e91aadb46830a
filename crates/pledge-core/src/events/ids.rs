use crate::constants::EVENT_ID_HEX_LEN;

use super::RecordKind;

/// Mint a fresh record id: `<prefix>-<16 lowercase hex>`.
///
/// Ids come from a v4 UUID and are never reused within a process.
pub fn new_record_id(kind: RecordKind) -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", kind.id_prefix(), &hex[..EVENT_ID_HEX_LEN])
}
