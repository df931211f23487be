//! On-disk layout of the registry file.
//!
//! ```text
//! ┌────────┬─────────┬────────────┬───────────────────────────────────┐
//! │ "SVRG" │ version │ crc32      │ bincode(Vec<SerializedRegistry…>) │
//! │ 4 B    │ u16 LE  │ u32 LE     │ ...                               │
//! └────────┴─────────┴────────────┴───────────────────────────────────┘
//! ```

use crate::domain::entry::SerializedRegistryEntry;
use crate::domain::errors::PersistenceError;

pub const MAGIC: [u8; 4] = *b"SVRG";
pub const FORMAT_VERSION: u16 = 1;
pub const HEADER_LEN: usize = 10;

/// Encode the full registry file.
pub fn encode(entries: &[SerializedRegistryEntry]) -> Result<Vec<u8>, PersistenceError> {
    let payload =
        bincode::serialize(entries).map_err(|e| PersistenceError::Serialization(e.to_string()))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decode and verify a registry file.
pub fn decode(bytes: &[u8]) -> Result<Vec<SerializedRegistryEntry>, PersistenceError> {
    if bytes.len() < HEADER_LEN {
        return Err(PersistenceError::Corrupt {
            reason: format!("file too short ({} bytes)", bytes.len()),
        });
    }
    let (header, payload) = bytes.split_at(HEADER_LEN);

    if header[0..4] != MAGIC {
        return Err(PersistenceError::Corrupt {
            reason: "bad magic".to_string(),
        });
    }

    let version = u16::from_le_bytes([header[4], header[5]]);
    if version != FORMAT_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }

    let expected = u32::from_le_bytes([header[6], header[7], header[8], header[9]]);
    let actual = crc32fast::hash(payload);
    if expected != actual {
        return Err(PersistenceError::Corrupt {
            reason: format!("checksum mismatch (expected {expected:#010x}, got {actual:#010x})"),
        });
    }

    bincode::deserialize(payload).map_err(|e| PersistenceError::Serialization(e.to_string()))
}
