//! Strongly-typed record identifier shared across collections.

use core::fmt::Write as _;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::InvalidRecordId;

/// Identifier of a stored record.
///
/// Wire-compatible with the document store's native object ids: exactly 24
/// lowercase hex characters (12 bytes). Payment records reuse the submitting
/// member's id here; user and contact records get a generated one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Build an identifier from raw record-key bytes.
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        let mut hex = String::with_capacity(24);
        for b in bytes {
            let _ = write!(hex, "{b:02x}");
        }
        Self(hex)
    }

    /// Generate a fresh identifier.
    ///
    /// Uses the first 12 bytes of a UUIDv7, which keeps generated ids
    /// time-ordered like the ones the document store mints itself.
    pub fn generate() -> Self {
        let uuid = Uuid::now_v7();
        let mut bytes = [0u8; 12];
        bytes.copy_from_slice(&uuid.as_bytes()[..12]);
        Self::from_bytes(bytes)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = InvalidRecordId;

    /// Accepts exactly 24 hex characters, normalized to lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 24 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidRecordId(s.to_string()));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}
