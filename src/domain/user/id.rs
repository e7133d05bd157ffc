//! User identifier type
//!
//! Wraps the store's native 12-byte object id. The canonical outward
//! encoding is the 24-character lowercase hex string; [`UserId::parse`]
//! accepts exactly that form and nothing else, so every accepted id
//! round-trips unchanged through [`UserId::to_hex`].

use std::fmt;

use mongodb::bson::oid::ObjectId;

use crate::domain::error::DomainError;

/// Unique identifier of a stored user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(ObjectId);

impl UserId {
    /// Parse the canonical 24-character lowercase hex encoding.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let canonical =
            s.len() == 24 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if !canonical {
            return Err(DomainError::InvalidId(s.to_string()));
        }

        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::InvalidId(s.to_string()))
    }

    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Canonical lowercase hex encoding, the inverse of [`UserId::parse`].
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// The store's native representation.
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for UserId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ── Tests ──────────────────────────────────────────────────────
