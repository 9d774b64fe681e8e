//! Commit identifier generation

use uuid::Uuid;

/// Number of hex digits kept from a generated identifier
pub const SHORT_ID_LEN: usize = 8;

/// Source of fresh 128-bit identifiers
pub trait IdentifierSource {
    /// Generate a new identifier
    fn generate(&self) -> Uuid;
}

/// Random (v4) UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdentifierSource for RandomIds {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Render the tracking key for an identifier: its first 8 lowercase hex digits
pub fn short_id(id: &Uuid) -> String {
    let mut hex = id.simple().to_string();
    hex.truncate(SHORT_ID_LEN);
    hex
}
