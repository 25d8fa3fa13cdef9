//! Shopper identity.
//!
//! Shoppers are anonymous: an id is minted on first contact and carried in
//! the session cookie. The newtype keeps shopper ids from being mixed up
//! with item names, which are plain strings owned by the content provider.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque shopper identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopperId(Uuid);

impl ShopperId {
    /// Mint a fresh shopper id.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ShopperId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ShopperId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}
