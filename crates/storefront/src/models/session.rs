//! Session-related types and helpers.
//!
//! The session carries the shopper's identity so every cart operation is
//! keyed by an explicit shopper rather than a process-wide singleton user.

use tower_sessions::Session;

use tangerine_core::ShopperId;

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the shopper id.
    pub const SHOPPER_ID: &str = "shopper_id";
}

/// Resolve the shopper for this session, minting an id on first contact.
///
/// # Errors
///
/// Returns the session store's error if the session cannot be read or
/// written.
pub async fn current_shopper(session: &Session) -> Result<ShopperId, tower_sessions::session::Error> {
    if let Some(shopper) = session.get::<ShopperId>(keys::SHOPPER_ID).await? {
        return Ok(shopper);
    }

    let shopper = ShopperId::random();
    session.insert(keys::SHOPPER_ID, shopper).await?;
    Ok(shopper)
}
