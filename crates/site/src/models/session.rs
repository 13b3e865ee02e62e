//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use everafter_core::{Email, GuestId};

/// Session-stored guest identity.
///
/// Minimal data kept from the Google sign-in: the stable subject (the claim
/// key), a display name, and the email checked against the admin allow-list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentGuest {
    /// Identity-provider subject, used as the guest id on claims.
    pub subject: GuestId,
    /// Display name shown on claims.
    pub name: String,
    /// Verified email.
    pub email: Email,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the signed-in guest.
    pub const CURRENT_GUEST: &str = "current_guest";

    /// Key for Google OAuth state (CSRF protection).
    pub const OAUTH_STATE: &str = "oauth_state";
}
