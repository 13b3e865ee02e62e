//! Authentication extractors.
//!
//! The whole site is public; sign-in only gates the claim buttons and the
//! admin affordances. `RequireAdmin` checks the session identity against the
//! configured allow-list before any store access happens.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentGuest, session_keys};
use crate::state::AppState;

/// Extractor that optionally resolves the signed-in guest.
///
/// Never rejects; anonymous visitors get `None`.
pub struct OptionalGuest(pub Option<CurrentGuest>);

impl<S> FromRequestParts<S> for OptionalGuest
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let guest = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentGuest>(session_keys::CURRENT_GUEST)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(guest))
    }
}

/// Extractor that requires a signed-in guest.
///
/// Unauthenticated requests are redirected to the sign-in flow.
pub struct RequireGuest(pub CurrentGuest);

/// Rejection for guest-gated routes.
pub struct GuestRejection;

impl IntoResponse for GuestRejection {
    fn into_response(self) -> Response {
        Redirect::to("/auth/google/login").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireGuest
where
    S: Send + Sync,
{
    type Rejection = GuestRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().ok_or(GuestRejection)?;

        let guest: CurrentGuest = session
            .get(session_keys::CURRENT_GUEST)
            .await
            .ok()
            .flatten()
            .ok_or(GuestRejection)?;

        Ok(Self(guest))
    }
}

/// Extractor that requires a signed-in guest on the admin allow-list.
pub struct RequireAdmin(pub CurrentGuest);

/// Rejection for admin-gated routes.
pub enum AdminRejection {
    /// Not signed in.
    RedirectToLogin,
    /// Signed in but not on the allow-list.
    Forbidden,
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/google/login").into_response(),
            Self::Forbidden => StatusCode::FORBIDDEN.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AdminRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminRejection::RedirectToLogin)?;

        let guest: CurrentGuest = session
            .get(session_keys::CURRENT_GUEST)
            .await
            .ok()
            .flatten()
            .ok_or(AdminRejection::RedirectToLogin)?;

        if !state.is_admin(&guest.email) {
            return Err(AdminRejection::Forbidden);
        }

        Ok(Self(guest))
    }
}

/// Helper to set the signed-in guest in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_guest(
    session: &Session,
    guest: &CurrentGuest,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_GUEST, guest).await
}

/// Helper to clear the signed-in guest from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_guest(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentGuest>(session_keys::CURRENT_GUEST)
        .await?;
    Ok(())
}
