//! Google sign-in routes.

use axum::{
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use everafter_core::normalize_guest_name;

use crate::error::{AppError, Result};
use crate::middleware::auth::{clear_current_guest, set_current_guest};
use crate::models::{CurrentGuest, session_keys};
use crate::services::google::{GoogleAuthError, GoogleAuthService, generate_state};
use crate::state::AppState;

use super::redirect_with_toast;

/// Start the sign-in flow: store the anti-forgery state and send the guest
/// to Google.
#[instrument(skip(state, session))]
pub async fn login(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let oauth_state = generate_state();
    session
        .insert(session_keys::OAUTH_STATE, &oauth_state)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    let service = GoogleAuthService::new(&state.config().google, &state.config().base_url);
    let url = service.authorization_url(&oauth_state)?;
    Ok(Redirect::to(url.as_str()))
}

/// Query parameters Google sends to the callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Finish the sign-in flow: verify state, exchange the code, and store the
/// identity in the session.
#[instrument(skip(state, session, query))]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CallbackQuery>,
) -> Result<Redirect> {
    if let Some(error) = query.error {
        tracing::warn!(%error, "Sign-in cancelled at provider");
        return Ok(redirect_with_toast("Login cancelado.", "err"));
    }

    let stored_state: Option<String> = session
        .remove(session_keys::OAUTH_STATE)
        .await
        .map_err(|e| AppError::Internal(format!("session read failed: {e}")))?;

    match (stored_state, query.state) {
        (Some(expected), Some(got)) if expected == got => {}
        _ => return Err(GoogleAuthError::StateMismatch.into()),
    }

    let code = query
        .code
        .ok_or_else(|| AppError::BadRequest("missing authorization code".to_string()))?;

    let service = GoogleAuthService::new(&state.config().google, &state.config().base_url);
    let identity = service.fetch_identity(&code).await?;

    let guest = CurrentGuest {
        subject: identity.subject,
        name: normalize_guest_name(identity.name.as_deref().unwrap_or_default()),
        email: identity.email,
    };

    tracing::info!(guest_id = %guest.subject, "Guest signed in");
    set_current_guest(&session, &guest)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    Ok(Redirect::to("/#presentes"))
}

/// Sign the guest out.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_guest(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;
    Ok(Redirect::to("/"))
}
