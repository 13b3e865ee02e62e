//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - The whole site, one page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database ping)
//!
//! # Auth
//! GET  /auth/google/login      - Redirect to Google sign-in
//! GET  /auth/google/callback   - Handle OAuth callback
//! POST /auth/logout            - Sign out
//!
//! # Registry (requires sign-in)
//! POST /gifts/{id}/claim       - Claim a gift
//! POST /gifts/{id}/unclaim     - Release the caller's own claim
//!
//! # Admin (requires allow-listed sign-in)
//! POST /admin/gifts                              - Add a catalog item
//! POST /admin/gifts/{id}/delete                  - Delete a catalog item
//! POST /admin/gifts/{id}/claims/{index}/remove   - Remove one claim
//! POST /admin/gifts/{id}/restore                 - Restore a lost claim
//! POST /admin/goals/{id}/amount                  - Correct a goal's total
//! ```

pub mod auth;
pub mod goals;
pub mod home;
pub mod registry;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the main application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/auth", auth_routes())
        .nest("/gifts", gift_routes())
        .nest("/admin", admin_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/google/login", get(auth::login))
        .route("/google/callback", get(auth::callback))
        .route("/logout", post(auth::logout))
}

fn gift_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/claim", post(registry::claim))
        .route("/{id}/unclaim", post(registry::unclaim))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/gifts", post(registry::add_gift))
        .route("/gifts/{id}/delete", post(registry::delete_gift))
        .route(
            "/gifts/{id}/claims/{index}/remove",
            post(registry::remove_claim),
        )
        .route("/gifts/{id}/restore", post(registry::restore_claim))
        .route("/goals/{id}/amount", post(goals::set_amount))
}

/// Redirect back to the page with a one-shot toast in the query string.
pub(crate) fn redirect_with_toast(message: &str, kind: &str) -> Redirect {
    let target = format!(
        "/?toast={}&toast_kind={kind}#presentes",
        urlencoding::encode(message)
    );
    Redirect::to(&target)
}
