//! Gift claim routes and the admin catalog/ledger management routes.
//!
//! All mutations are plain form POSTs answered with a redirect back to the
//! page, carrying a one-shot toast in the query string.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use everafter_core::{ActivityKind, GiftId, GiftSeed, GuestId, normalize_guest_name};

use crate::db::{GiftRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::middleware::auth::{RequireAdmin, RequireGuest};
use crate::state::AppState;

use super::redirect_with_toast;

/// Claim form: an optional display name override and the anonymity checkbox.
#[derive(Debug, Deserialize)]
pub struct ClaimForm {
    pub guest_name: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
}

/// POST /gifts/{id}/claim
#[instrument(skip(state, guest, form))]
pub async fn claim(
    State(state): State<AppState>,
    RequireGuest(guest): RequireGuest,
    Path(gift_id): Path<GiftId>,
    Form(form): Form<ClaimForm>,
) -> Result<Redirect> {
    let display_name = normalize_guest_name(form.guest_name.as_deref().unwrap_or(&guest.name));

    let repo = GiftRepository::new(state.pool());
    let receipt = match repo
        .claim(
            &gift_id,
            guest.subject.clone(),
            &display_name,
            form.anonymous,
            ActivityKind::GiftClaimed,
        )
        .await
    {
        Ok(receipt) => receipt,
        // Refusals are normal page flow, not error responses
        Err(RepositoryError::Registry(e)) => {
            return Ok(redirect_with_toast(&AppError::Registry(e).public_message(), "err"));
        }
        Err(RepositoryError::NotFound) => {
            return Ok(redirect_with_toast("Presente não encontrado.", "err"));
        }
        Err(other) => return Err(other.into()),
    };

    tracing::info!(gift_id = %gift_id, guest_id = %guest.subject, "Gift claimed");

    // Committed; notification delivery is best-effort
    if let Some(mailer) = state.mailer()
        && let Err(e) = mailer
            .send_claim_notification(
                &receipt.gift_name,
                &receipt.claim.guest_name,
                receipt.claim.is_anonymous,
            )
            .await
    {
        tracing::warn!(error = %e, gift_id = %gift_id, "Claim notification failed");
    }

    Ok(redirect_with_toast(
        &format!("Presente marcado: {}", receipt.gift_name),
        "ok",
    ))
}

/// POST /gifts/{id}/unclaim
#[instrument(skip(state, guest))]
pub async fn unclaim(
    State(state): State<AppState>,
    RequireGuest(guest): RequireGuest,
    Path(gift_id): Path<GiftId>,
) -> Result<Redirect> {
    let repo = GiftRepository::new(state.pool());
    match repo.unclaim_self(&gift_id, &guest.subject).await {
        // Unclaiming a gift you never claimed is a silent no-op
        Ok(removed) => {
            if removed.is_some() {
                tracing::info!(gift_id = %gift_id, guest_id = %guest.subject, "Claim removed");
            }
            Ok(redirect_with_toast("Marcação removida.", "ok"))
        }
        Err(RepositoryError::NotFound) => {
            Ok(redirect_with_toast("Presente não encontrado.", "err"))
        }
        Err(other) => Err(other.into()),
    }
}

/// Admin add-gift form.
#[derive(Debug, Deserialize)]
pub struct AddGiftForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub category: String,
    pub max_quantity: Option<i32>,
}

/// POST /admin/gifts
#[instrument(skip(state, form))]
pub async fn add_gift(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Form(form): Form<AddGiftForm>,
) -> Result<Redirect> {
    let name = form.name.trim().to_owned();
    if name.is_empty() {
        return Ok(redirect_with_toast("Informe o nome do item.", "err"));
    }

    let seed = GiftSeed {
        id: GiftId::new(format!("item-{}", Utc::now().timestamp_millis())),
        name,
        description: form.description.trim().to_owned(),
        image_url: form.image_url.trim().to_owned(),
        category: form.category.trim().to_owned(),
        max_quantity: form.max_quantity.unwrap_or(1).max(1),
    };

    GiftRepository::new(state.pool()).add(&seed).await?;
    tracing::info!(gift_id = %seed.id, "Gift added by admin");

    Ok(redirect_with_toast(
        &format!("Item adicionado: {}", seed.name),
        "ok",
    ))
}

/// POST /admin/gifts/{id}/delete
#[instrument(skip(state))]
pub async fn delete_gift(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(gift_id): Path<GiftId>,
) -> Result<Redirect> {
    match GiftRepository::new(state.pool()).delete(&gift_id).await {
        Ok(()) => {
            tracing::info!(gift_id = %gift_id, "Gift deleted by admin");
            Ok(redirect_with_toast("Item removido.", "ok"))
        }
        Err(RepositoryError::NotFound) => {
            Ok(redirect_with_toast("Presente não encontrado.", "err"))
        }
        Err(other) => Err(other.into()),
    }
}

/// POST /admin/gifts/{id}/claims/{index}/remove
#[instrument(skip(state))]
pub async fn remove_claim(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((gift_id, index)): Path<(GiftId, usize)>,
) -> Result<Redirect> {
    match GiftRepository::new(state.pool())
        .remove_claim_at(&gift_id, index)
        .await
    {
        Ok(guest_name) => {
            tracing::info!(gift_id = %gift_id, index, "Claim removed by admin");
            Ok(redirect_with_toast(
                &format!("Marcação de {guest_name} removida."),
                "ok",
            ))
        }
        Err(RepositoryError::NotFound) => {
            Ok(redirect_with_toast("Marcação não encontrada.", "err"))
        }
        Err(other) => Err(other.into()),
    }
}

/// Admin restore-claim form: the name as it appeared in the notification
/// email.
#[derive(Debug, Deserialize)]
pub struct RestoreForm {
    pub guest_name: String,
}

/// POST /admin/gifts/{id}/restore
///
/// Re-enters a claim lost to an accidental removal. The restored entry gets
/// a fresh synthetic guest id, so it never collides with a signed-in guest
/// and counts against capacity like any other claim.
#[instrument(skip(state, form))]
pub async fn restore_claim(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(gift_id): Path<GiftId>,
    Form(form): Form<RestoreForm>,
) -> Result<Redirect> {
    let guest_name = normalize_guest_name(&form.guest_name);

    match GiftRepository::new(state.pool())
        .claim(
            &gift_id,
            GuestId::restored(),
            &guest_name,
            false,
            ActivityKind::ClaimRestored,
        )
        .await
    {
        Ok(receipt) => {
            tracing::info!(gift_id = %gift_id, "Claim restored by admin");
            Ok(redirect_with_toast(
                &format!("Marcação restaurada em {}.", receipt.gift_name),
                "ok",
            ))
        }
        Err(RepositoryError::Registry(e)) => {
            Ok(redirect_with_toast(&AppError::Registry(e).public_message(), "err"))
        }
        Err(RepositoryError::NotFound) => {
            Ok(redirect_with_toast("Presente não encontrado.", "err"))
        }
        Err(other) => Err(other.into()),
    }
}
