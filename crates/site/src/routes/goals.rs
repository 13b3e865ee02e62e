//! Admin cash-goal correction route.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use everafter_core::{GoalId, Reais};

use crate::db::{GoalRepository, RepositoryError};
use crate::error::Result;
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

use super::redirect_with_toast;

/// Amount form. The raw string is parsed here so junk input can fall back to
/// a toast instead of a 422.
#[derive(Debug, Deserialize)]
pub struct AmountForm {
    pub amount: String,
}

/// POST /admin/goals/{id}/amount
///
/// Overwrites the raised total with the amount the couple reconciled from
/// their bank statement. Whole reais only.
#[instrument(skip(state, form))]
pub async fn set_amount(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(goal_id): Path<GoalId>,
    Form(form): Form<AmountForm>,
) -> Result<Redirect> {
    let Ok(amount) = form.amount.trim().parse::<i64>() else {
        return Ok(redirect_with_toast("Informe um valor em reais.", "err"));
    };
    if amount < 0 {
        return Ok(redirect_with_toast("O valor não pode ser negativo.", "err"));
    }

    match GoalRepository::new(state.pool())
        .set_current_amount(&goal_id, Reais::new(amount))
        .await
    {
        Ok(goal) => {
            tracing::info!(goal_id = %goal.id, amount, "Goal amount corrected");
            Ok(redirect_with_toast(
                &format!("{} atualizada: {}", goal.title, goal.current_amount),
                "ok",
            ))
        }
        Err(RepositoryError::NotFound) => Ok(redirect_with_toast("Meta não encontrada.", "err")),
        Err(other) => Err(other.into()),
    }
}
