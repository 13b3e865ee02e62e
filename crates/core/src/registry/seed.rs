//! Seed catalog types and reconcile diffing.
//!
//! The static seed list is the source of truth for display fields only.
//! [`display_changes`] computes the minimal patch between a seed entry and
//! the stored gift; by construction the patch cannot express a change to the
//! claim ledger, so reconciling never clobbers guest state.

use serde::{Deserialize, Serialize};

use crate::registry::gift::Gift;
use crate::types::{GiftId, GoalId, Reais};

/// A statically defined catalog gift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftSeed {
    pub id: GiftId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub max_quantity: i32,
}

/// A statically defined cash goal.
///
/// Only created when absent; existing goals are never patched, since
/// `target_amount` is fixed post-seed and `current_amount` belongs to the
/// admin correction path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSeed {
    pub id: GoalId,
    pub title: String,
    pub target_amount: Reais,
}

/// Display-field patch produced by [`display_changes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiftChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub max_quantity: Option<i32>,
}

impl GiftChanges {
    /// True when the stored gift already matches the seed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
            && self.max_quantity.is_none()
    }
}

/// Field-by-field diff of the display attributes against the seed.
///
/// Returns `None` when nothing differs, so a synced catalog produces zero
/// writes.
#[must_use]
pub fn display_changes(seed: &GiftSeed, existing: &Gift) -> Option<GiftChanges> {
    let mut changes = GiftChanges::default();
    if existing.name != seed.name {
        changes.name = Some(seed.name.clone());
    }
    if existing.description != seed.description {
        changes.description = Some(seed.description.clone());
    }
    if existing.image_url != seed.image_url {
        changes.image_url = Some(seed.image_url.clone());
    }
    if existing.category != seed.category {
        changes.category = Some(seed.category.clone());
    }
    if existing.max_quantity != seed.max_quantity {
        changes.max_quantity = Some(seed.max_quantity);
    }
    if changes.is_empty() { None } else { Some(changes) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::registry::gift::Claim;
    use crate::types::GuestId;
    use chrono::Utc;

    fn seed() -> GiftSeed {
        GiftSeed {
            id: GiftId::new("cz-3"),
            name: "Air Fryer".to_owned(),
            description: "Sabor e saúde.".to_owned(),
            image_url: "https://example.com/airfryer.jpg".to_owned(),
            category: "Cozinha".to_owned(),
            max_quantity: 1,
        }
    }

    fn stored() -> Gift {
        Gift {
            id: GiftId::new("cz-3"),
            name: "Air Fryer".to_owned(),
            description: "Sabor e saúde.".to_owned(),
            image_url: "https://example.com/airfryer.jpg".to_owned(),
            category: "Cozinha".to_owned(),
            max_quantity: 1,
            claims: vec![Claim {
                guest_id: GuestId::new("g-1"),
                guest_name: "Ana".to_owned(),
                is_anonymous: false,
                created_at: Utc::now(),
            }],
        }
    }

    #[test]
    fn test_synced_gift_yields_no_patch() {
        assert!(display_changes(&seed(), &stored()).is_none());
    }

    #[test]
    fn test_patch_contains_only_changed_fields() {
        let mut gift = stored();
        gift.description = "Descrição antiga".to_owned();
        gift.max_quantity = 2;

        let changes = display_changes(&seed(), &gift).unwrap();
        assert_eq!(changes.description.as_deref(), Some("Sabor e saúde."));
        assert_eq!(changes.max_quantity, Some(1));
        assert!(changes.name.is_none());
        assert!(changes.image_url.is_none());
        assert!(changes.category.is_none());
    }

    #[test]
    fn test_diffing_ignores_claims() {
        // A gift differing only in its ledger is considered synced.
        let mut gift = stored();
        gift.claims.clear();
        assert!(display_changes(&seed(), &gift).is_none());
    }
}
