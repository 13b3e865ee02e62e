//! Render-time projections of domain types.
//!
//! The store keeps the claim ledger only; everything the page needs
//! (fullness, claimant labels, "mine" flags) is projected here per request
//! instead of being mirrored into stored columns.

use everafter_core::{CashGoal, Gift, GuestId, capacity};

/// A gift as the signed-in (or anonymous) viewer sees it.
#[derive(Debug, Clone)]
pub struct GiftView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub claimed: usize,
    pub capacity: usize,
    pub is_full: bool,
    /// Public labels of the claimants, anonymity applied.
    pub claimants: Vec<String>,
    /// Whether the viewer holds one of the claims.
    pub mine: bool,
}

impl GiftView {
    /// Project a stored gift for the given viewer.
    #[must_use]
    pub fn project(gift: &Gift, viewer: Option<&GuestId>) -> Self {
        let claimants = gift.claims.iter().map(|c| c.public_name().to_string()).collect();
        let mine = viewer.is_some_and(|id| gift.claim_by(id).is_some());
        Self {
            id: gift.id.to_string(),
            name: gift.name.clone(),
            description: gift.description.clone(),
            image_url: gift.image_url.clone(),
            category: gift.category.clone(),
            claimed: gift.claims.len(),
            capacity: capacity(gift.max_quantity),
            is_full: gift.is_full(),
            claimants,
            mine,
        }
    }

    /// Slots still open on this gift.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.claimed)
    }
}

/// A cash goal with its progress precomputed for the tracker bar.
///
/// Amounts stay raw whole reais; the template formats them with the `brl`
/// filter.
#[derive(Debug, Clone)]
pub struct GoalView {
    pub id: String,
    pub title: String,
    pub target: i64,
    pub current: i64,
    pub percent: u8,
}

impl From<&CashGoal> for GoalView {
    fn from(goal: &CashGoal) -> Self {
        Self {
            id: goal.id.to_string(),
            title: goal.title.clone(),
            target: goal.target_amount.as_i64(),
            current: goal.current_amount.as_i64(),
            percent: goal.progress_percent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use everafter_core::{Claim, GiftId};

    fn gift_with_claims(max_quantity: i32, claims: Vec<Claim>) -> Gift {
        Gift {
            id: GiftId::new("cb-2"),
            name: "Jogo de Cama Queen".to_owned(),
            description: "Toque macio de 600 fios.".to_owned(),
            image_url: "https://example.com/cama.jpg".to_owned(),
            category: "Cama & Banho".to_owned(),
            max_quantity,
            claims,
        }
    }

    fn claim(guest_id: &str, name: &str, anonymous: bool) -> Claim {
        Claim {
            guest_id: GuestId::new(guest_id),
            guest_name: name.to_owned(),
            is_anonymous: anonymous,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_projection_applies_anonymity() {
        let gift = gift_with_claims(4, vec![claim("g-1", "Ana", false), claim("g-2", "Rui", true)]);
        let view = GiftView::project(&gift, None);
        assert_eq!(view.claimants, vec!["Ana".to_owned(), "Anônimo".to_owned()]);
        assert_eq!(view.claimed, 2);
        assert_eq!(view.remaining(), 2);
        assert!(!view.is_full);
    }

    #[test]
    fn test_projection_marks_viewers_claim() {
        let gift = gift_with_claims(1, vec![claim("g-1", "Ana", false)]);
        let viewer = GuestId::new("g-1");
        assert!(GiftView::project(&gift, Some(&viewer)).mine);
        assert!(!GiftView::project(&gift, Some(&GuestId::new("g-2"))).mine);
        assert!(GiftView::project(&gift, Some(&viewer)).is_full);
    }

    #[test]
    fn test_goal_view_percent() {
        let goal = CashGoal {
            id: everafter_core::GoalId::new("honeymoon_goal"),
            title: "Lua de Mel".to_owned(),
            target_amount: everafter_core::Reais::new(8_000),
            current_amount: everafter_core::Reais::new(4_200),
        };
        let view = GoalView::from(&goal);
        assert_eq!(view.percent, 52);
    }
}
