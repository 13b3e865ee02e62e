//! Cash-contribution goals.

use serde::{Deserialize, Serialize};

use crate::types::{GoalId, Reais};

/// A fundraising target with a manually corrected running total.
///
/// `target_amount` is fixed at seed time. `current_amount` only ever changes
/// through the admin correction path; there is no payment webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CashGoal {
    pub id: GoalId,
    pub title: String,
    pub target_amount: Reais,
    pub current_amount: Reais,
}

impl CashGoal {
    /// Progress towards the target as a whole percentage, clamped to 100.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let target = self.target_amount.as_i64();
        if target <= 0 {
            return 0;
        }
        let current = self.current_amount.as_i64().max(0);
        let pct = current.saturating_mul(100) / target;
        u8::try_from(pct.min(100)).unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(current: i64, target: i64) -> CashGoal {
        CashGoal {
            id: GoalId::new("honeymoon_goal"),
            title: "Lua de Mel".to_owned(),
            target_amount: Reais::new(target),
            current_amount: Reais::new(current),
        }
    }

    #[test]
    fn test_progress_rounds_down() {
        // 4200 / 8000 = 52.5% -> displayed as 52%
        assert_eq!(goal(4_200, 8_000).progress_percent(), 52);
    }

    #[test]
    fn test_progress_clamps_at_100() {
        assert_eq!(goal(9_500, 8_000).progress_percent(), 100);
        assert_eq!(goal(8_000, 8_000).progress_percent(), 100);
    }

    #[test]
    fn test_progress_empty_and_degenerate() {
        assert_eq!(goal(0, 8_000).progress_percent(), 0);
        assert_eq!(goal(-10, 8_000).progress_percent(), 0);
        assert_eq!(goal(100, 0).progress_percent(), 0);
    }
}
