//! Integration tests for cash goal progress and money formatting.

use everafter_core::{CashGoal, GoalId, Reais};
use everafter_site::models::GoalView;

fn goal(current: i64, target: i64) -> CashGoal {
    CashGoal {
        id: GoalId::new("honeymoon_goal"),
        title: "Lua de Mel".to_owned(),
        target_amount: Reais::new(target),
        current_amount: Reais::new(current),
    }
}

#[test]
fn test_tracker_shows_floor_percentage() {
    // 4200 of 8000 renders as 52%, never 53%
    let view = GoalView::from(&goal(4_200, 8_000));
    assert_eq!(view.percent, 52);
    assert_eq!(Reais::new(view.current).format_brl(), "R$ 4.200");
    assert_eq!(Reais::new(view.target).format_brl(), "R$ 8.000");
}

#[test]
fn test_tracker_clamps_over_target() {
    assert_eq!(GoalView::from(&goal(9_999, 8_000)).percent, 100);
}

#[test]
fn test_tracker_handles_fresh_goal() {
    let view = GoalView::from(&goal(0, 1_500));
    assert_eq!(view.percent, 0);
    assert_eq!(view.current, 0);
}

#[test]
fn test_brl_grouping() {
    assert_eq!(Reais::new(1_500).format_brl(), "R$ 1.500");
    assert_eq!(Reais::new(999).format_brl(), "R$ 999");
    assert_eq!(Reais::new(1_234_567).format_brl(), "R$ 1.234.567");
}
