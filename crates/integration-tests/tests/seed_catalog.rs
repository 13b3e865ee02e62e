//! Integration tests for the static catalog and reconcile diffing.

use chrono::Utc;
use everafter_core::{Claim, Gift, GuestId, display_changes};
use everafter_site::catalog;

#[test]
fn test_catalog_covers_expected_categories() {
    let seeds = catalog::gift_seeds();
    let categories: Vec<&str> = {
        let mut cats: Vec<&str> = seeds.iter().map(|s| s.category.as_str()).collect();
        cats.dedup();
        cats
    };
    assert_eq!(categories, vec!["Cama & Banho", "Casa & Décor", "Cozinha"]);
}

#[test]
fn test_catalog_ids_are_stable_slugs() {
    for seed in catalog::gift_seeds() {
        let id = seed.id.as_str();
        assert!(
            id.starts_with("cb-") || id.starts_with("cd-") || id.starts_with("cz-"),
            "unexpected seed id: {id}"
        );
    }
}

#[test]
fn test_goal_seeds_match_configured_targets() {
    let goals = catalog::goal_seeds();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].id.as_str(), "honeymoon_goal");
    assert_eq!(goals[0].target_amount.as_i64(), 8_000);
    assert_eq!(goals[1].id.as_str(), "photos_goal");
    assert_eq!(goals[1].target_amount.as_i64(), 1_500);
}

#[test]
fn test_reconcile_diff_never_touches_claims() {
    let seed = catalog::gift_seeds().into_iter().next().expect("non-empty catalog");

    // Stored copy drifted in description and carries a live claim
    let stored = Gift {
        id: seed.id.clone(),
        name: seed.name.clone(),
        description: "Texto antigo".to_owned(),
        image_url: seed.image_url.clone(),
        category: seed.category.clone(),
        max_quantity: seed.max_quantity,
        claims: vec![Claim {
            guest_id: GuestId::new("g-1"),
            guest_name: "Ana".to_owned(),
            is_anonymous: false,
            created_at: Utc::now(),
        }],
    };

    let changes = display_changes(&seed, &stored).expect("description drifted");
    assert_eq!(changes.description.as_deref(), Some(seed.description.as_str()));
    assert!(changes.name.is_none());
    assert!(changes.max_quantity.is_none());
}

#[test]
fn test_synced_catalog_produces_no_writes() {
    for seed in catalog::gift_seeds() {
        let stored = Gift {
            id: seed.id.clone(),
            name: seed.name.clone(),
            description: seed.description.clone(),
            image_url: seed.image_url.clone(),
            category: seed.category.clone(),
            max_quantity: seed.max_quantity,
            claims: Vec::new(),
        };
        assert!(display_changes(&seed, &stored).is_none());
    }
}
