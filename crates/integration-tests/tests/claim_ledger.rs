//! Integration tests for the claim ledger rules.
//!
//! These exercise the same admission checks the gift repository re-runs
//! under its row lock, including the two-claimants-one-slot race.

use chrono::Utc;
use everafter_core::{
    ActivityKind, Claim, Gift, GiftId, GuestId, RegistryError, admit_claim, apply_claim, capacity,
    latest_claimant, remove_claim_at, remove_guest_claim,
};

fn claim(guest: &str, name: &str) -> Claim {
    Claim {
        guest_id: GuestId::new(guest),
        guest_name: name.to_owned(),
        is_anonymous: false,
        created_at: Utc::now(),
    }
}

fn gift(max_quantity: i32, claims: Vec<Claim>) -> Gift {
    Gift {
        id: GiftId::new("cz-6"),
        name: "Jogo de Panelas".to_owned(),
        description: "Arte culinária.".to_owned(),
        image_url: String::new(),
        category: "Cozinha".to_owned(),
        max_quantity,
        claims,
    }
}

// =============================================================================
// Capacity
// =============================================================================

#[test]
fn test_last_slot_race_is_serialized() {
    // Both guests saw one slot free on the same stale page render. The
    // store serializes the writes; the second re-check runs against the
    // ledger that already holds the winner.
    let mut ledger = vec![claim("g-1", "Ana")];
    let max_quantity = 2;

    let stale_snapshot = ledger.clone();
    assert!(admit_claim(&stale_snapshot, max_quantity, &GuestId::new("g-2")).is_ok());
    assert!(admit_claim(&stale_snapshot, max_quantity, &GuestId::new("g-3")).is_ok());

    apply_claim(&mut ledger, max_quantity, claim("g-2", "Bia")).expect("first writer wins");
    assert_eq!(
        apply_claim(&mut ledger, max_quantity, claim("g-3", "Caio")),
        Err(RegistryError::Capacity)
    );
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_gift_fullness_tracks_capacity() {
    let g = gift(2, vec![claim("g-1", "Ana")]);
    assert!(!g.is_full());
    let g = gift(2, vec![claim("g-1", "Ana"), claim("g-2", "Bia")]);
    assert!(g.is_full());
}

#[test]
fn test_nonpositive_max_quantity_behaves_as_single_slot() {
    assert_eq!(capacity(0), 1);
    assert_eq!(capacity(-3), 1);
    let mut ledger = Vec::new();
    apply_claim(&mut ledger, 0, claim("g-1", "Ana")).expect("one slot available");
    assert_eq!(
        apply_claim(&mut ledger, 0, claim("g-2", "Bia")),
        Err(RegistryError::Capacity)
    );
}

// =============================================================================
// Duplicates and restores
// =============================================================================

#[test]
fn test_one_claim_per_guest_per_gift() {
    let mut ledger = Vec::new();
    apply_claim(&mut ledger, 4, claim("g-1", "Ana")).expect("admitted");
    assert_eq!(
        apply_claim(&mut ledger, 4, claim("g-1", "Ana")),
        Err(RegistryError::AlreadyClaimed)
    );
}

#[test]
fn test_restored_claims_share_a_gift() {
    // Two manual restores of the same emailed name must both land
    let mut ledger = Vec::new();
    for _ in 0..2 {
        let restored = Claim {
            guest_id: GuestId::restored(),
            guest_name: "Tia Márcia".to_owned(),
            is_anonymous: false,
            created_at: Utc::now(),
        };
        assert!(restored.guest_id.is_restored());
        apply_claim(&mut ledger, 3, restored).expect("synthetic ids never collide");
    }
    assert_eq!(ledger.len(), 2);
}

// =============================================================================
// Unclaim flows
// =============================================================================

#[test]
fn test_claim_unclaim_restores_prior_ledger() {
    let before = vec![claim("g-1", "Ana")];
    let mut ledger = before.clone();

    apply_claim(&mut ledger, 3, claim("g-2", "Bia")).expect("admitted");
    let removed = remove_guest_claim(&mut ledger, &GuestId::new("g-2")).expect("present");
    assert_eq!(removed.guest_name, "Bia");
    assert_eq!(ledger, before);
}

#[test]
fn test_unclaim_without_claim_is_noop() {
    let mut ledger = vec![claim("g-1", "Ana")];
    assert!(remove_guest_claim(&mut ledger, &GuestId::new("g-9")).is_none());
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_admin_removal_by_position() {
    let mut ledger = vec![claim("g-1", "Ana"), claim("g-2", "Bia")];
    let removed = remove_claim_at(&mut ledger, 1).expect("in range");
    assert_eq!(removed.guest_name, "Bia");
    assert!(remove_claim_at(&mut ledger, 7).is_none());
    assert_eq!(latest_claimant(&ledger).map(|c| c.guest_name.as_str()), Some("Ana"));
}

#[test]
fn test_freed_slot_admits_a_new_guest() {
    let mut ledger = vec![claim("g-1", "Ana")];
    assert_eq!(
        admit_claim(&ledger, 1, &GuestId::new("g-2")),
        Err(RegistryError::Capacity)
    );
    remove_guest_claim(&mut ledger, &GuestId::new("g-1"));
    apply_claim(&mut ledger, 1, claim("g-2", "Bia")).expect("slot freed");
}

// =============================================================================
// Audit tags
// =============================================================================

#[test]
fn test_activity_tags_are_stable() {
    assert_eq!(ActivityKind::GiftClaimed.tag(), "PRESENTE_MARCADO");
    assert_eq!(ActivityKind::GiftUnclaimed.tag(), "PRESENTE_DESMARCADO");
    assert_eq!(ActivityKind::ClaimRestored.tag(), "MARCACAO_RESTAURADA");
    assert_eq!(ActivityKind::GiftAdded.tag(), "ITEM_ADICIONADO");
    assert_eq!(ActivityKind::GiftDeleted.tag(), "ITEM_REMOVIDO");
    assert_eq!(ActivityKind::GoalUpdated.tag(), "META_ATUALIZADA");
}
