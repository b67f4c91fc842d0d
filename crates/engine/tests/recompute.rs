//! Integration tests for batched wardrobe label reconciliation.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use vestia_core::compatibility::CompatibilityLabel;
use vestia_core::types::DbId;
use vestia_engine::{recompute_wardrobe, InMemoryStore, StoreError};

use common::{bare_garment, garment, spring_warm, winter_cool, FlakyWardrobe, USER_ID};

/// Five garments alternating navy and peach, plus one without colors (6).
async fn wardrobe() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    for id in 1..=5 {
        let g = if id % 2 == 1 {
            garment(id, "#000080", "Marinho")
        } else {
            garment(id, "#FFDAB9", "Pêssego")
        };
        store.insert_garment(g).await;
    }
    store.insert_garment(bare_garment(6)).await;
    store
}

async fn stored_labels(store: &InMemoryStore) -> Vec<(DbId, Option<CompatibilityLabel>)> {
    let mut out = Vec::new();
    for id in 1..=6 {
        let label = store.garment(id).await.and_then(|g| g.chromatic_compatibility);
        out.push((id, label));
    }
    out
}

#[tokio::test]
async fn labels_are_written_in_batches() {
    let store = wardrobe().await;

    let summary = recompute_wardrobe(&*store, USER_ID, Some(&winter_cool()), 4)
        .await
        .unwrap();

    assert_eq!(summary.total, 6);
    assert_eq!(summary.updated, 6);
    assert!(summary.is_complete());
    // 6 garments in batches of 4.
    assert_eq!(store.label_writes(), 2);
    assert_eq!(
        stored_labels(&store).await,
        vec![
            (1, Some(CompatibilityLabel::Ideal)),
            (2, Some(CompatibilityLabel::Neutral)),
            (3, Some(CompatibilityLabel::Ideal)),
            (4, Some(CompatibilityLabel::Neutral)),
            (5, Some(CompatibilityLabel::Ideal)),
            (6, Some(CompatibilityLabel::Unknown)),
        ]
    );
}

#[tokio::test]
async fn zero_batch_size_is_treated_as_one() {
    let store = wardrobe().await;

    let summary = recompute_wardrobe(&*store, USER_ID, Some(&winter_cool()), 0)
        .await
        .unwrap();

    assert_eq!(summary.updated, 6);
    assert_eq!(store.label_writes(), 6);
}

#[tokio::test]
async fn missing_season_writes_unknown_everywhere() {
    let store = wardrobe().await;

    recompute_wardrobe(&*store, USER_ID, None, 10)
        .await
        .unwrap();

    assert!(stored_labels(&store)
        .await
        .iter()
        .all(|(_, l)| *l == Some(CompatibilityLabel::Unknown)));
}

#[tokio::test]
async fn rejected_item_does_not_abort_the_batch() {
    let store = wardrobe().await;
    let mut flaky = FlakyWardrobe::new(store.clone());
    flaky.reject_items.insert(2);

    let summary = recompute_wardrobe(&flaky, USER_ID, Some(&winter_cool()), 10)
        .await
        .unwrap();

    assert_eq!(summary.total, 6);
    assert_eq!(summary.updated, 5);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].garment_id, 2);
    assert_eq!(store.garment(2).await.unwrap().chromatic_compatibility, None);
    assert_eq!(
        store.garment(3).await.unwrap().chromatic_compatibility,
        Some(CompatibilityLabel::Ideal)
    );
}

#[tokio::test]
async fn failed_batch_does_not_abort_the_pass() {
    let store = wardrobe().await;
    let mut flaky = FlakyWardrobe::new(store.clone());
    flaky.reject_batches_with.insert(3);

    let summary = recompute_wardrobe(&flaky, USER_ID, Some(&winter_cool()), 2)
        .await
        .unwrap();

    let failed: Vec<DbId> = summary.failed.iter().map(|f| f.garment_id).collect();
    assert_eq!(failed, vec![3, 4]);
    assert_eq!(summary.updated, 4);
    assert!(summary.failed[0].reason.contains("timed out"));
    assert_eq!(store.garment(3).await.unwrap().chromatic_compatibility, None);
    assert_eq!(
        store.garment(5).await.unwrap().chromatic_compatibility,
        Some(CompatibilityLabel::Ideal)
    );
}

#[tokio::test]
async fn rerun_after_partial_failure_matches_clean_run() {
    let interrupted = wardrobe().await;
    let mut flaky = FlakyWardrobe::new(interrupted.clone());
    flaky.reject_batches_with.insert(5);
    recompute_wardrobe(&flaky, USER_ID, Some(&spring_warm()), 2)
        .await
        .unwrap();
    recompute_wardrobe(&*interrupted, USER_ID, Some(&spring_warm()), 2)
        .await
        .unwrap();

    let clean = wardrobe().await;
    recompute_wardrobe(&*clean, USER_ID, Some(&spring_warm()), 2)
        .await
        .unwrap();

    assert_eq!(stored_labels(&interrupted).await, stored_labels(&clean).await);
}

#[tokio::test]
async fn season_change_overwrites_previous_labels() {
    let store = wardrobe().await;

    recompute_wardrobe(&*store, USER_ID, Some(&winter_cool()), 10)
        .await
        .unwrap();
    recompute_wardrobe(&*store, USER_ID, Some(&spring_warm()), 10)
        .await
        .unwrap();

    let labels = stored_labels(&store).await;
    assert_eq!(labels[0], (1, Some(CompatibilityLabel::Avoid)));
    assert_eq!(labels[1], (2, Some(CompatibilityLabel::Ideal)));
}

#[tokio::test]
async fn listing_failure_fails_the_pass() {
    let store = wardrobe().await;
    let mut flaky = FlakyWardrobe::new(store.clone());
    flaky.fail_listing = true;

    let result = recompute_wardrobe(&flaky, USER_ID, Some(&winter_cool()), 10).await;

    assert_matches!(result, Err(StoreError::Unavailable(_)));
    assert_eq!(store.label_writes(), 0);
}

#[tokio::test]
async fn other_users_garments_are_untouched() {
    let store = wardrobe().await;
    let mut foreign = garment(100, "#000080", "Marinho");
    foreign.user_id = USER_ID + 1;
    store.insert_garment(foreign).await;

    recompute_wardrobe(&*store, USER_ID, Some(&winter_cool()), 10)
        .await
        .unwrap();

    assert_eq!(store.garment(100).await.unwrap().chromatic_compatibility, None);
}
