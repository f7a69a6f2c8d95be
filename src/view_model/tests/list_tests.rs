//! Tests for the breed list state machine.

use std::sync::Arc;
use std::time::Duration;

use super::support::{wait_until, ScriptedProvider};
use crate::api::ApiError;
use crate::models::Breed;
use crate::view_model::{BreedListState, BreedListViewModel};

fn sample_breeds() -> Vec<Breed> {
    vec![
        Breed::new("beagle", Vec::new()),
        Breed::new("bulldog", vec!["french".to_string()]),
    ]
}

// ── state accessors ──────────────────────────────────────────────────

#[test]
fn state_accessors_cover_every_variant() {
    assert!(BreedListState::Loading.is_loading());
    assert!(!BreedListState::Idle.is_loading());

    let loaded = BreedListState::Loaded(sample_breeds());
    assert_eq!(loaded.breeds().len(), 2);
    assert!(loaded.error_message().is_none());

    let error = BreedListState::Error("something broke".to_string());
    assert!(error.breeds().is_empty());
    assert_eq!(error.error_message(), Some("something broke"));
}

// ── transitions ──────────────────────────────────────────────────────

#[tokio::test]
async fn loads_automatically_on_creation() {
    let provider = Arc::new(ScriptedProvider::new().script_breeds(Ok(sample_breeds())));
    let view_model = BreedListViewModel::new(provider.clone());

    let mut rx = view_model.subscribe();
    let state = wait_until(&mut rx, |s| !matches!(s, BreedListState::Idle | BreedListState::Loading)).await;

    assert_eq!(state.breeds().len(), 2);
    assert_eq!(provider.breeds_calls(), 1);
}

#[tokio::test]
async fn failure_transitions_to_error_with_description() {
    let provider = Arc::new(ScriptedProvider::new().script_breeds(Err(ApiError::Http(500))));
    let view_model = BreedListViewModel::new(provider);

    let mut rx = view_model.subscribe();
    let state = wait_until(&mut rx, |s| matches!(s, BreedListState::Error(_))).await;

    assert_eq!(state.error_message(), Some("HTTP error with status code: 500"));
}

#[tokio::test]
async fn load_while_loading_is_single_flight() {
    let provider = Arc::new(
        ScriptedProvider::new()
            .script_breeds(Ok(sample_breeds()))
            .with_delay(Duration::from_millis(150)),
    );
    let view_model = BreedListViewModel::new(provider.clone());
    assert!(view_model.state().is_loading());

    // All of these must be ignored while the initial load is in flight.
    view_model.load_breeds();
    view_model.refresh();
    view_model.retry_loading();

    let mut rx = view_model.subscribe();
    let state = wait_until(&mut rx, |s| matches!(s, BreedListState::Loaded(_))).await;

    assert_eq!(state.breeds().len(), 2);
    assert_eq!(provider.breeds_calls(), 1);
}

#[tokio::test]
async fn retry_after_error_issues_new_fetch() {
    let provider = Arc::new(
        ScriptedProvider::new()
            .script_breeds(Err(ApiError::NoData))
            .script_breeds(Ok(sample_breeds())),
    );
    let view_model = BreedListViewModel::new(provider.clone());

    let mut rx = view_model.subscribe();
    wait_until(&mut rx, |s| matches!(s, BreedListState::Error(_))).await;

    view_model.retry_loading();
    let state = wait_until(&mut rx, |s| matches!(s, BreedListState::Loaded(_))).await;

    assert_eq!(state.breeds().len(), 2);
    assert_eq!(provider.breeds_calls(), 2);
}

#[tokio::test]
async fn refresh_after_loaded_reloads() {
    let provider = Arc::new(
        ScriptedProvider::new()
            .script_breeds(Ok(vec![Breed::new("beagle", Vec::new())]))
            .script_breeds(Ok(sample_breeds())),
    );
    let view_model = BreedListViewModel::new(provider.clone());

    let mut rx = view_model.subscribe();
    wait_until(&mut rx, |s| matches!(s, BreedListState::Loaded(_))).await;

    view_model.refresh();
    let state = wait_until(&mut rx, |s| s.breeds().len() == 2).await;

    assert_eq!(state.breeds().len(), 2);
    assert_eq!(provider.breeds_calls(), 2);
}

#[tokio::test]
async fn dropped_machine_commits_nothing() {
    let provider = Arc::new(
        ScriptedProvider::new()
            .script_breeds(Ok(sample_breeds()))
            .with_delay(Duration::from_millis(150)),
    );
    let view_model = BreedListViewModel::new(provider.clone());
    let rx = view_model.subscribe();

    drop(view_model);
    tokio::time::sleep(Duration::from_millis(400)).await;

    // The in-flight task observed the cancellation flag and discarded its
    // result, so the last published state is still Loading.
    assert!(rx.borrow().is_loading());
    assert_eq!(provider.breeds_calls(), 1);
}
