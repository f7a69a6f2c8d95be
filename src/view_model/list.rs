//! Breed list screen state machine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, error, info};
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::models::Breed;
use crate::repository::BreedProvider;

/// Observable state of the breed list screen. Exactly one variant at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum BreedListState {
    Idle,
    Loading,
    Loaded(Vec<Breed>),
    Error(String),
}

impl BreedListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded breeds, empty for every other variant.
    pub fn breeds(&self) -> &[Breed] {
        match self {
            Self::Loaded(breeds) => breeds,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Single-flight loader for the breed list.
///
/// Loads automatically on creation, so it must be created inside a Tokio
/// runtime. At most one load task is in flight; superseded or dropped
/// machines flag their task cancelled, and a cancelled task commits nothing.
pub struct BreedListViewModel {
    repository: Arc<dyn BreedProvider>,
    state: Arc<watch::Sender<BreedListState>>,
    in_flight: Mutex<Option<Arc<AtomicBool>>>,
}

impl BreedListViewModel {
    pub fn new(repository: Arc<dyn BreedProvider>) -> Self {
        let (state, _) = watch::channel(BreedListState::Idle);
        let view_model = Self {
            repository,
            state: Arc::new(state),
            in_flight: Mutex::new(None),
        };
        view_model.load_breeds();
        view_model
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> BreedListState {
        self.state.borrow().clone()
    }

    /// Change notifications for the screen layer.
    pub fn subscribe(&self) -> watch::Receiver<BreedListState> {
        self.state.subscribe()
    }

    /// Starts a load unless one is already in flight.
    pub fn load_breeds(&self) {
        if self.state.borrow().is_loading() {
            debug!("Breed list load already in flight, ignoring");
            return;
        }

        let cancelled = Arc::new(AtomicBool::new(false));
        if let Some(previous) = self.in_flight.lock().replace(Arc::clone(&cancelled)) {
            previous.store(true, Ordering::Relaxed);
        }

        self.state.send_replace(BreedListState::Loading);

        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let result = repository.fetch_breeds().await;
            if cancelled.load(Ordering::Relaxed) {
                debug!("Breed list load superseded, discarding result");
                return;
            }
            match result {
                Ok(breeds) => {
                    info!("Breed list loaded with {} breeds", breeds.len());
                    state.send_replace(BreedListState::Loaded(breeds));
                }
                Err(e) => {
                    error!("Breed list load failed: {e}");
                    state.send_replace(BreedListState::Error(e.to_string()));
                }
            }
        });
    }

    pub fn refresh(&self) {
        self.load_breeds();
    }

    pub fn retry_loading(&self) {
        self.load_breeds();
    }
}

impl Drop for BreedListViewModel {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.lock().take() {
            task.store(true, Ordering::Relaxed);
        }
    }
}
