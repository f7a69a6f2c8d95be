//! Breed detail screen state machine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, error, info};
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::models::{Breed, BreedImage};
use crate::repository::BreedProvider;

/// Images requested per detail screen load.
const IMAGES_PER_LOAD: u32 = 6;

/// Observable state of the breed detail screen. Exactly one variant at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum BreedDetailState {
    Idle,
    Loading,
    Loaded(Vec<BreedImage>),
    Error(String),
}

impl BreedDetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded images, empty for every other variant.
    pub fn images(&self) -> &[BreedImage] {
        match self {
            Self::Loaded(images) => images,
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

/// Single-flight image loader for one breed's detail screen.
///
/// Owns its `Breed` for the lifetime of the instance; the derived accessors
/// never change. Unlike the list machine it does not load on creation; the
/// screen layer calls [`load_images`](Self::load_images) when it appears.
pub struct BreedDetailViewModel {
    breed: Breed,
    repository: Arc<dyn BreedProvider>,
    state: Arc<watch::Sender<BreedDetailState>>,
    in_flight: Mutex<Option<Arc<AtomicBool>>>,
}

impl BreedDetailViewModel {
    pub fn new(breed: Breed, repository: Arc<dyn BreedProvider>) -> Self {
        let (state, _) = watch::channel(BreedDetailState::Idle);
        Self {
            breed,
            repository,
            state: Arc::new(state),
            in_flight: Mutex::new(None),
        }
    }

    pub fn breed(&self) -> &Breed {
        &self.breed
    }

    pub fn breed_display_name(&self) -> String {
        self.breed.display_name()
    }

    pub fn sub_breeds(&self) -> &[String] {
        &self.breed.sub_breeds
    }

    pub fn has_sub_breeds(&self) -> bool {
        self.breed.has_sub_breeds()
    }

    pub fn sub_breeds_count(&self) -> usize {
        self.breed.sub_breeds_count()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> BreedDetailState {
        self.state.borrow().clone()
    }

    /// Change notifications for the screen layer.
    pub fn subscribe(&self) -> watch::Receiver<BreedDetailState> {
        self.state.subscribe()
    }

    /// Starts a load unless one is already in flight.
    pub fn load_images(&self) {
        if self.state.borrow().is_loading() {
            debug!("Image load for '{}' already in flight, ignoring", self.breed.name);
            return;
        }

        let cancelled = Arc::new(AtomicBool::new(false));
        if let Some(previous) = self.in_flight.lock().replace(Arc::clone(&cancelled)) {
            previous.store(true, Ordering::Relaxed);
        }

        self.state.send_replace(BreedDetailState::Loading);

        let breed_name = self.breed.name.clone();
        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let result = repository
                .fetch_random_images(&breed_name, IMAGES_PER_LOAD)
                .await;
            if cancelled.load(Ordering::Relaxed) {
                debug!("Image load for '{breed_name}' superseded, discarding result");
                return;
            }
            match result {
                Ok(images) => {
                    info!("Loaded {} images for '{breed_name}'", images.len());
                    state.send_replace(BreedDetailState::Loaded(images));
                }
                Err(e) => {
                    error!("Image load for '{breed_name}' failed: {e}");
                    state.send_replace(BreedDetailState::Error(e.to_string()));
                }
            }
        });
    }

    pub fn refresh(&self) {
        self.load_images();
    }

    pub fn retry_loading(&self) {
        self.load_images();
    }
}

impl Drop for BreedDetailViewModel {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.lock().take() {
            task.store(true, Ordering::Relaxed);
        }
    }
}
