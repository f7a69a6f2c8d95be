//! Scripted provider double for the state machine tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::api::ApiError;
use crate::models::{Breed, BreedImage};
use crate::repository::BreedProvider;

/// Provider double that pops one scripted result per call, counts calls,
/// and optionally delays each response to keep loads observably in flight.
/// An exhausted script answers with an empty success.
pub(crate) struct ScriptedProvider {
    breeds_results: Mutex<VecDeque<Result<Vec<Breed>, ApiError>>>,
    image_results: Mutex<VecDeque<Result<Vec<BreedImage>, ApiError>>>,
    breeds_calls: AtomicUsize,
    image_requests: Mutex<Vec<(String, u32)>>,
    delay: Option<Duration>,
}

impl ScriptedProvider {
    pub(crate) fn new() -> Self {
        Self {
            breeds_results: Mutex::new(VecDeque::new()),
            image_results: Mutex::new(VecDeque::new()),
            breeds_calls: AtomicUsize::new(0),
            image_requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    pub(crate) fn script_breeds(self, result: Result<Vec<Breed>, ApiError>) -> Self {
        self.breeds_results.lock().push_back(result);
        self
    }

    pub(crate) fn script_images(self, result: Result<Vec<BreedImage>, ApiError>) -> Self {
        self.image_results.lock().push_back(result);
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn breeds_calls(&self) -> usize {
        self.breeds_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn image_calls(&self) -> usize {
        self.image_requests.lock().len()
    }

    pub(crate) fn image_requests(&self) -> Vec<(String, u32)> {
        self.image_requests.lock().clone()
    }
}

#[async_trait]
impl BreedProvider for ScriptedProvider {
    async fn fetch_breeds(&self) -> Result<Vec<Breed>, ApiError> {
        self.breeds_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.breeds_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_random_images(
        &self,
        breed_name: &str,
        count: u32,
    ) -> Result<Vec<BreedImage>, ApiError> {
        self.image_requests
            .lock()
            .push((breed_name.to_string(), count));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.image_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Waits until the observed state satisfies `predicate`, with a test timeout.
pub(crate) async fn wait_until<T, F>(rx: &mut watch::Receiver<T>, predicate: F) -> T
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let state = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(predicate))
        .await
        .expect("timed out waiting for state transition")
        .expect("state machine dropped before reaching the expected state");
    state.clone()
}
