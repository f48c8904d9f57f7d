//! View-state machine for the amphibians screen.
//!
//! # Design
//! The current `UiState` lives in a `tokio::sync::watch` channel: the view
//! model is the only writer, renderers hold receivers and are pushed every
//! change. `get_amphibians` writes `Loading` before it returns, then spawns
//! the repository call and hands back the task's `JoinHandle`.
//!
//! Every fetch is stamped with a generation number. The bump on start and the
//! check on completion both run inside the watch channel's write lock, so a
//! fetch that finishes after a newer one has started is dropped instead of
//! overwriting fresher state. In-flight fetches are never cancelled.
//! A fetch that panics resolves to `Error` like any other failure.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::repository::AmphibiansRepository;
use crate::state::UiState;

pub struct AmphibiansViewModel {
    inner: Arc<Inner>,
}

struct Inner {
    repository: Arc<dyn AmphibiansRepository>,
    state: watch::Sender<UiState>,
    generation: AtomicU64,
}

impl AmphibiansViewModel {
    /// Create the view model and start the first fetch.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(repository: Arc<dyn AmphibiansRepository>) -> Self {
        let (state, _) = watch::channel(UiState::Loading);
        let view_model = Self {
            inner: Arc::new(Inner {
                repository,
                state,
                generation: AtomicU64::new(0),
            }),
        };
        view_model.get_amphibians();
        view_model
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UiState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.inner.state.subscribe()
    }

    /// Reset to `Loading` and fetch again. Valid from any state.
    pub fn retry(&self) -> JoinHandle<()> {
        self.get_amphibians()
    }

    /// Set `Loading` synchronously, then resolve to `Success` or `Error` once
    /// the repository answers.
    pub fn get_amphibians(&self) -> JoinHandle<()> {
        let mut generation = 0;
        self.inner.state.send_modify(|state| {
            generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = UiState::Loading;
        });
        debug!(generation, "loading amphibians");

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            // Run the fetch as its own task so a panicking repository still
            // resolves the state instead of leaving it `Loading`.
            let repository = Arc::clone(&inner.repository);
            let fetch = tokio::spawn(async move { repository.get_amphibians().await });
            let next = match fetch.await {
                Ok(Ok(amphibians)) => {
                    debug!(generation, count = amphibians.len(), "amphibians loaded");
                    UiState::Success(amphibians)
                }
                Ok(Err(err)) => {
                    warn!(
                        generation,
                        status = err.status(),
                        decode = err.is_decode(),
                        error = %err,
                        "failed to load amphibians"
                    );
                    UiState::Error
                }
                Err(join_err) => {
                    warn!(generation, error = %join_err, "amphibians fetch task failed");
                    UiState::Error
                }
            };
            inner.apply(generation, next);
        })
    }
}

impl Inner {
    fn apply(&self, generation: u64, next: UiState) {
        self.state.send_if_modified(|state| {
            let current = self.generation.load(Ordering::SeqCst);
            if current != generation {
                debug!(generation, current, "discarding stale amphibians result");
                return false;
            }
            *state = next;
            true
        });
    }
}
