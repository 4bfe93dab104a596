//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.
//!
//! `ready` is the page's readiness latch: it flips to true exactly once,
//! after the dataset has been fully published. Effects that guard on it
//! re-run when it flips, and effects registered after the flip observe
//! the current value immediately, so there is no register-before-fire
//! ordering requirement.

use dioxus::prelude::*;
use faw_stats::dataset::FraudDataset;

/// Shared page state for the fraud awareness apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Normalized per-county statistics. Empty until published.
    pub dataset: Signal<FraudDataset>,
    /// Readiness latch: true only after `dataset` is fully populated.
    /// Distinguishes "not ready" from "ready and empty".
    pub ready: Signal<bool>,
    /// Whether the page is still loading.
    pub loading: Signal<bool>,
    /// Error message if something went wrong.
    pub error_msg: Signal<Option<String>>,
    /// The map's active county, at most one at a time.
    pub selected_county: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(FraudDataset::default()),
            ready: Signal::new(false),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_county: Signal::new(None),
        }
    }

    /// Publish the dataset and flip the readiness latch.
    ///
    /// The latch flips at most once per page load; a second publish is
    /// rejected so no renderer can observe a dataset swap.
    pub fn publish(&mut self, dataset: FraudDataset) {
        if *self.ready.peek() {
            log::warn!("dataset already published; ignoring second publish");
            return;
        }
        self.dataset.set(dataset);
        self.ready.set(true);
        self.loading.set(false);
    }

    /// Record a fetch failure: the latch stays unset so the renderers
    /// never run against a dataset that merely looks empty.
    pub fn fail(&mut self, message: String) {
        log::error!("{message}");
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}
