//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The only shared resource is the upstream solver client.

use std::sync::Arc;

use crate::relay::SolverUpstream;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub solver: Arc<dyn SolverUpstream>,
}

impl AppState {
    #[must_use]
    pub fn new(solver: Arc<dyn SolverUpstream>) -> Self {
        Self { solver }
    }
}
