//! View state for the solver page and the reducer that drives it.
//!
//! DESIGN
//! ======
//! The page keeps one `SolverState` value in a single signal and replaces it
//! wholesale through `reduce`, one action per phase of an upload. Every
//! upload bumps `generation`; previews and replies carry the generation they
//! were issued under, and anything older than the current upload is ignored.

#[cfg(test)]
#[path = "solver_test.rs"]
mod solver_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::SolveError;
use crate::net::types::SolvedEquation;

/// Transient state of the current upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverState {
    /// Identifies the most recent upload.
    pub generation: u64,
    pub file_name: Option<String>,
    /// Data URL of the picked image.
    pub preview: Option<String>,
    pub loading: bool,
    pub result: Option<SolvedEquation>,
    pub error: Option<SolveError>,
    pub answer_revealed: bool,
}

/// One phase transition of the upload cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverAction {
    /// A file was picked; starts a new generation.
    UploadStarted { file_name: String },
    PreviewLoaded { generation: u64, data_url: String },
    Solved { generation: u64, solution: SolvedEquation },
    Failed { generation: u64, error: SolveError },
    /// Show the answer hidden behind the reveal button.
    RevealAnswer,
}

impl SolverState {
    /// Apply `action`, producing the next state.
    #[must_use]
    pub fn reduce(self, action: SolverAction) -> Self {
        match action {
            SolverAction::UploadStarted { file_name } => Self {
                generation: self.generation.wrapping_add(1),
                file_name: Some(file_name),
                loading: true,
                ..Self::default()
            },
            SolverAction::PreviewLoaded { generation, data_url } if self.is_current(generation) => {
                Self { preview: Some(data_url), ..self }
            }
            SolverAction::Solved { generation, solution } if self.is_current(generation) => Self {
                loading: false,
                result: Some(solution),
                error: None,
                ..self
            },
            SolverAction::Failed { generation, error } if self.is_current(generation) => Self {
                loading: false,
                result: None,
                error: Some(error),
                ..self
            },
            SolverAction::RevealAnswer if self.result.is_some() => Self { answer_revealed: true, ..self },
            _ => self,
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Result fields to render, or `None` while a request is pending.
    ///
    /// An empty equation or answer counts as missing. Empty steps do not.
    pub fn visible_result(&self) -> Option<&SolvedEquation> {
        if self.loading {
            return None;
        }
        self.result
            .as_ref()
            .filter(|r| !r.equation.is_empty() && !r.answer.is_empty())
    }

    /// Whether the answer panel should show its text.
    pub fn answer_visible(&self, gated: bool) -> bool {
        !gated || self.answer_revealed
    }
}

/// Reduce the state held in `state` by one action.
pub fn dispatch(state: RwSignal<SolverState>, action: SolverAction) {
    state.update(|s| *s = std::mem::take(s).reduce(action));
}
