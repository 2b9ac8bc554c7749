//! Progress and error line under the upload control.

#[cfg(test)]
#[path = "status_line_test.rs"]
mod status_line_test;

use leptos::prelude::*;

use crate::state::solver::SolverState;

/// Text shown while a request is pending.
pub const PROCESSING_TEXT: &str = "Processing equation...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Pending,
    Error,
}

/// Message for the current state, if any.
pub fn status_message(state: &SolverState) -> Option<(StatusKind, String)> {
    if state.loading {
        return Some((StatusKind::Pending, PROCESSING_TEXT.to_owned()));
    }
    state.error.as_ref().map(|e| (StatusKind::Error, e.to_string()))
}

#[component]
pub fn StatusLine() -> impl IntoView {
    let solver = expect_context::<RwSignal<SolverState>>();

    let message = move || {
        status_message(&solver.get()).map(|(kind, message)| {
            let is_error = kind == StatusKind::Error;
            view! {
                <p class="status-line" class:status-line--error=is_error role="status">
                    {message}
                </p>
            }
        })
    };

    view! { {message} }
}
