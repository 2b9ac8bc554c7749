//! Solver page: upload an equation image and show its solution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the upload orchestration. Picking a file starts a new generation,
//! then two independent tasks run under it: the preview read and the
//! `/solve` request. Each reports back through the reducer, which drops
//! whatever arrives for a superseded generation.

use leptos::prelude::*;

use crate::components::result_panels::ResultPanels;
use crate::components::status_line::StatusLine;
use crate::components::upload_panel::UploadPanel;
use crate::config::REVEAL_ANSWER_ON_CLICK;
use crate::state::solver::SolverState;

#[component]
pub fn SolverPage() -> impl IntoView {
    let solver = expect_context::<RwSignal<SolverState>>();

    let on_change = Callback::new(move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        start_upload(&ev, solver);
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, solver);
    });

    view! {
        <main class="solver-page">
            <h1 class="solver-page__title">"Math Equation Solver"</h1>
            <p class="solver-page__subtitle">"Upload an image of your equation to get instant solutions"</p>
            <UploadPanel on_change=on_change/>
            <StatusLine/>
            <ResultPanels gated=REVEAL_ANSWER_ON_CLICK/>
        </main>
    }
}

#[cfg(feature = "hydrate")]
fn start_upload(ev: &leptos::ev::Event, solver: RwSignal<SolverState>) {
    use crate::net::api::{SolveError, submit_equation};
    use crate::state::solver::{SolverAction, dispatch};
    use crate::util::file_preview::read_data_url;

    let input = event_target::<web_sys::HtmlInputElement>(ev);
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };

    let file_name = file.name();
    dispatch(solver, SolverAction::UploadStarted { file_name: file_name.clone() });
    let generation = solver.get_untracked().generation;
    leptos::logging::log!("solve #{generation}: uploading {file_name}");

    let preview_file = file.clone();
    leptos::task::spawn_local(async move {
        match read_data_url(&preview_file).await {
            Ok(data_url) => dispatch(solver, SolverAction::PreviewLoaded { generation, data_url }),
            Err(e) => leptos::logging::warn!("solve #{generation}: preview failed: {e}"),
        }
    });

    leptos::task::spawn_local(async move {
        match submit_equation(&file).await {
            Ok(solution) => {
                leptos::logging::log!("solve #{generation}: {} steps", solution.steps.len());
                dispatch(solver, SolverAction::Solved { generation, solution });
            }
            Err(error) => {
                match &error {
                    SolveError::Service(message) => {
                        leptos::logging::warn!("solve #{generation}: server error: {message}");
                    }
                    SolveError::Transport(detail) => {
                        leptos::logging::warn!("solve #{generation}: request failed: {detail}");
                    }
                }
                dispatch(solver, SolverAction::Failed { generation, error });
            }
        }
    });
}
