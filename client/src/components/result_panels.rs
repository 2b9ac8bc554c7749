//! Equation, answer, and step-by-step panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders nothing until the current upload has a result and no request is
//! pending. The answer can be held behind a reveal button so the user can
//! work the steps first.

use leptos::prelude::*;

use crate::components::math_text::{MathFormula, MathText};
use crate::net::types::SolvedEquation;
use crate::state::solver::{SolverAction, SolverState, dispatch};

/// Result panels for the current upload.
///
/// `gated` hides the answer until the reveal button is clicked.
#[component]
pub fn ResultPanels(gated: bool) -> impl IntoView {
    let solver = expect_context::<RwSignal<SolverState>>();

    let result = move || solver.with(|s| s.visible_result().cloned());
    let answer_visible = move || solver.with(|s| s.answer_visible(gated));
    let on_reveal = move |_| dispatch(solver, SolverAction::RevealAnswer);

    view! {
        {move || {
            result()
                .map(|SolvedEquation { equation, answer, steps }| {
                    view! {
                        <section class="results">
                            <div class="results__row">
                                <div class="panel">
                                    <h2 class="panel__title">"Equation (LaTeX)"</h2>
                                    <MathFormula latex=equation block=true/>
                                </div>
                                <div class="panel">
                                    <h2 class="panel__title">"Final Answer"</h2>
                                    <Show
                                        when=answer_visible
                                        fallback=move || {
                                            view! {
                                                <button class="panel__reveal" type="button" on:click=on_reveal>
                                                    "Reveal answer"
                                                </button>
                                            }
                                        }
                                    >
                                        <div class="panel__answer">
                                            <MathText content=answer.clone()/>
                                        </div>
                                    </Show>
                                </div>
                            </div>
                            <div class="panel panel--steps">
                                <h2 class="panel__title">"Step-by-Step Solution"</h2>
                                <ol class="steps">
                                    {steps
                                        .into_iter()
                                        .map(|step| view! { <li class="steps__item"><MathText content=step/></li> })
                                        .collect::<Vec<_>>()}
                                </ol>
                            </div>
                        </section>
                    }
                })
        }}
    }
}
