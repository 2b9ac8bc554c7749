//! Image picker with preview.

use leptos::prelude::*;

use crate::config::IMAGE_ACCEPT;
use crate::state::solver::SolverState;

/// Clickable drop area wrapping a hidden file input.
///
/// Shows the picked image once its preview is read, otherwise an upload
/// prompt. File handling is delegated to `on_change`.
#[component]
pub fn UploadPanel(on_change: Callback<leptos::ev::Event>) -> impl IntoView {
    let solver = expect_context::<RwSignal<SolverState>>();

    view! {
        <label for="upload" class="upload">
            {move || match solver.get().preview {
                Some(url) => {
                    view! { <img class="upload__preview" src=url alt="Uploaded equation"/> }.into_any()
                }
                None => {
                    view! {
                        <span class="upload__icon" aria-hidden="true">"+"</span>
                        <span class="upload__title">"Submit Equation"</span>
                        <p class="upload__hint">"Click to upload an image of your math equation"</p>
                    }
                        .into_any()
                }
            }}
            <input
                type="file"
                id="upload"
                class="upload__input"
                accept=IMAGE_ACCEPT
                on:change=move |ev| on_change.run(ev)
            />
        </label>
        {move || {
            solver
                .get()
                .file_name
                .map(|name| view! { <p class="upload__file-name">{name}</p> })
        }}
    }
}
