//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{katex_script_url, katex_stylesheet_url};
use crate::pages::solver::SolverPage;
use crate::state::solver::SolverState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Loads KaTeX ahead of the WASM bundle so formulas can typeset as soon as
/// results arrive.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=katex_stylesheet_url()/>
                <script defer src=katex_script_url()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the solver state context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let solver = RwSignal::new(SolverState::default());
    provide_context(solver);

    view! {
        <Stylesheet id="leptos" href="/pkg/mathsnap.css"/>
        <Title text="Math Equation Solver"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SolverPage/>
            </Routes>
        </Router>
    }
}
