//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the `/solve` relay and health check, and stitches them
//! with Leptos SSR rendering of the solver page under a single Axum router.

pub mod solve;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use client::config::SOLVE_ENDPOINT;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Relay and health routes. `max_upload_bytes` caps `/solve` request bodies.
pub fn api_routes(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(SOLVE_ENDPOINT, post(solve::solve))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full host router: API routes + Leptos SSR page + compiled assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState, max_upload_bytes: usize) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state, max_upload_bytes)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::{ImageUpload, RelayError, SolverUpstream, UpstreamReply};
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct OfflineSolver;

    #[async_trait::async_trait]
    impl SolverUpstream for OfflineSolver {
        async fn solve(&self, _upload: ImageUpload) -> Result<UpstreamReply, RelayError> {
            Err(RelayError::Upstream("offline".into()))
        }
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let app = api_routes(AppState::new(Arc::new(OfflineSolver)), 1024);
        let response = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn solve_only_accepts_post() {
        let app = api_routes(AppState::new(Arc::new(OfflineSolver)), 1024);
        let response = app
            .oneshot(Request::builder().uri("/solve").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
