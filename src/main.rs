mod config;
mod relay;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::HostConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let solver = match relay::HttpSolver::new(&config.solver) {
        Ok(solver) => solver,
        Err(e) => {
            tracing::error!(error = %e, "solver client init failed");
            std::process::exit(1);
        }
    };
    tracing::info!(solver_url = solver.solve_url(), "relaying /solve upstream");

    let state = state::AppState::new(Arc::new(solver));
    let app = match routes::leptos_app(state, config.max_upload_bytes) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "mathsnap listening");
    axum::serve(listener, app).await.expect("server failed");
}
