use super::*;
use crate::config::SolverTimeouts;
use axum::Router;
use axum::extract::Multipart;
use axum::routing::post;
use serde_json::{Value, json};

fn solver_config(base_url: String) -> SolverConfig {
    SolverConfig { base_url, timeouts: SolverTimeouts { request_secs: 5, connect_secs: 2 } }
}

fn upload() -> ImageUpload {
    ImageUpload {
        file_name: "eq.png".into(),
        content_type: Some("image/png".into()),
        bytes: vec![1, 2, 3],
    }
}

async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind upstream");
    let addr = listener.local_addr().expect("upstream addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

/// Echoes what it received as a transcript-shaped reply.
async fn echo_upload(mut multipart: Multipart) -> Json<Value> {
    let field = multipart
        .next_field()
        .await
        .expect("multipart body")
        .expect("one field");
    let name = field.name().unwrap_or_default().to_string();
    let file_name = field.file_name().unwrap_or_default().to_string();
    let content_type = field.content_type().unwrap_or_default().to_string();
    let len = field.bytes().await.expect("field bytes").len();
    Json(json!({ "latex": file_name, "solution": format!("{name}|{content_type}|{len}") }))
}

#[test]
fn relay_error_status_mapping() {
    assert_eq!(RelayError::MissingImage.status(), StatusCode::BAD_REQUEST);
    assert_eq!(RelayError::EmptyFilename.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        RelayError::Multipart { status: StatusCode::PAYLOAD_TOO_LARGE, message: "big".into() }.status(),
        StatusCode::PAYLOAD_TOO_LARGE
    );
    assert_eq!(RelayError::Upstream("down".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(RelayError::UpstreamBody("html".into()).status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn relay_error_messages_match_upload_contract() {
    assert_eq!(RelayError::MissingImage.to_string(), "No image file provided");
    assert_eq!(RelayError::EmptyFilename.to_string(), "No file selected");
}

#[test]
fn http_solver_appends_solve_path() {
    let solver = HttpSolver::new(&solver_config("http://127.0.0.1:5000".into())).unwrap();
    assert_eq!(solver.solve_url(), "http://127.0.0.1:5000/solve");
}

#[tokio::test]
async fn http_solver_forwards_image_field() {
    let base = spawn_upstream(Router::new().route("/solve", post(echo_upload))).await;
    let solver = HttpSolver::new(&solver_config(base)).unwrap();

    let reply = solver.solve(upload()).await.unwrap();
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, json!({ "latex": "eq.png", "solution": "image|image/png|3" }));
}

#[tokio::test]
async fn http_solver_relays_error_status_and_body() {
    let router = Router::new().route(
        "/solve",
        post(|| async {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": "Could not find a formula in the image" })))
        }),
    );
    let base = spawn_upstream(router).await;
    let solver = HttpSolver::new(&solver_config(base)).unwrap();

    let reply = solver.solve(upload()).await.unwrap();
    assert_eq!(reply.status, 400);
    assert_eq!(reply.body["error"], "Could not find a formula in the image");
}

#[tokio::test]
async fn http_solver_reports_non_json_body() {
    let router = Router::new().route("/solve", post(|| async { "plain text" }));
    let base = spawn_upstream(router).await;
    let solver = HttpSolver::new(&solver_config(base)).unwrap();

    let err = solver.solve(upload()).await.unwrap_err();
    assert!(matches!(err, RelayError::UpstreamBody(_)), "got {err:?}");
}

#[tokio::test]
async fn http_solver_reports_unreachable_upstream() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let solver = HttpSolver::new(&solver_config(format!("http://{addr}"))).unwrap();

    let err = solver.solve(upload()).await.unwrap_err();
    assert!(matches!(err, RelayError::Upstream(_)), "got {err:?}");
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
}
