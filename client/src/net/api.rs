//! REST helper for submitting an equation image to `/solve`.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net` with a `FormData`
//! body. Without `hydrate` only the pure response-classification helpers are
//! compiled, which keeps them testable on the host.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into `SolveError` so the page can surface it
//! without panicking. Service-reported messages are kept verbatim; transport
//! and decode failures keep their detail for logging only.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::{ServiceErrorBody, SolveResponse, SolvedEquation};

/// Why a solve request produced no result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The service answered with a non-2xx status.
    #[error("Failed to process equation: {0}")]
    Service(String),
    /// The request never completed or the reply could not be read.
    #[error("Failed to connect to the server.")]
    Transport(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(status: u16) -> String {
    format!("request failed with status {status}")
}

/// Build the error for a non-2xx reply from its status and raw body.
///
/// A body that is not JSON is unreadable, not a service message.
#[cfg(any(test, feature = "hydrate"))]
fn service_error(status: u16, body: &str) -> SolveError {
    let value = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value,
        Err(e) => {
            let status_message = status_failed_message(status);
            return SolveError::Transport(format!("{status_message}: unreadable error body: {e}"));
        }
    };
    let message = serde_json::from_value::<ServiceErrorBody>(value)
        .ok()
        .map(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| status_failed_message(status));
    SolveError::Service(message)
}

/// Decode a 2xx reply body into display fields.
#[cfg(any(test, feature = "hydrate"))]
fn parse_success_body(body: &str) -> Result<SolvedEquation, SolveError> {
    serde_json::from_str::<SolveResponse>(body)
        .map(SolvedEquation::from)
        .map_err(|e| SolveError::Transport(format!("malformed response: {e}")))
}

/// Classify a completed HTTP exchange.
#[cfg(any(test, feature = "hydrate"))]
fn classify_response(ok: bool, status: u16, body: &str) -> Result<SolvedEquation, SolveError> {
    if ok { parse_success_body(body) } else { Err(service_error(status, body)) }
}

#[cfg(feature = "hydrate")]
fn js_transport_error(value: wasm_bindgen::JsValue) -> SolveError {
    SolveError::Transport(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Upload `file` to `POST /solve` as a single-part multipart body.
///
/// # Errors
///
/// Returns `SolveError::Service` for non-2xx replies and
/// `SolveError::Transport` when the request fails or the body is unreadable.
#[cfg(feature = "hydrate")]
pub async fn submit_equation(file: &web_sys::File) -> Result<SolvedEquation, SolveError> {
    use crate::config::{SOLVE_ENDPOINT, UPLOAD_FIELD};

    let form = web_sys::FormData::new().map_err(js_transport_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(js_transport_error)?;

    let resp = gloo_net::http::Request::post(SOLVE_ENDPOINT)
        .body(form)
        .map_err(|e| SolveError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SolveError::Transport(e.to_string()))?;
    let body = resp
        .text()
        .await
        .map_err(|e| SolveError::Transport(e.to_string()))?;
    classify_response(resp.ok(), resp.status(), &body)
}
