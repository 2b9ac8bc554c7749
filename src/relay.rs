//! Relay of equation uploads to the upstream solving service.
//!
//! DESIGN
//! ======
//! The host never solves anything itself. `/solve` uploads are repackaged
//! as a fresh multipart request and forwarded; the upstream status and JSON
//! body go back to the page untouched. The upstream sits behind
//! `SolverUpstream` so routes can run against a mock.

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;

use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use client::config::UPLOAD_FIELD;

use crate::config::SolverConfig;

/// An image received from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Upstream answer, relayed as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: serde_json::Value,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("No image file provided")]
    MissingImage,
    #[error("No file selected")]
    EmptyFilename,
    #[error("invalid upload: {message}")]
    Multipart { status: StatusCode, message: String },
    #[error("solver unavailable: {0}")]
    Upstream(String),
    #[error("solver returned an unreadable response: {0}")]
    UpstreamBody(String),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingImage | Self::EmptyFilename => StatusCode::BAD_REQUEST,
            Self::Multipart { status, .. } => *status,
            Self::Upstream(_) | Self::UpstreamBody(_) => StatusCode::BAD_GATEWAY,
            Self::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// The solving service as seen by the host.
#[async_trait::async_trait]
pub trait SolverUpstream: Send + Sync {
    async fn solve(&self, upload: ImageUpload) -> Result<UpstreamReply, RelayError>;
}

/// `SolverUpstream` over HTTP.
pub struct HttpSolver {
    http: reqwest::Client,
    solve_url: String,
}

impl HttpSolver {
    pub fn new(config: &SolverConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, solve_url: format!("{}/solve", config.base_url) })
    }

    pub fn solve_url(&self) -> &str {
        &self.solve_url
    }
}

#[async_trait::async_trait]
impl SolverUpstream for HttpSolver {
    async fn solve(&self, upload: ImageUpload) -> Result<UpstreamReply, RelayError> {
        let mut part = reqwest::multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part.mime_str(content_type).map_err(|e| RelayError::Multipart {
                status: StatusCode::BAD_REQUEST,
                message: format!("content type {content_type}: {e}"),
            })?;
        }
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        let resp = self
            .http
            .post(&self.solve_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| RelayError::UpstreamBody(e.to_string()))?;

        Ok(UpstreamReply { status, body })
    }
}
