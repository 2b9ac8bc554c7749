//! `POST /solve` relay route.

#[cfg(test)]
#[path = "solve_test.rs"]
mod solve_test;

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use client::config::UPLOAD_FIELD;

use crate::relay::{ImageUpload, RelayError};
use crate::state::AppState;

/// `POST /solve`: forward the uploaded image and relay the solver's reply.
pub async fn solve(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, RelayError> {
    let multipart = multipart.map_err(|rejection| RelayError::Multipart {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;
    let upload = read_image_field(multipart).await?;
    tracing::info!(file = %upload.file_name, bytes = upload.bytes.len(), "relaying solve request");

    let reply = state.solver.solve(upload).await.inspect_err(|e| {
        tracing::warn!(error = %e, "solver relay failed");
    })?;
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    if !status.is_success() {
        tracing::info!(%status, "solver reported failure");
    }
    Ok((status, Json(reply.body)).into_response())
}

/// Pull the `image` file out of the multipart body, skipping other fields.
async fn read_image_field(mut multipart: Multipart) -> Result<ImageUpload, RelayError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_owned();
        if file_name.is_empty() {
            return Err(RelayError::EmptyFilename);
        }
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok(ImageUpload { file_name, content_type, bytes: bytes.to_vec() });
    }
    Err(RelayError::MissingImage)
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> RelayError {
    RelayError::Multipart { status: err.status(), message: err.body_text() }
}
