use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use driftwatch_drift::error::DriftError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Drift(#[from] DriftError),
}

impl ServerError {
    /// Input-validity failures are the client's problem; anything else that
    /// escapes the engine is ours.
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Drift(e) => match e {
                DriftError::Config(_)
                | DriftError::Dataset(_)
                | DriftError::EmptyDataset(_)
                | DriftError::SchemaMismatch { .. } => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = json!({
            "status": "error",
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
