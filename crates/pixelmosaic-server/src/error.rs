//! Request-level errors and their HTTP mapping.

use axum::extract::multipart::MultipartError;
use axum::http::header::InvalidHeaderValue;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pixelmosaic_core::{PipelineError, PixelateError};
use thiserror::Error;

/// Everything that can end a `/process` request other than success or a
/// rejected upload.
#[derive(Debug, Error)]
pub enum AppError {
    /// The multipart body could not be read.
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    /// A form field is missing or does not parse.
    #[error("invalid form field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// One of the pipeline stages failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// The processed image could not be written.
    #[error("failed to write output: {0}")]
    Storage(#[from] std::io::Error),

    /// The blocking worker panicked or was cancelled.
    #[error("processing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// A response header could not be built.
    #[error("invalid response header: {0}")]
    Header(#[from] InvalidHeaderValue),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Multipart(err) => err.status(),
            AppError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            AppError::Pipeline(PipelineError::Pixelate(PixelateError::Resample(_))) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Pipeline(PipelineError::Pixelate(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Pipeline(PipelineError::Decode(_) | PipelineError::Encode(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Storage(_) | AppError::Task(_) | AppError::Header(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, %status, "request failed");
        } else {
            tracing::warn!(error = %self, %status, "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
