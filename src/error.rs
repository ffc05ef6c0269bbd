use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::answer::AnswerError;
use crate::api::ErrorResponse;

pub const MISSING_FIELDS: &str = "Missing question or context.";
pub const LENGTH_MISMATCH: &str = "ground_truth and generated_answers must have the same length.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", MISSING_FIELDS)]
    MissingField,

    #[error("{0}")]
    InvalidBody(String),

    #[error("{}", LENGTH_MISMATCH)]
    LengthMismatch,

    #[error("Failed to answer: {0}")]
    Processing(#[from] AnswerError),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField | AppError::InvalidBody(_) | AppError::LengthMismatch => {
                StatusCode::BAD_REQUEST
            }
            AppError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown answerer backend {0:?}, expected one of: local, bridge, remote")]
    UnknownAnswerer(String),

    #[error("QA_BRIDGE_CMD must be set when QA_ANSWERER=bridge")]
    MissingBridgeCommand,

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
