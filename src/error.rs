//! Unified error types for the DevScout API
//!
//! This module defines error types for each layer:
//! - `GithubError`: GitHub API client errors
//! - `AppError`: Application layer errors (mapped to HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("GitHub error: {0}")]
    Github(#[from] GithubError),

    #[error("Internal server error: {0}")]
    #[allow(dead_code)]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Github(GithubError::RateLimited) => (
                StatusCode::TOO_MANY_REQUESTS,
                "GitHub API rate limit exceeded",
                Some(
                    "Please try again later or configure a GITHUB_TOKEN to raise the limit"
                        .to_string(),
                ),
            ),
            AppError::Github(e) => {
                tracing::error!("GitHub error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GitHub service error",
                    None,
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
