use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Failure raised while loading or transforming click data. Carried inside
/// the published [`AnalyticsResult`](crate::models::AnalyticsResult) rather
/// than rethrown, so callers must check it before trusting the stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("analytics aggregation failed: {message}")]
pub struct AggregationError {
    pub message: String,
}

impl AggregationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
