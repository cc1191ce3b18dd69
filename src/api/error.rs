//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::analysis::AnalysisError;
use crate::service::chat::ChatError;

/// Standard error response format
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message, prefixed with the failing stage
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent
/// error handling. Messages identify the failing stage; no internal state
/// beyond the message text is exposed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Analysis stage failure (500)
    #[error("Analysis failed: {0}")]
    Analysis(String),

    /// Detailed chat stage failure (500)
    #[error("Detailed chat failed: {0}")]
    Chat(String),

    /// Follow-up question could not be grounded in a prior evaluation (404)
    #[error("Evaluation not found: {0}")]
    EvaluationNotFound(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EvaluationNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Analysis(_) | ApiError::Chat(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::Analysis(_) => "analysis_error",
            ApiError::Chat(_) => "chat_error",
            ApiError::EvaluationNotFound(_) => "evaluation_not_found",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

// ============================================================================
// From conversions for service errors
// ============================================================================

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        ApiError::Analysis(err.to_string())
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::EvaluationNotFound(detail) => ApiError::EvaluationNotFound(detail),
            ChatError::Completion(e) => ApiError::Chat(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_failure_maps_to_not_found() {
        let api_err: ApiError =
            ChatError::EvaluationNotFound("statement index 3".to_string()).into();
        assert_eq!(api_err.status_code(), StatusCode::NOT_FOUND);
        assert!(api_err.to_string().contains("statement index 3"));
    }

    #[test]
    fn stage_labels_are_distinguishable() {
        let analysis: ApiError = ApiError::Analysis("boom".to_string());
        let chat: ApiError = ApiError::Chat("boom".to_string());
        assert!(analysis.to_string().starts_with("Analysis failed"));
        assert!(chat.to_string().starts_with("Detailed chat failed"));
        assert_eq!(analysis.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
