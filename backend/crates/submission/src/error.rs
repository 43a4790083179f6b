//! Submission Error Types
//!
//! This module provides submission-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Backend failures carry their detail for logging only; `Display` (and
//! therefore the response body) never includes it.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Submission-specific result type alias
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Submission-specific error variants
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// A required form field is absent or blank
    #[error("Missing required field: {0}")]
    MissingFields(&'static str),

    /// A field is present but not acceptable
    #[error("Invalid value for field: {0}")]
    InvalidField(&'static str),

    /// The multipart body could not be read
    #[error("Malformed form data: {0}")]
    MalformedForm(String),

    /// The document exceeds the configured limit
    #[error("Document exceeds the {limit} byte limit")]
    DocumentTooLarge { limit: usize },

    /// The operation needs a platform session and none is available
    #[error("A platform session is required")]
    SessionRequired,

    /// The session token failed verification
    #[error("Session is invalid")]
    InvalidSession,

    /// The token is valid but carries no usable identity
    #[error("Session does not identify a user")]
    UnresolvedIdentity,

    /// This identity already has a submission
    #[error("An application has already been submitted")]
    DuplicateSubmission,

    /// No submission exists for this identity
    #[error("No application found")]
    NotFound,

    /// Blob backend failure
    #[error("Document storage is temporarily unavailable")]
    StorageUnavailable(String),

    /// Record backend failure
    #[error("Application records are temporarily unavailable")]
    PersistenceFailure(String),
}

impl SubmissionError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmissionError::MissingFields(_)
            | SubmissionError::InvalidField(_)
            | SubmissionError::MalformedForm(_) => ErrorKind::BadRequest,
            SubmissionError::DocumentTooLarge { .. } => ErrorKind::PayloadTooLarge,
            SubmissionError::SessionRequired
            | SubmissionError::InvalidSession
            | SubmissionError::UnresolvedIdentity => ErrorKind::Unauthorized,
            SubmissionError::DuplicateSubmission => ErrorKind::Conflict,
            SubmissionError::NotFound => ErrorKind::NotFound,
            SubmissionError::StorageUnavailable(_) | SubmissionError::PersistenceFailure(_) => {
                ErrorKind::ServiceUnavailable
            }
        }
    }

    /// Convert to AppError with a user-facing hint
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            SubmissionError::SessionRequired
            | SubmissionError::InvalidSession
            | SubmissionError::UnresolvedIdentity => {
                err.with_action("Reopen the form from the Telegram app")
            }
            SubmissionError::DuplicateSubmission => {
                err.with_action("Edit your existing application instead")
            }
            SubmissionError::NotFound => err.with_action("Submit an application first"),
            SubmissionError::StorageUnavailable(_) | SubmissionError::PersistenceFailure(_) => {
                err.with_action("Please try again later")
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SubmissionError::StorageUnavailable(detail) => {
                tracing::error!(detail = %detail, "Blob storage failure");
            }
            SubmissionError::PersistenceFailure(detail) => {
                tracing::error!(detail = %detail, "Submission persistence failure");
            }
            SubmissionError::InvalidSession => {
                tracing::warn!("Submission request with invalid session");
            }
            SubmissionError::DuplicateSubmission => {
                tracing::warn!("Duplicate submission attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Submission error");
            }
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for SubmissionError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidSession => SubmissionError::InvalidSession,
            AuthError::NotConfigured => SubmissionError::SessionRequired,
        }
    }
}

impl From<sqlx::Error> for SubmissionError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                SubmissionError::DuplicateSubmission
            }
            _ => SubmissionError::PersistenceFailure(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::StorageUnavailable(err.to_string())
    }
}

impl From<std::io::Error> for SubmissionError {
    fn from(err: std::io::Error) -> Self {
        SubmissionError::StorageUnavailable(err.to_string())
    }
}

impl From<axum::extract::multipart::MultipartError> for SubmissionError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        SubmissionError::MalformedForm(err.body_text())
    }
}
