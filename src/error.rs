use serde_json::Value;

use crate::api::in_flight::Action;

/// Rejections raised by client-side validation before anything reaches the network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Mood data must be an object")]
    NotAnObject,

    #[error("Primary mood must be a non-empty string")]
    EmptyPrimaryMood,

    #[error("Confidence value is required")]
    MissingConfidence,

    #[error("Invalid confidence value: {0}")]
    InvalidConfidence(String),

    #[error("Confidence must be between 0 and 100, got {0}")]
    ConfidenceOutOfRange(f64),

    #[error("Emotions must be an array")]
    EmotionsNotArray,

    #[error("Each emotion must be a string")]
    EmotionNotString,

    #[error("{0}")]
    Field(String),
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid value for {}", field),
                })
            })
            .collect::<Vec<_>>()
            .join("; ");
        ValidationError::Field(message)
    }
}

/// Coarse classification used by callers deciding how to react to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or expired credentials; the user must sign in again.
    Auth,
    Validation,
    Network,
    Server,
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Session expired. Please log in again.")]
    SessionExpired,

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rejected by server: {0}")]
    Rejected(Value),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("A {0} request is already in progress")]
    Busy(Action),

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Token store error: {0}")]
    TokenStore(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Unauthenticated | AppError::SessionExpired => ErrorKind::Auth,
            AppError::Validation(_) | AppError::Rejected(_) => ErrorKind::Validation,
            AppError::RequestFailed(_) | AppError::Busy(_) => ErrorKind::Network,
            AppError::Server { .. } => ErrorKind::Server,
            AppError::TokenStore(_) | AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// True when the caller should send the user back through sign-in.
    pub fn requires_login(&self) -> bool {
        self.kind() == ErrorKind::Auth
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        tracing::warn!(error = %e, "HTTP request failed");
        AppError::RequestFailed(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
