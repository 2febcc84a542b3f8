//! Narrative-specific error types.

use thiserror::Error;
use weatherlab_core::{AppError, NetworkError, ReqwestErrorExt};

#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("Narrative service not configured")]
    NotConfigured,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl NarrativeError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConfigured => "AI explanations are not configured.".to_string(),
            Self::InvalidApiKey => "The AI service rejected the API key. Check settings.".to_string(),
            Self::RateLimited(secs) => {
                format!("The AI service is busy. Please wait {} seconds.", secs)
            }
            Self::ApiError { status, .. } if *status >= 500 => {
                "The AI service is having trouble. Please try again later.".to_string()
            }
            Self::ApiError { .. } => "The AI request failed. Please try again.".to_string(),
            Self::EmptyResponse | Self::Parse(_) => {
                "The AI returned an unexpected answer. Please try again.".to_string()
            }
            Self::Network(_) => "Network error. Check your connection.".to_string(),
        }
    }

    /// Whether this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited(_) => true,
            Self::ApiError { status, .. } => *status >= 500,
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

impl From<NarrativeError> for AppError {
    fn from(err: NarrativeError) -> Self {
        match err {
            NarrativeError::Network(e) => AppError::Network(e.into_network_error()),
            NarrativeError::ApiError { status, message } => {
                AppError::Network(NetworkError::ServerError { status, message })
            }
            NarrativeError::Parse(message) => {
                AppError::Network(NetworkError::InvalidResponse(message))
            }
            other => AppError::Service(other.to_string()),
        }
    }
}
