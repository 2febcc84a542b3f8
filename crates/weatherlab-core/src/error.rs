//! Centralized error types for WeatherLab.
//!
//! Every error carries a technical `Display` message for logs and a
//! `user_message()` that is safe to show to people using the app.

use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failures reported by a service crate (narratives, simulation) as text.
    #[error("Service error: {0}")]
    Service(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Service(_) => "Something went wrong. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Errors at the network edges: the upstream model API and our own listener.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Could not reach {0}")]
    ConnectionFailed(String),

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Upstream returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Unreadable upstream response: {0}")]
    InvalidResponse(String),

    #[error("Failed to bind {addr}: {message}")]
    BindFailed { addr: String, message: String },
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ConnectionFailed(_) => {
                "The AI service is unreachable. Explanations will use built-in text."
            }
            Self::Timeout => "The AI service took too long to answer.",
            Self::ServerError { status, .. } if *status >= 500 => {
                "The AI service is having trouble. Please try again later."
            }
            Self::ServerError { .. } => "The AI service refused the request.",
            Self::InvalidResponse(_) => "The AI service sent an answer we could not read.",
            Self::BindFailed { .. } => {
                "Could not start the server. Is the port already in use?"
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Classify a reqwest failure as a [`NetworkError`].
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        let detail = self.to_string();
        match self.status() {
            _ if self.is_timeout() => NetworkError::Timeout,
            Some(status) => NetworkError::ServerError {
                status: status.as_u16(),
                message: detail,
            },
            None if self.is_decode() => NetworkError::InvalidResponse(detail),
            None => NetworkError::ConnectionFailed(
                self.url()
                    .and_then(|u| u.host_str().map(str::to_string))
                    .unwrap_or(detail),
            ),
        }
    }
}
