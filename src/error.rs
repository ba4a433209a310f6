//! Error types for the Redmine client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Server-reported rejection messages are kept as an ordered list on the
//! [`Error::Rejected`] variant; they are only joined into a single string by
//! the `Display` implementation.

use thiserror::Error;

/// The main error type for the Redmine client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    // ============================================================================
    // Server Responses
    // ============================================================================
    #[error("Not Found")]
    NotFound,

    #[error("HTTP {status}: {}", .messages.join("\n"))]
    Rejected { status: u16, messages: Vec<String> },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse feed: {0}")]
    Xml(#[from] quick_xml::DeError),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a rejection error from server-reported messages
    pub fn rejected(status: u16, messages: Vec<String>) -> Self {
        Self::Rejected { status, messages }
    }

    /// Create a plain status error for a body with no structured error document
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Check if this error is the distinct not-found case
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// The server-reported messages, if this is a rejection
    pub fn messages(&self) -> Option<&[String]> {
        match self {
            Self::Rejected { messages, .. } => Some(messages),
            _ => None,
        }
    }
}

/// Result type alias for the Redmine client
pub type Result<T> = std::result::Result<T, Error>;
