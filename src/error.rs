// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for courier
//!
//! Every failure of a service call is classified. Failures that happen after
//! a response arrived carry that response so callers can still look at the
//! status code, headers and raw body.

use thiserror::Error;

use crate::http::ResponseEnvelope;

/// Result type alias for courier operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for courier
#[derive(Error, Debug)]
pub enum Error {
    /// Request body could not be serialized; nothing was sent
    #[error("Encode error: {message}")]
    Encode { message: String },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Custom method is not a valid HTTP token
    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    /// Network or transport failure, no response available
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        timed_out: bool,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Response status outside 2xx
    #[error("Status code not OK: {status}")]
    Status {
        status: u16,
        envelope: Box<ResponseEnvelope>,
    },

    /// Response media type differs from the accept type
    #[error("Expecting Content-Type [{expected}] but got [{received}]")]
    ContentType {
        expected: String,
        received: String,
        envelope: Box<ResponseEnvelope>,
    },

    /// Response body could not be parsed
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        envelope: Option<Box<ResponseEnvelope>>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure classification, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Encode,
    InvalidRequest,
    Transport,
    Status,
    ContentType,
    Decode,
    Config,
}

impl Error {
    /// Create an encode error
    pub fn encode<S: Into<String>>(msg: S) -> Self {
        Error::Encode {
            message: msg.into(),
        }
    }

    /// Create a transport error without an underlying cause
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Error::Transport {
            message: msg.into(),
            timed_out: false,
            source: None,
        }
    }

    /// Create a transport timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Transport {
            message: msg.into(),
            timed_out: true,
            source: None,
        }
    }

    /// Create a decode error that is not tied to a response
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Error::Decode {
            message: msg.into(),
            envelope: None,
        }
    }

    /// Create a decode error carrying the response it came from
    pub fn decode_with_envelope<S: Into<String>>(msg: S, envelope: ResponseEnvelope) -> Self {
        Error::Decode {
            message: msg.into(),
            envelope: Some(Box::new(envelope)),
        }
    }

    /// Create a status error
    pub fn status(envelope: ResponseEnvelope) -> Self {
        Error::Status {
            status: envelope.status_code,
            envelope: Box::new(envelope),
        }
    }

    /// Create a content type error
    pub fn content_type(
        expected: impl Into<String>,
        received: impl Into<String>,
        envelope: ResponseEnvelope,
    ) -> Self {
        Error::ContentType {
            expected: expected.into(),
            received: received.into(),
            envelope: Box::new(envelope),
        }
    }

    /// Failure classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Encode { .. } => ErrorKind::Encode,
            Error::Url(_) | Error::InvalidMethod(_) => ErrorKind::InvalidRequest,
            Error::Transport { .. } => ErrorKind::Transport,
            Error::Status { .. } => ErrorKind::Status,
            Error::ContentType { .. } => ErrorKind::ContentType,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// Response obtained before the failure, if any
    pub fn envelope(&self) -> Option<&ResponseEnvelope> {
        match self {
            Error::Status { envelope, .. } | Error::ContentType { envelope, .. } => {
                Some(envelope)
            }
            Error::Decode { envelope, .. } => envelope.as_deref(),
            _ => None,
        }
    }

    /// Take the attached response out of the error
    pub fn into_envelope(self) -> Option<ResponseEnvelope> {
        match self {
            Error::Status { envelope, .. } | Error::ContentType { envelope, .. } => {
                Some(*envelope)
            }
            Error::Decode { envelope, .. } => envelope.map(|e| *e),
            _ => None,
        }
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            other => other.envelope().map(|e| e.status_code),
        }
    }

    /// Check if this is a transport timeout
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Error::Transport {
                timed_out: true,
                ..
            }
        )
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(s) if (400..500).contains(&s))
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code(), Some(s) if (500..600).contains(&s))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport {
            message: err.to_string(),
            timed_out: err.is_timeout(),
            source: Some(Box::new(err)),
        }
    }
}
