// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for event contract, bus and bootstrap operations

use thiserror::Error;

use crate::domain::EventType;

/// Errors that can occur while building, publishing or routing events
#[derive(Debug, Error)]
pub enum AgieError {
    /// Topic string or one of its segments is not part of the taxonomy
    #[error("Invalid topic: {0}")]
    InvalidTopic(String),

    /// Envelope does not carry the snapshots its event type requires
    #[error("Event convention violated for '{event_type}' event: {reason}")]
    ConventionViolation {
        /// Event type of the offending envelope
        event_type: EventType,
        /// Which snapshot was missing or unexpected
        reason: String,
    },

    /// Bus connection error
    #[error("Bus connection error: {0}")]
    Connection(String),

    /// Bus publish error
    #[error("Bus publish error: {0}")]
    Publish(String),

    /// Bus subscribe error
    #[error("Bus subscribe error: {0}")]
    Subscribe(String),

    /// Event handler failed
    #[error("Handler error: {0}")]
    Handler(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Required remote parameter does not exist
    #[error(
        "Parameter {path} not found. Either ENVIRONMENT / AWS_REGION is incorrect, \
         or the AWS credentials being used are invalid."
    )]
    MissingParameter {
        /// Full parameter path that was looked up
        path: String,
    },

    /// Parameter store request failed for a reason other than absence
    #[error("Parameter store error: {0}")]
    ParameterStore(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for event operations
pub type AgieResult<T> = Result<T, AgieError>;

impl From<serde_json::Error> for AgieError {
    fn from(err: serde_json::Error) -> Self {
        AgieError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AgieError {
    fn from(err: std::io::Error) -> Self {
        AgieError::Io(err.to_string())
    }
}

#[cfg(feature = "nats")]
impl From<async_nats::Error> for AgieError {
    fn from(err: async_nats::Error) -> Self {
        AgieError::Connection(err.to_string())
    }
}
