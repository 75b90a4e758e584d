//! Error types for the Vanii client.

use crate::gateway::envelope::ApiError;

/// Top-level error type for the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Gateway call failures.
///
/// Every failed call maps to exactly one of these. `Api` means the server
/// answered with a non-2xx status and a parseable failure envelope; `Decode`
/// means the body (success or failure) did not match the expected envelope
/// shape. Decode failures are surfaced, never passed through.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Transport failure for {path}: {reason}")]
    Transport { path: String, reason: String },

    #[error("API error: {0}")]
    Api(ApiError),

    #[error("Failed to decode response from {path} (status {status}): {reason}")]
    Decode {
        path: String,
        status: u16,
        reason: String,
    },
}

impl GatewayError {
    /// User-visible message for a failed call, mirroring what the failure
    /// envelope carried when one exists.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(envelope) if !envelope.message.is_empty() => envelope.message.clone(),
            _ => "An unknown error occurred.".to_string(),
        }
    }
}

/// Wizard state machine errors.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Step index {index} out of bounds (wizard has {count} steps)")]
    StepOutOfBounds { index: usize, count: usize },

    #[error("Validation failed for {answer_key}: {message}")]
    Validation { answer_key: String, message: String },
}

/// Headless-content fetch errors. All are retryable by re-running the fetch.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content request failed: {0}")]
    Request(String),

    #[error("Content query returned status {status}")]
    Status { status: u16 },

    #[error("Failed to decode content response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for the client.
pub type Result<T> = std::result::Result<T, Error>;
