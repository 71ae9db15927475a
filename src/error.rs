//! Error types for configuration and control.
//!
//! The realtime fill path has no failure modes; everything here is raised on
//! the control thread before a value ever reaches the audio callback.

use thiserror::Error;

/// Errors when building a generator from settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sample rate must be finite and positive, got {0}")]
    InvalidSampleRate(f64),

    #[error("frequency must be finite, got {0}")]
    NonFiniteFrequency(f64),
}

/// Errors when changing a parameter on a running generator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlError {
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },

    #[error("frequency must be finite, got {0}")]
    NonFiniteFrequency(f64),

    #[error("control queue is full")]
    QueueFull,
}
