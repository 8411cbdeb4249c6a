//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while mounting a component into a [`Scope`](crate::Scope)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    /// A component that needs an ambient context was mounted outside its provider
    #[error("`{consumer}` must be mounted inside a `{provider}`")]
    MissingContext {
        /// The component being mounted
        consumer: &'static str,
        /// The component that provides the context it needs
        provider: &'static str,
    },
}

impl MountError {
    /// Create a MissingContext error
    #[inline]
    pub fn missing_context(consumer: &'static str, provider: &'static str) -> Self {
        Self::MissingContext { consumer, provider }
    }
}

/// Errors raised while loading keymap configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file {path}")]
    Io {
        /// Path that failed
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected shape
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A key string could not be parsed
    #[error("invalid key '{binding}' for command '{command}'")]
    InvalidKey {
        /// Command the binding belongs to
        command: String,
        /// The offending key string
        binding: String,
    },
}

impl ConfigError {
    /// Create an InvalidKey error
    #[inline]
    pub fn invalid_key(command: impl Into<String>, binding: impl Into<String>) -> Self {
        Self::InvalidKey {
            command: command.into(),
            binding: binding.into(),
        }
    }
}
