//! Error handling for the hashing engine
//! 
//! This module defines the error types used throughout the engine.

use thiserror::Error;

/// Input validation failures that carry user-visible meaning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Argon2 requires a salt. Please provide one in the salt field.")]
    MissingSalt,

    /// The `argon2` provider refuses salts under 8 bytes, so shorter
    /// non-empty salts cannot be derived with at all.
    #[error("Argon2 requires a salt of at least {min} bytes, got {len}")]
    SaltTooShort { len: usize, min: usize },
}

/// Engine error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Coordinator busy: {0}")]
    Busy(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Create a cryptographic error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a busy error
    pub fn busy(message: impl Into<String>) -> Self {
        Self::Busy(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// True for failures the caller should present to the user as a message.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for HashError {
    fn from(err: std::io::Error) -> Self {
        Self::config(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for HashError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(format!("JSON error: {}", err))
    }
}

impl From<tokio::task::JoinError> for HashError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Task join error: {}", err))
    }
}

impl From<argon2::Error> for HashError {
    fn from(err: argon2::Error) -> Self {
        Self::crypto(format!("Argon2 error: {}", err))
    }
}

impl From<bcrypt::BcryptError> for HashError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::crypto(format!("BCrypt error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_error_creation() {
        let crypto_error = HashError::crypto("Derivation failed");
        let config_error = HashError::config("Invalid configuration");
        let busy_error = HashError::busy("already running");

        assert!(matches!(crypto_error, HashError::Crypto(_)));
        assert!(matches!(config_error, HashError::Config(_)));
        assert!(matches!(busy_error, HashError::Busy(_)));
    }

    #[test]
    fn test_validation_conversion() {
        let error: HashError = ValidationError::MissingSalt.into();
        assert!(error.is_validation());
        assert_eq!(error, HashError::Validation(ValidationError::MissingSalt));
    }

    #[test]
    fn test_error_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: HashError = io_error.into();
        assert!(matches!(error, HashError::Config(_)));

        let argon_error: HashError = argon2::Error::SaltTooShort.into();
        assert!(matches!(argon_error, HashError::Crypto(_)));
        assert!(!argon_error.is_validation());
    }

    #[test]
    fn test_error_display() {
        let error = HashError::from(ValidationError::SaltTooShort { len: 3, min: 8 });
        let display = format!("{}", error);

        assert!(display.contains("Validation error"));
        assert!(display.contains("at least 8 bytes"));
        assert!(display.contains("got 3"));
    }
}
