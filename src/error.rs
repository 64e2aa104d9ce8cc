//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Error handling for the Google Sheets connector
//!
//! This module provides structured error types with context for every stage
//! of an export: configuration, authentication, and the remote document
//! operations. No error is recovered or retried locally; all of them
//! propagate to the caller.

use std::error::Error as StdError;
use thiserror::Error;

/// Result type for Google Sheets operations
pub type GoogleSheetsResult<T> = Result<T, GoogleSheetsError>;

/// Main error type for the Google Sheets connector
#[derive(Error, Debug)]
pub enum GoogleSheetsError {
    /// Configuration errors
    #[error("Google Sheets configuration error: {message}")]
    Configuration {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Input validation errors
    #[error("Google Sheets validation error: {message}")]
    Validation {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Authentication errors
    #[error("Google Sheets authentication error: {message}")]
    Authentication {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Spreadsheet creation errors
    #[error("Google Sheets creation error: {message}")]
    Create {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Cell write errors
    #[error("Google Sheets write error: {message}")]
    Write {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Sharing errors
    #[error("Google Sheets sharing error: {message}")]
    Share {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Serialization/deserialization errors
    #[error("Google Sheets serialization error: {message}")]
    Serialization {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The export feature gate is off
    #[error("Google Sheets export disabled: {message}")]
    Disabled { message: String },

    /// Internal errors
    #[error("Google Sheets internal error: {message}")]
    Internal {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl GoogleSheetsError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        GoogleSheetsError::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        GoogleSheetsError::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        GoogleSheetsError::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a validation error with source
    pub fn validation_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        GoogleSheetsError::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        GoogleSheetsError::Authentication {
            message: message.into(),
            source: None,
        }
    }

    /// Create an authentication error with source
    pub fn authentication_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        GoogleSheetsError::Authentication {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a spreadsheet creation error
    pub fn create(message: impl Into<String>) -> Self {
        GoogleSheetsError::Create {
            message: message.into(),
            source: None,
        }
    }

    /// Create a spreadsheet creation error with source
    pub fn create_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        GoogleSheetsError::Create {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a write error
    pub fn write(message: impl Into<String>) -> Self {
        GoogleSheetsError::Write {
            message: message.into(),
            source: None,
        }
    }

    /// Create a write error with source
    pub fn write_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        GoogleSheetsError::Write {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a sharing error
    pub fn share(message: impl Into<String>) -> Self {
        GoogleSheetsError::Share {
            message: message.into(),
            source: None,
        }
    }

    /// Create a sharing error with source
    pub fn share_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        GoogleSheetsError::Share {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        GoogleSheetsError::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Create a serialization error with source
    pub fn serialization_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        GoogleSheetsError::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a feature-disabled error
    pub fn disabled(message: impl Into<String>) -> Self {
        GoogleSheetsError::Disabled {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        GoogleSheetsError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error with source
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        GoogleSheetsError::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if the error indicates a deployment problem that must be fixed
    /// before the feature is usable at all
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            GoogleSheetsError::Configuration { .. }
                | GoogleSheetsError::Validation { .. }
                | GoogleSheetsError::Serialization { .. }
                | GoogleSheetsError::Disabled { .. }
        )
    }

    /// Get the error type as a string
    pub fn error_type(&self) -> &'static str {
        match self {
            GoogleSheetsError::Configuration { .. } => "configuration",
            GoogleSheetsError::Validation { .. } => "validation",
            GoogleSheetsError::Authentication { .. } => "authentication",
            GoogleSheetsError::Create { .. } => "create",
            GoogleSheetsError::Write { .. } => "write",
            GoogleSheetsError::Share { .. } => "share",
            GoogleSheetsError::Serialization { .. } => "serialization",
            GoogleSheetsError::Disabled { .. } => "disabled",
            GoogleSheetsError::Internal { .. } => "internal",
        }
    }
}

/// Error conversion traits for common error types
impl From<std::io::Error> for GoogleSheetsError {
    fn from(err: std::io::Error) -> Self {
        GoogleSheetsError::configuration_with_source("IO error", err)
    }
}

impl From<serde_json::Error> for GoogleSheetsError {
    fn from(err: serde_json::Error) -> Self {
        GoogleSheetsError::serialization_with_source("JSON serialization error", err)
    }
}

impl From<validator::ValidationErrors> for GoogleSheetsError {
    fn from(err: validator::ValidationErrors) -> Self {
        GoogleSheetsError::validation_with_source("Configuration validation failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = GoogleSheetsError::configuration("test error");
        assert!(matches!(error, GoogleSheetsError::Configuration { .. }));
        assert!(error.is_permanent());
        assert_eq!(error.error_type(), "configuration");
    }

    #[test]
    fn test_call_time_errors_are_not_permanent() {
        for error in [
            GoogleSheetsError::authentication("rejected"),
            GoogleSheetsError::create("quota"),
            GoogleSheetsError::write("network"),
            GoogleSheetsError::share("permission"),
        ] {
            assert!(!error.is_permanent(), "{} should not be permanent", error);
        }
    }

    #[test]
    fn test_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: GoogleSheetsError = io_error.into();
        assert!(matches!(error, GoogleSheetsError::Configuration { .. }));
    }

    #[test]
    fn test_error_display() {
        let error = GoogleSheetsError::disabled("feature gate is off");
        assert_eq!(
            error.to_string(),
            "Google Sheets export disabled: feature gate is off"
        );
    }
}
