// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the rc-file loader.
//!
//! All errors use `thiserror` and are collected in the single [`ConfigError`] enum.

use std::num::ParseIntError;
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for rc-file operations.
///
/// Grammar violations while parsing are reported as [`ConfigError::ParseError`]
/// together with the 1-based line number of the offending line. The remaining
/// variants come from the layers around the parser (file access, typed lookups).
///
/// # Examples
///
/// ```
/// use lintrc::domain::errors::ConfigError;
///
/// let err = ConfigError::ParseError {
///     line: 3,
///     message: "option outside of any section".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Failed to parse configuration at line 3: option outside of any section"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The input text does not follow the rc-file grammar.
    #[error("Failed to parse configuration at line {line}: {message}")]
    ParseError {
        /// 1-based line number of the offending line
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// A required option was not present in any source.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found, rendered as `SECTION.option`
        key: String,
    },

    /// Failed to convert an option value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error occurred in a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `ParseError` for the given 1-based line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Creates a `TypeConversionError` from a `ParseIntError`.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a `TypeConversionError` from a `ParseBoolError`.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }

    /// Returns the line number for parse errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConfigError::ParseError { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// A specialized Result type for rc-file operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
