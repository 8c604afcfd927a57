// SPDX-License-Identifier: MIT OR Apache-2.0

//! Option values with type-safe conversions.
//!
//! An option is either a scalar string or an ordered list of strings (any value
//! written with a comma in it). Consumers read the raw form with
//! [`OptionValue::as_str`] / [`OptionValue::as_list`] or convert it with the
//! typed accessors, which report failures as
//! [`ConfigError::TypeConversionError`].

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The value of a single option.
///
/// # Examples
///
/// ```
/// use lintrc::domain::OptionValue;
///
/// let value = OptionValue::from("100");
/// assert_eq!(value.as_str(), Some("100"));
/// assert_eq!(value.as_u32("FORMAT.max-line-length").unwrap(), 100);
///
/// let value = OptionValue::from(vec!["FIXME", "XXX"]);
/// assert_eq!(value.as_list(), vec!["FIXME", "XXX"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A single string value.
    Scalar(String),
    /// A comma-separated list of values, in the order written.
    List(Vec<String>),
}

/// Returned as the source of a conversion error when a list is read as a scalar.
#[derive(Debug, Error)]
#[error("expected a single value, found a list of {0} entries")]
pub struct NotAScalar(pub usize);

impl OptionValue {
    /// Classifies a raw (already trimmed) value.
    ///
    /// Values containing a comma become lists: entries are trimmed and empty
    /// entries are dropped. Everything else is a scalar.
    ///
    /// ```
    /// use lintrc::domain::OptionValue;
    ///
    /// assert_eq!(
    ///     OptionValue::from_raw("locally-disabled, locally-enabled"),
    ///     OptionValue::List(vec!["locally-disabled".into(), "locally-enabled".into()])
    /// );
    /// assert_eq!(OptionValue::from_raw("100"), OptionValue::Scalar("100".into()));
    /// ```
    pub fn from_raw(raw: &str) -> Self {
        if raw.contains(',') {
            OptionValue::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        } else {
            OptionValue::Scalar(raw.to_string())
        }
    }

    /// Returns `true` for list values.
    pub fn is_list(&self) -> bool {
        matches!(self, OptionValue::List(_))
    }

    /// Returns the scalar string, or `None` for a list.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Scalar(s) => Some(s),
            OptionValue::List(_) => None,
        }
    }

    /// Returns the value as a list of entries.
    ///
    /// A non-empty scalar reads as a one-element list and an empty scalar as an
    /// empty list, so `notes=FIXME` and `notes=FIXME,XXX` can be consumed alike.
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            OptionValue::Scalar(s) if s.is_empty() => Vec::new(),
            OptionValue::Scalar(s) => vec![s.as_str()],
            OptionValue::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    fn scalar_for(&self, key: &str, target_type: &str) -> Result<&str> {
        match self {
            OptionValue::Scalar(s) => Ok(s),
            OptionValue::List(items) => Err(ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: target_type.to_string(),
                source: Box::new(NotAScalar(items.len())),
            }),
        }
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes (case-insensitive) `true`/`yes`/`y`/`1`/`on` and
    /// `false`/`no`/`n`/`0`/`off`.
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        let s = self.scalar_for(key, "boolean")?;
        match s.to_lowercase().as_str() {
            "true" | "yes" | "y" | "1" | "on" => Ok(true),
            "false" | "no" | "n" | "0" | "off" => Ok(false),
            _ => s
                .parse::<bool>()
                .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
        }
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.scalar_for(key, "integer")?
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a `u32`.
    ///
    /// ```
    /// use lintrc::domain::OptionValue;
    ///
    /// let value = OptionValue::from("100");
    /// assert_eq!(value.as_u32("FORMAT.max-line-length").unwrap(), 100);
    /// ```
    pub fn as_u32(&self, key: &str) -> Result<u32> {
        self.scalar_for(key, "integer")?
            .parse::<u32>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        self.scalar_for(key, "integer")?
            .parse::<u64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Parses a scalar value into any type that implements `FromStr`.
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let target_type = std::any::type_name::<T>();
        self.scalar_for(key, target_type)?
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: target_type.to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Scalar(s)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Scalar(s.to_string())
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(items: Vec<String>) -> Self {
        OptionValue::List(items)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(items: Vec<&str>) -> Self {
        OptionValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl PartialEq<&str> for OptionValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<Vec<&str>> for OptionValue {
    fn eq(&self, other: &Vec<&str>) -> bool {
        match self {
            OptionValue::List(items) => items.iter().map(String::as_str).eq(other.iter().copied()),
            OptionValue::Scalar(_) => false,
        }
    }
}

impl<const N: usize> PartialEq<[&str; N]> for OptionValue {
    fn eq(&self, other: &[&str; N]) -> bool {
        match self {
            OptionValue::List(items) => items.iter().map(String::as_str).eq(other.iter().copied()),
            OptionValue::Scalar(_) => false,
        }
    }
}

/// Renders the value the way it is written in an rc file.
///
/// Lists are comma-joined. A one-element list keeps a trailing comma and an
/// empty list renders as a lone comma, so the text parses back to a list.
impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Scalar(s) => f.write_str(s),
            OptionValue::List(items) => match items.as_slice() {
                [] => f.write_str(","),
                [only] => write!(f, "{},", only),
                _ => f.write_str(&items.join(",")),
            },
        }
    }
}
