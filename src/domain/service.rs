// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This is the interface an external consumer (a linter, a formatter) uses to
//! read options without caring which rc files they came from.

use crate::domain::{ConfigError, ConfigKey, OptionValue, Result};

/// The main configuration service trait.
///
/// Lookups return an explicit "absent" (`None`) instead of substituting
/// defaults. Defaults are the consumer's business and can be supplied through
/// [`ConfigurationService::get_or_default`].
///
/// # Examples
///
/// ```rust
/// use lintrc::domain::{ConfigKey, ConfigurationService, OptionValue, Result};
///
/// struct Fixed;
///
/// impl ConfigurationService for Fixed {
///     fn get(&self, key: &ConfigKey) -> Option<OptionValue> {
///         (key.option() == "max-line-length").then(|| OptionValue::from("100"))
///     }
///
///     fn reload(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let service = Fixed;
/// assert!(service.has(&ConfigKey::new("FORMAT", "max-line-length")));
/// assert_eq!(
///     service.get_or_default(&ConfigKey::new("FORMAT", "indent-string"), "    "),
///     "    "
/// );
/// ```
pub trait ConfigurationService {
    /// Retrieves the value for `key`, or `None` if no source sets it.
    fn get(&self, key: &ConfigKey) -> Option<OptionValue>;

    /// Reloads configuration from every source.
    fn reload(&mut self) -> Result<()>;

    /// Retrieves the value for `key`, failing with
    /// [`ConfigError::ConfigKeyNotFound`] if it is absent.
    fn require(&self, key: &ConfigKey) -> Result<OptionValue> {
        self.get(key).ok_or_else(|| ConfigError::ConfigKeyNotFound {
            key: key.to_string(),
        })
    }

    /// Retrieves the value for `key`, falling back to a scalar `default`.
    fn get_or_default(&self, key: &ConfigKey, default: &str) -> OptionValue {
        self.get(key).unwrap_or_else(|| OptionValue::from(default))
    }

    /// Returns `true` if any source sets `key`.
    fn has(&self, key: &ConfigKey) -> bool {
        self.get(key).is_some()
    }
}
