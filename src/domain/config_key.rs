// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lookup key naming one option inside one section.

use std::fmt;

/// A `(section, option)` pair identifying a single option.
///
/// Section and option names are compared exactly (case-sensitive), the same
/// way they are stored by the parser.
///
/// # Examples
///
/// ```
/// use lintrc::domain::ConfigKey;
///
/// let key = ConfigKey::new("MESSAGES CONTROL", "disable");
/// assert_eq!(key.section(), "MESSAGES CONTROL");
/// assert_eq!(key.option(), "disable");
/// assert_eq!(key.to_string(), "MESSAGES CONTROL.disable");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey {
    section: String,
    option: String,
}

impl ConfigKey {
    /// Creates a key from a section name and an option name.
    pub fn new(section: impl Into<String>, option: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            option: option.into(),
        }
    }

    /// Returns the section name.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Returns the option name.
    pub fn option(&self) -> &str {
        &self.option
    }
}

impl<S, O> From<(S, O)> for ConfigKey
where
    S: Into<String>,
    O: Into<String>,
{
    fn from((section, option): (S, O)) -> Self {
        ConfigKey::new(section, option)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.option)
    }
}
