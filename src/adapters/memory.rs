// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source wrapping an already parsed document.

use crate::adapters::IniParser;
use crate::domain::{ConfigDocument, ConfigKey, OptionValue, Result};
use crate::ports::{ConfigParser, ConfigSource};

/// An in-memory [`ConfigSource`].
///
/// Useful for rc text embedded in a binary or for overrides computed at
/// runtime. Reloading is a no-op.
///
/// # Examples
///
/// ```rust
/// use lintrc::adapters::DocumentSource;
/// use lintrc::ports::ConfigSource;
///
/// let source = DocumentSource::from_text("defaults", "[FORMAT]\nmax-line-length=100\n")
///     .unwrap()
///     .with_priority(0);
/// assert_eq!(source.priority(), 0);
/// assert!(source.get_option("FORMAT", "max-line-length").unwrap().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct DocumentSource {
    name: String,
    priority: u8,
    document: ConfigDocument,
}

impl DocumentSource {
    /// Wraps `document` under the given source name, with priority 1.
    pub fn new(name: impl Into<String>, document: ConfigDocument) -> Self {
        Self {
            name: name.into(),
            priority: 1,
            document,
        }
    }

    /// Parses rc text and wraps the result.
    pub fn from_text(name: impl Into<String>, text: &str) -> Result<Self> {
        Ok(Self::new(name, IniParser::new().parse(text)?))
    }

    /// Sets the priority of this source.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the wrapped document.
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }
}

impl ConfigSource for DocumentSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<OptionValue>> {
        Ok(self.document.get_key(key).cloned())
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        Ok(self.document.keys().collect())
    }

    fn reload(&mut self) -> Result<()> {
        Ok(())
    }
}
