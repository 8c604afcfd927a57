// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.

use crate::domain::{ConfigDocument, Result};

/// Turns raw rc-file text into a [`ConfigDocument`].
///
/// Parsing is all-or-nothing: an implementation either returns a complete
/// document or an error, never a partially filled one.
///
/// # Examples
///
/// ```rust
/// use lintrc::domain::{ConfigDocument, Result};
/// use lintrc::ports::ConfigParser;
///
/// struct SingleSection;
///
/// impl ConfigParser for SingleSection {
///     fn parse(&self, content: &str) -> Result<ConfigDocument> {
///         let mut doc = ConfigDocument::new();
///         doc.section_mut("MASTER").insert("ignore", content.trim());
///         Ok(doc)
///     }
/// }
///
/// let doc = SingleSection.parse("CVS\n").unwrap();
/// assert_eq!(doc.get("MASTER", "ignore").unwrap(), &"CVS");
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ConfigError::ParseError`] if the content does not
    /// follow the format's grammar.
    fn parse(&self, content: &str) -> Result<ConfigDocument>;
}
