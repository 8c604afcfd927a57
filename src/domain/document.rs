// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed form of an rc file: ordered sections of ordered options.
//!
//! Both levels keep insertion order. Writing an option or section name a second
//! time replaces the value in place, so the first occurrence fixes the position
//! and the last occurrence fixes the value.

use crate::domain::{ConfigKey, OptionValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

type Options = IndexMap<String, OptionValue>;

/// A named group of options.
#[derive(Clone, Debug, Eq)]
pub struct Section {
    name: String,
    options: Options,
}

impl Section {
    /// Creates an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Options::new(),
        }
    }

    /// Returns the section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of `option`, if set.
    pub fn get(&self, option: &str) -> Option<&OptionValue> {
        self.options.get(option)
    }

    /// Returns `true` if `option` is set in this section.
    pub fn contains(&self, option: &str) -> bool {
        self.options.contains_key(option)
    }

    /// Sets an option, returning the value it replaced.
    ///
    /// A replaced option keeps its original position.
    pub fn insert(
        &mut self,
        option: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.options.insert(option.into(), value.into())
    }

    /// Iterates over `(option, value)` pairs in insertion order.
    pub fn options(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of options in the section.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if the section has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.options.iter().eq(other.options.iter())
    }
}

/// An ordered set of uniquely named sections.
///
/// # Examples
///
/// ```
/// use lintrc::domain::ConfigDocument;
///
/// let doc = lintrc::parse("[FORMAT]\nmax-line-length=100\n").unwrap();
/// assert_eq!(doc.get("FORMAT", "max-line-length").unwrap(), &"100");
/// assert!(doc.get("FORMAT", "indent-string").is_none());
/// assert!(doc.get("MASTER", "ignore").is_none());
/// ```
#[derive(Clone, Debug, Default, Eq, Serialize, Deserialize)]
#[serde(from = "RawDocument", into = "RawDocument")]
pub struct ConfigDocument {
    sections: IndexMap<String, Section>,
}

type RawDocument = IndexMap<String, Options>;

impl From<RawDocument> for ConfigDocument {
    fn from(raw: RawDocument) -> Self {
        let sections = raw
            .into_iter()
            .map(|(name, options)| {
                let section = Section {
                    name: name.clone(),
                    options,
                };
                (name, section)
            })
            .collect();
        Self { sections }
    }
}

impl From<ConfigDocument> for RawDocument {
    fn from(doc: ConfigDocument) -> Self {
        doc.sections
            .into_iter()
            .map(|(name, section)| (name, section.options))
            .collect()
    }
}

impl ConfigDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the section called `name`, creating it at the end if missing.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        self.sections
            .entry(name.to_string())
            .or_insert_with(|| Section::new(name))
    }

    /// Returns the section called `name`.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Looks up `option` inside `section`.
    ///
    /// Returns `None` when either the section or the option is missing. No
    /// default value is ever substituted.
    pub fn get(&self, section: &str, option: &str) -> Option<&OptionValue> {
        self.sections.get(section)?.get(option)
    }

    /// Looks up the option named by `key`.
    pub fn get_key(&self, key: &ConfigKey) -> Option<&OptionValue> {
        self.get(key.section(), key.option())
    }

    /// Returns `true` if the document has a section called `name`.
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Returns `true` if `option` is set inside `section`.
    pub fn has_option(&self, section: &str, option: &str) -> bool {
        self.get(section, option).is_some()
    }

    /// Iterates over sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Section names in document order.
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Every `(section, option)` pair in document order.
    pub fn keys(&self) -> impl Iterator<Item = ConfigKey> + '_ {
        self.sections.values().flat_map(|section| {
            section
                .options()
                .map(move |(option, _)| ConfigKey::new(section.name(), option))
        })
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl PartialEq for ConfigDocument {
    fn eq(&self, other: &Self) -> bool {
        self.sections.iter().eq(other.sections.iter())
    }
}

/// Writes the document back out in rc-file syntax.
///
/// Multi-line values are emitted as indented continuation lines. Parsing the
/// output yields a document equal to `self`.
impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{}]", section.name)?;
            for (option, value) in &section.options {
                let rendered = value.to_string();
                let mut lines = rendered.split('\n');
                writeln!(f, "{}={}", option, lines.next().unwrap_or_default())?;
                for line in lines {
                    writeln!(f, "    {}", line)?;
                }
            }
        }
        Ok(())
    }
}
