// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI-style rc file parser and file source adapter.
//!
//! The accepted grammar is the one linters use for their rc files:
//!
//! ```text
//! # full-line comment (also `;`)
//! [MESSAGES CONTROL]
//! disable=locally-disabled,locally-enabled
//! enable=
//!     c-extension-no-member,   # inline comments allowed on continuation lines
//!     useless-suppression
//! ```

use crate::domain::{ConfigDocument, ConfigError, ConfigKey, OptionValue, Result};
use crate::ports::{ConfigParser, ConfigSource};
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for rc files (1MB).
const MAX_RC_FILE_SIZE: u64 = 1024 * 1024;

const SOURCE_NAME: &str = "ini-file";

/// Parser for sectioned `key=value` rc files.
///
/// # Examples
///
/// ```rust
/// use lintrc::adapters::IniParser;
/// use lintrc::ports::ConfigParser;
///
/// let doc = IniParser::new()
///     .parse("[MESSAGES CONTROL]\ndisable=locally-disabled,locally-enabled\n")
///     .unwrap();
/// assert_eq!(
///     doc.get("MESSAGES CONTROL", "disable").unwrap(),
///     &["locally-disabled", "locally-enabled"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct IniParser;

/// An option whose value may still grow through continuation lines.
struct PendingOption {
    section: String,
    name: String,
    line: usize,
    parts: Vec<String>,
}

impl IniParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        IniParser
    }

    fn is_comment(trimmed: &str) -> bool {
        trimmed.starts_with('#') || trimmed.starts_with(';')
    }

    /// Cuts an inline comment: `#` or `;` preceded by whitespace.
    fn strip_inline_comment(text: &str) -> &str {
        let mut prev_is_space = false;
        for (i, c) in text.char_indices() {
            if (c == '#' || c == ';') && prev_is_space {
                return text[..i].trim_end();
            }
            prev_is_space = c.is_whitespace();
        }
        text
    }

    fn parse_header(trimmed: &str, line: usize) -> Result<&str> {
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| {
                ConfigError::parse(line, format!("malformed section header `{}`", trimmed))
            })?
            .trim();
        if inner.is_empty() {
            return Err(ConfigError::parse(line, "empty section name"));
        }
        Ok(inner)
    }

    fn commit(doc: &mut ConfigDocument, pending: PendingOption) {
        let raw = pending.parts.join("\n");
        let value = OptionValue::from_raw(raw.trim());
        let replaced = doc
            .section_mut(&pending.section)
            .insert(pending.name.as_str(), value);
        if replaced.is_some() {
            tracing::warn!(
                section = %pending.section,
                option = %pending.name,
                line = pending.line,
                "option set more than once, keeping the last value"
            );
        }
    }
}

impl ConfigParser for IniParser {
    fn parse(&self, content: &str) -> Result<ConfigDocument> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut doc = ConfigDocument::new();
        let mut current: Option<String> = None;
        let mut pending: Option<PendingOption> = None;

        for (index, raw_line) in content.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw_line.trim();

            if trimmed.is_empty() {
                if let Some(done) = pending.take() {
                    Self::commit(&mut doc, done);
                }
                continue;
            }
            if Self::is_comment(trimmed) {
                continue;
            }

            let indented = raw_line.starts_with(char::is_whitespace);
            if indented {
                if let Some(open) = pending.as_mut() {
                    let part = Self::strip_inline_comment(trimmed);
                    if !part.is_empty() {
                        open.parts.push(part.to_string());
                    }
                    continue;
                }
            }

            if let Some(done) = pending.take() {
                Self::commit(&mut doc, done);
            }

            if trimmed.starts_with('[') {
                let name = Self::parse_header(trimmed, line)?;
                doc.section_mut(name);
                current = Some(name.to_string());
                continue;
            }

            let (name, value) = trimmed
                .split_once(['=', ':'])
                .ok_or_else(|| {
                    ConfigError::parse(
                        line,
                        format!("expected section header, option or comment, found `{}`", trimmed),
                    )
                })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::parse(line, "option with an empty name"));
            }
            let section = current.clone().ok_or_else(|| {
                ConfigError::parse(line, format!("option `{}` outside of any section", name))
            })?;

            pending = Some(PendingOption {
                section,
                name: name.to_string(),
                line,
                parts: vec![value.trim().to_string()],
            });
        }

        if let Some(done) = pending.take() {
            Self::commit(&mut doc, done);
        }

        tracing::debug!(
            sections = doc.len(),
            options = doc.keys().count(),
            "parsed rc file"
        );
        Ok(doc)
    }
}

/// Configuration source backed by an rc file on disk.
///
/// # Priority
///
/// Defaults to 1; use [`IniFileAdapter::with_priority`] when layering several
/// rc files (e.g. a project file over a user file).
///
/// # Examples
///
/// ```rust,no_run
/// use lintrc::adapters::IniFileAdapter;
/// use lintrc::ports::ConfigSource;
///
/// let adapter = IniFileAdapter::from_file(".pylintrc").unwrap();
/// let length = adapter.get_option("FORMAT", "max-line-length").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct IniFileAdapter {
    /// Canonical path to the rc file
    file_path: PathBuf,
    /// Parsed document
    document: ConfigDocument,
    /// Source priority
    priority: u8,
    parser: IniParser,
}

impl IniFileAdapter {
    /// Reads and parses the rc file at `path`.
    ///
    /// # Errors
    ///
    /// * `SourceError` if the file cannot be resolved, is larger than 1MB or
    ///   cannot be read as UTF-8 text
    /// * `ParseError` if the content is not a valid rc file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref();
        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| source_error("Invalid or inaccessible path", file_path, Some(e)))?;

        let parser = IniParser::new();
        let document = parser.parse(&read_capped(&canonical_path)?)?;
        tracing::debug!(path = %canonical_path.display(), "loaded rc file");

        Ok(Self {
            file_path: canonical_path,
            document,
            priority: 1,
            parser,
        })
    }

    /// Sets the priority of this source.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the path to the rc file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the parsed document.
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }
}

fn source_error(what: &str, path: &Path, err: Option<std::io::Error>) -> ConfigError {
    ConfigError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!(
            "{}: {}",
            what,
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unknown>")
        ),
        source: err.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
    }
}

/// Reads `path` as text, refusing files above [`MAX_RC_FILE_SIZE`].
fn read_capped(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| source_error("Failed to read file metadata", path, Some(e)))?;

    if metadata.len() > MAX_RC_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_RC_FILE_SIZE
            ),
            source: None,
        });
    }

    fs::read_to_string(path)
        .map_err(|e| source_error("Failed to read configuration file", path, Some(e)))
}

impl ConfigSource for IniFileAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
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
        let content = read_capped(&self.file_path)?;
        self.document = self.parser.parse(&content)?;
        Ok(())
    }
}
