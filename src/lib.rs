// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loader for sectioned linter rc files.
//!
//! Linters such as pylint read their settings from an INI-like rc file:
//!
//! ```text
//! [MASTER]
//! ignore=CVS
//!
//! [FORMAT]
//! max-line-length=100
//!
//! [MESSAGES CONTROL]
//! disable=locally-disabled,locally-enabled
//! ```
//!
//! This crate parses such files into an ordered [`ConfigDocument`] and answers
//! `(section, option)` lookups. It never interprets what an option means; that
//! is left to the consumer.
//!
//! # Architecture
//!
//! - **Domain Layer**: the document model (`ConfigDocument`, `Section`,
//!   `OptionValue`), `ConfigKey`, errors and the `ConfigurationService` trait
//! - **Ports**: `ConfigParser` and `ConfigSource`
//! - **Adapters**: the INI parser, file-backed and in-memory sources, rc file
//!   discovery
//! - **Service**: `DefaultConfigService`, layering several sources by priority
//!
//! # Feature Flags
//!
//! - `discovery`: rc file discovery in the working directory, home and
//!   platform config directories (default)
//!
//! # Quick Start
//!
//! ```rust
//! # fn main() -> lintrc::domain::Result<()> {
//! let doc = lintrc::parse("[MESSAGES CONTROL]\ndisable=locally-disabled,locally-enabled\n")?;
//!
//! let disabled = doc.get("MESSAGES CONTROL", "disable").unwrap();
//! assert_eq!(disabled.as_list(), vec!["locally-disabled", "locally-enabled"]);
//! assert!(doc.get("FORMAT", "max-line-length").is_none());
//! # Ok(())
//! # }
//! ```
//!
//! [`ConfigDocument`]: domain::ConfigDocument

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

use crate::ports::ConfigParser;

/// Parses rc-file text with the default [`adapters::IniParser`].
///
/// # Errors
///
/// Returns [`domain::ConfigError::ParseError`] on the first line that breaks
/// the grammar; no partial document is returned.
pub fn parse(text: &str) -> domain::Result<domain::ConfigDocument> {
    adapters::IniParser::new().parse(text)
}

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::adapters::{DocumentSource, IniFileAdapter, IniParser};
    pub use crate::domain::{
        ConfigDocument, ConfigError, ConfigKey, ConfigurationService, OptionValue, Result,
        Section,
    };
    pub use crate::ports::{ConfigParser, ConfigSource};
    pub use crate::service::{ConfigurationServiceBuilder, DefaultConfigService};

    #[cfg(feature = "discovery")]
    pub use crate::adapters::RcFileLocator;
}
