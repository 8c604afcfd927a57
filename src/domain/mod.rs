// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the rc-file data model.
//!
//! Everything here is independent of where the configuration text comes from:
//! the document model, option values, lookup keys, errors and the service
//! interface that consumers program against.

pub mod config_key;
pub mod config_value;
pub mod document;
pub mod errors;
pub mod service;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::OptionValue;
pub use document::{ConfigDocument, Section};
pub use errors::{ConfigError, Result};
pub use service::ConfigurationService;
