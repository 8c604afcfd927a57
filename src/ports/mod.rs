// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! The adapters layer implements these traits; the service layer consumes them.

pub mod parser;
pub mod source;

// Re-export commonly used types
pub use parser::ConfigParser;
pub use source::ConfigSource;
