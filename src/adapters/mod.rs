// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing parser and source implementations.
//!
//! Each adapter implements one of the traits from the ports layer: the INI
//! parser, the file-backed and in-memory sources, and rc file discovery.

#[cfg(feature = "discovery")]
pub mod discovery;
pub mod ini_file;
pub mod memory;

#[cfg(feature = "discovery")]
pub use discovery::RcFileLocator;
pub use ini_file::{IniFileAdapter, IniParser};
pub use memory::DocumentSource;
