// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer combining several rc sources behind `ConfigurationService`.

pub mod default_service;

// Re-export commonly used types
pub use default_service::{ConfigurationServiceBuilder, DefaultConfigService};
