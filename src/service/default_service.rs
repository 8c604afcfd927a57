// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration service implementation.
//!
//! Aggregates several configuration sources (typically a user rc file and a
//! project rc file) and answers lookups with priority precedence.

use crate::adapters::{DocumentSource, IniFileAdapter};
use crate::domain::{ConfigDocument, ConfigKey, ConfigurationService, OptionValue, Result};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Default implementation of the configuration service.
///
/// Sources with higher priority values are queried first, and the first value
/// found is returned. Hits are cached until the next [`reload`] or
/// [`add_source`].
///
/// [`reload`]: ConfigurationService::reload
/// [`add_source`]: DefaultConfigService::add_source
///
/// # Examples
///
/// ```rust
/// use lintrc::prelude::*;
/// use lintrc::service::DefaultConfigService;
///
/// # fn main() -> Result<()> {
/// let service = DefaultConfigService::builder()
///     .with_ini_text("defaults", "[FORMAT]\nmax-line-length=100\n")?
///     .build()?;
///
/// let length = service.require(&ConfigKey::new("FORMAT", "max-line-length"))?;
/// assert_eq!(length.as_u32("max-line-length")?, 100);
/// # Ok(())
/// # }
/// ```
pub struct DefaultConfigService {
    /// Sources, maintained in priority order (highest first)
    sources: Vec<Box<dyn ConfigSource>>,
    /// Cache of resolved values
    cache: Arc<RwLock<HashMap<ConfigKey, OptionValue>>>,
}

impl DefaultConfigService {
    /// Creates a new service with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a new configuration service builder.
    pub fn builder() -> ConfigurationServiceBuilder {
        ConfigurationServiceBuilder::new()
    }

    /// Loads the rc file found by the default locator for `file_name`.
    ///
    /// Returns an empty service when no rc file exists.
    ///
    /// ```rust,no_run
    /// use lintrc::service::DefaultConfigService;
    ///
    /// # fn main() -> lintrc::domain::Result<()> {
    /// let service = DefaultConfigService::with_defaults("pylintrc")?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "discovery")]
    pub fn with_defaults(file_name: &str) -> Result<Self> {
        use crate::adapters::RcFileLocator;
        Self::builder()
            .with_discovered(&RcFileLocator::new(file_name))?
            .build()
    }

    /// Adds a configuration source.
    ///
    /// Sources are re-sorted by priority; sources of equal priority keep the
    /// order they were added in.
    pub fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        tracing::debug!(
            source = source.name(),
            priority = source.priority(),
            "adding configuration source"
        );
        self.sources.push(source);
        self.sort_sources();
        self.invalidate_cache();
    }

    /// Returns the names of the sources in query order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Flattens every source into a single document.
    ///
    /// Each option takes the value the service would return for it. Sections
    /// and options appear in the order the highest-priority source lists them,
    /// followed by those only lower-priority sources know about.
    pub fn merged_document(&self) -> Result<ConfigDocument> {
        let mut doc = ConfigDocument::new();
        for source in &self.sources {
            for key in source.all_keys()? {
                if doc.get_key(&key).is_some() {
                    continue;
                }
                if let Some(value) = source.get(&key)? {
                    doc.section_mut(key.section()).insert(key.option(), value);
                }
            }
        }
        Ok(doc)
    }

    fn sort_sources(&mut self) {
        self.sources.sort_by_key(|b| std::cmp::Reverse(b.priority()));
    }

    fn invalidate_cache(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    fn query_sources(&self, key: &ConfigKey) -> Option<OptionValue> {
        for source in &self.sources {
            match source.get(key) {
                Ok(Some(value)) => return Some(value),
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!(
                        "Error querying source '{}' for key '{}': {}",
                        source.name(),
                        key,
                        e
                    );
                    continue;
                }
            }
        }
        None
    }
}

impl Default for DefaultConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationService for DefaultConfigService {
    fn get(&self, key: &ConfigKey) -> Option<OptionValue> {
        if let Ok(cache) = self.cache.read() {
            if let Some(value) = cache.get(key) {
                return Some(value.clone());
            }
        }

        let value = self.query_sources(key)?;

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key.clone(), value.clone());
        }

        Some(value)
    }

    fn reload(&mut self) -> Result<()> {
        for source in &mut self.sources {
            if let Err(e) = source.reload() {
                tracing::warn!("Failed to reload source '{}': {}", source.name(), e);
            }
        }

        self.invalidate_cache();

        Ok(())
    }
}

/// Builder for constructing a `DefaultConfigService`.
///
/// ```rust,no_run
/// use lintrc::service::ConfigurationServiceBuilder;
///
/// # fn main() -> lintrc::domain::Result<()> {
/// let service = ConfigurationServiceBuilder::new()
///     .with_ini_file("/etc/pylintrc")?
///     .with_ini_file_priority(".pylintrc", 2)?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ConfigurationServiceBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigurationServiceBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a configuration source.
    pub fn with_source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds an rc file with the default priority.
    pub fn with_ini_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let adapter = IniFileAdapter::from_file(path)?;
        Ok(self.with_source(Box::new(adapter)))
    }

    /// Adds an rc file with an explicit priority.
    pub fn with_ini_file_priority(
        self,
        path: impl AsRef<std::path::Path>,
        priority: u8,
    ) -> Result<Self> {
        let adapter = IniFileAdapter::from_file(path)?.with_priority(priority);
        Ok(self.with_source(Box::new(adapter)))
    }

    /// Parses rc text and adds it as an in-memory source.
    pub fn with_ini_text(self, name: impl Into<String>, text: &str) -> Result<Self> {
        let source = DocumentSource::from_text(name, text)?;
        Ok(self.with_source(Box::new(source)))
    }

    /// Adds the rc file found by `locator`, if any.
    ///
    /// A missing rc file is not an error; a present but invalid one is.
    #[cfg(feature = "discovery")]
    pub fn with_discovered(self, locator: &crate::adapters::RcFileLocator) -> Result<Self> {
        match locator.locate() {
            Some(path) => self.with_ini_file(path),
            None => Ok(self),
        }
    }

    /// Builds the configuration service.
    pub fn build(self) -> Result<DefaultConfigService> {
        let mut service = DefaultConfigService::new();

        for source in self.sources {
            service.add_source(source);
        }

        Ok(service)
    }
}

impl Default for ConfigurationServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
