// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! A source is anything that can answer `(section, option)` lookups: an rc file
//! on disk, an in-memory document, or a test double.

use crate::domain::{ConfigKey, OptionValue, Result};

/// A trait for configuration sources.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a service holding them can be
/// shared between threads.
///
/// # Priority
///
/// Each source has a priority (0-255). When several sources set the same
/// option, the one with the highest priority wins. Rc files default to 1.
///
/// # Examples
///
/// ```rust
/// use lintrc::domain::{ConfigKey, OptionValue, Result};
/// use lintrc::ports::ConfigSource;
///
/// struct LineLength;
///
/// impl ConfigSource for LineLength {
///     fn name(&self) -> &str {
///         "line-length"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn get(&self, key: &ConfigKey) -> Result<Option<OptionValue>> {
///         Ok((key.section() == "FORMAT" && key.option() == "max-line-length")
///             .then(|| OptionValue::from("100")))
///     }
///
///     fn all_keys(&self) -> Result<Vec<ConfigKey>> {
///         Ok(vec![ConfigKey::new("FORMAT", "max-line-length")])
///     }
///
///     fn reload(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let source = LineLength;
/// assert!(source.get_option("FORMAT", "max-line-length").unwrap().is_some());
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns a short identifier used in logs and error messages.
    fn name(&self) -> &str;

    /// Returns the priority of this source; higher wins.
    fn priority(&self) -> u8;

    /// Retrieves the value for `key`.
    ///
    /// * `Ok(Some(value))` - the option is set by this source
    /// * `Ok(None)` - this source does not set the option
    /// * `Err(ConfigError)` - the source failed
    fn get(&self, key: &ConfigKey) -> Result<Option<OptionValue>>;

    /// Returns every key this source sets.
    fn all_keys(&self) -> Result<Vec<ConfigKey>>;

    /// Re-reads the underlying data.
    ///
    /// Sources with nothing to re-read return `Ok(())`.
    fn reload(&mut self) -> Result<()>;

    /// Convenience lookup by section and option name.
    fn get_option(&self, section: &str, option: &str) -> Result<Option<OptionValue>> {
        self.get(&ConfigKey::new(section, option))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestSource {
        name: String,
        priority: u8,
    }

    impl ConfigSource for TestSource {
        fn name(&self) -> &str {
            &self.name
        }

        fn priority(&self) -> u8 {
            self.priority
        }

        fn get(&self, key: &ConfigKey) -> Result<Option<OptionValue>> {
            Ok((key.section() == "MASTER" && key.option() == "ignore")
                .then(|| OptionValue::from("CVS")))
        }

        fn all_keys(&self) -> Result<Vec<ConfigKey>> {
            Ok(vec![ConfigKey::new("MASTER", "ignore")])
        }

        fn reload(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn source() -> TestSource {
        TestSource {
            name: "test-source".to_string(),
            priority: 2,
        }
    }

    #[test]
    fn test_config_source_name_and_priority() {
        let source = source();
        assert_eq!(source.name(), "test-source");
        assert_eq!(source.priority(), 2);
    }

    #[test]
    fn test_get_option_convenience() {
        let source = source();
        assert_eq!(
            source.get_option("MASTER", "ignore").unwrap().unwrap(),
            "CVS"
        );
        assert!(source.get_option("MASTER", "jobs").unwrap().is_none());
    }

    #[test]
    fn test_config_source_all_keys() {
        assert_eq!(source().all_keys().unwrap().len(), 1);
    }

    #[test]
    fn test_config_source_reload() {
        let mut source = source();
        assert!(source.reload().is_ok());
    }

    #[test]
    fn test_config_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn ConfigSource>>();
    }
}
