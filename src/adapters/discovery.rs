// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rc file discovery.
//!
//! Linters look for their rc file in a fixed order: an explicit path from the
//! environment, the working directory, the user's home, the per-user config
//! directory and finally the system-wide location. [`RcFileLocator`] walks
//! that list and returns the first regular file it finds.

use crate::adapters::IniFileAdapter;
use crate::domain::{ConfigError, Result};
use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Finds an rc file by name.
///
/// For a locator named `pylintrc` the candidates are, in order:
///
/// 1. the path in `$PYLINTRC`
/// 2. `./pylintrc`, then `./.pylintrc`
/// 3. `~/.pylintrc`
/// 4. `<config dir>/pylintrc` when [`RcFileLocator::with_project`] is set
/// 5. `/etc/pylintrc` (Unix only)
///
/// # Examples
///
/// ```rust,no_run
/// use lintrc::adapters::RcFileLocator;
///
/// let locator = RcFileLocator::new("pylintrc");
/// if let Some(path) = locator.locate() {
///     println!("using {}", path.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RcFileLocator {
    file_name: String,
    env_var: String,
    working_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
    project: Option<(String, String, String)>,
    include_system: bool,
}

impl RcFileLocator {
    /// Creates a locator for `file_name` (without a leading dot).
    ///
    /// The environment override defaults to the uppercased name with `-` and
    /// `.` replaced by `_`.
    pub fn new(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let env_var = file_name
            .trim_start_matches('.')
            .chars()
            .map(|c| match c {
                '-' | '.' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        Self {
            file_name,
            env_var,
            working_dir: None,
            home_dir: None,
            project: None,
            include_system: cfg!(unix),
        }
    }

    /// Overrides the environment variable holding an explicit rc file path.
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// Searches `dir` instead of the process working directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Uses `dir` as the home directory instead of the platform default.
    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }

    /// Also searches the per-user config directory of the given application.
    pub fn with_project(
        mut self,
        qualifier: impl Into<String>,
        organization: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        self.project = Some((qualifier.into(), organization.into(), application.into()));
        self
    }

    /// Enables or disables the system-wide `/etc` candidate.
    pub fn include_system(mut self, enabled: bool) -> Self {
        self.include_system = enabled;
        self
    }

    /// Returns the name of the environment override variable.
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// Lists every candidate path in search order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let dotted = format!(".{}", self.file_name);
        let mut candidates = Vec::new();

        if let Some(explicit) = std::env::var_os(&self.env_var).filter(|v| !v.is_empty()) {
            candidates.push(PathBuf::from(explicit));
        }

        if let Some(dir) = self
            .working_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
        {
            candidates.push(dir.join(&self.file_name));
            candidates.push(dir.join(&dotted));
        }

        if let Some(home) = self
            .home_dir
            .clone()
            .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
        {
            candidates.push(home.join(&dotted));
        }

        if let Some((qualifier, organization, application)) = &self.project {
            if let Some(dirs) = ProjectDirs::from(qualifier, organization, application) {
                candidates.push(dirs.config_dir().join(&self.file_name));
            }
        }

        if self.include_system {
            candidates.push(PathBuf::from("/etc").join(&self.file_name));
        }

        candidates
    }

    /// Returns the first candidate that is an existing regular file.
    pub fn locate(&self) -> Option<PathBuf> {
        let found = self.candidates().into_iter().find(|path| {
            let hit = path.is_file();
            tracing::trace!(path = %path.display(), hit, "probing rc file candidate");
            hit
        });
        match &found {
            Some(path) => tracing::debug!(path = %path.display(), "found rc file"),
            None => tracing::debug!(name = %self.file_name, "no rc file found"),
        }
        found
    }

    /// Locates and loads the rc file.
    ///
    /// # Errors
    ///
    /// `SourceError` when no candidate exists, or any error from
    /// [`IniFileAdapter::from_file`].
    pub fn load(&self) -> Result<IniFileAdapter> {
        let path = self.locate().ok_or_else(|| ConfigError::SourceError {
            source_name: "rc-discovery".to_string(),
            message: format!("no {} file found", self.file_name),
            source: None,
        })?;
        IniFileAdapter::from_file(path)
    }
}
