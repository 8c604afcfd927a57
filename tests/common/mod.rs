// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// A realistic pylintrc, including continuation lines and comments.
#[allow(dead_code)]
pub const SAMPLE_PYLINTRC: &str = "\
# Project-wide lint settings
[MASTER]
ignore=CVS

[FORMAT]
# Maximum number of characters on a single line.
max-line-length=100

[MISCELLANEOUS]
notes=FIXME,XXX

[MESSAGES CONTROL]
disable=locally-disabled,locally-enabled
enable=
    useless-suppression,   ; keep suppressions honest
    c-extension-no-member
";

/// Writes `content` to `dir/name` and returns the path.
#[allow(dead_code)]
pub fn write_rc(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
