// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for reloading rc files.

use lintrc::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

#[test]
fn test_manual_reload() {
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_path_buf();
    fs::write(&path, "[FORMAT]\nmax-line-length=80\n").unwrap();

    let mut service = DefaultConfigService::builder()
        .with_ini_file(&path)
        .unwrap()
        .build()
        .unwrap();

    let key = ConfigKey::new("FORMAT", "max-line-length");
    assert_eq!(service.get(&key).unwrap(), "80");

    fs::write(&path, "[FORMAT]\nmax-line-length=100\n").unwrap();

    // Still the old value before reload
    assert_eq!(service.get(&key).unwrap(), "80");

    service.reload().unwrap();
    assert_eq!(service.get(&key).unwrap(), "100");
}

#[test]
fn test_reload_picks_up_new_and_removed_options() {
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_path_buf();
    fs::write(&path, "[MASTER]\nignore=CVS\n").unwrap();

    let mut service = DefaultConfigService::builder()
        .with_ini_file(&path)
        .unwrap()
        .build()
        .unwrap();

    let ignore = ConfigKey::new("MASTER", "ignore");
    let notes = ConfigKey::new("MISCELLANEOUS", "notes");
    assert!(service.has(&ignore));
    assert!(!service.has(&notes));

    fs::write(&path, "[MISCELLANEOUS]\nnotes=FIXME,XXX\n").unwrap();
    service.reload().unwrap();

    assert!(!service.has(&ignore));
    assert_eq!(service.get(&notes).unwrap(), ["FIXME", "XXX"]);
}

#[test]
fn test_broken_file_keeps_previous_values() {
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_path_buf();
    fs::write(&path, "[FORMAT]\nmax-line-length=80\n").unwrap();

    let mut service = DefaultConfigService::builder()
        .with_ini_file(&path)
        .unwrap()
        .build()
        .unwrap();

    fs::write(&path, "max-line-length=100\n").unwrap();

    // The failure is logged, not returned
    assert!(service.reload().is_ok());
    assert_eq!(
        service
            .get(&ConfigKey::new("FORMAT", "max-line-length"))
            .unwrap(),
        "80"
    );
}
