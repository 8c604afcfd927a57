// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for layering several rc files by priority.

mod common;

use common::write_rc;
use lintrc::prelude::*;
use tempfile::TempDir;

const SYSTEM_RC: &str = "\
[MASTER]
ignore=CVS
jobs=1

[FORMAT]
max-line-length=80
";

const PROJECT_RC: &str = "\
[FORMAT]
max-line-length=100

[MESSAGES CONTROL]
disable=locally-disabled,locally-enabled
";

fn layered(dir: &TempDir) -> DefaultConfigService {
    let system = write_rc(dir.path(), "pylintrc.system", SYSTEM_RC);
    let project = write_rc(dir.path(), ".pylintrc", PROJECT_RC);

    DefaultConfigService::builder()
        .with_ini_file_priority(&project, 2)
        .unwrap()
        .with_ini_file_priority(&system, 1)
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn test_higher_priority_file_wins() {
    let dir = TempDir::new().unwrap();
    let service = layered(&dir);

    assert_eq!(
        service
            .require(&ConfigKey::new("FORMAT", "max-line-length"))
            .unwrap(),
        "100"
    );
}

#[test]
fn test_lower_priority_file_fills_gaps() {
    let dir = TempDir::new().unwrap();
    let service = layered(&dir);

    assert_eq!(service.get(&ConfigKey::new("MASTER", "jobs")).unwrap(), "1");
    assert_eq!(
        service
            .get(&ConfigKey::new("MESSAGES CONTROL", "disable"))
            .unwrap(),
        ["locally-disabled", "locally-enabled"]
    );
}

#[test]
fn test_missing_everywhere_is_absent() {
    let dir = TempDir::new().unwrap();
    let service = layered(&dir);

    let key = ConfigKey::new("REPORTS", "reports");
    assert!(service.get(&key).is_none());
    assert!(!service.has(&key));
    assert!(service.require(&key).is_err());
}

#[test]
fn test_inline_defaults_under_files() {
    let dir = TempDir::new().unwrap();
    let project = write_rc(dir.path(), ".pylintrc", PROJECT_RC);

    let service = DefaultConfigService::builder()
        .with_ini_text("defaults", "[FORMAT]\nmax-line-length=79\nindent-string='    '\n")
        .unwrap()
        .with_ini_file_priority(&project, 2)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(service.source_names(), vec!["ini-file", "defaults"]);
    assert_eq!(
        service
            .get(&ConfigKey::new("FORMAT", "max-line-length"))
            .unwrap(),
        "100"
    );
    assert_eq!(
        service
            .get(&ConfigKey::new("FORMAT", "indent-string"))
            .unwrap(),
        "'    '"
    );
}

#[test]
fn test_merged_document_matches_lookups() {
    let dir = TempDir::new().unwrap();
    let service = layered(&dir);

    let merged = service.merged_document().unwrap();
    for key in merged.keys() {
        assert_eq!(merged.get_key(&key).cloned(), service.get(&key), "{}", key);
    }
    assert_eq!(merged.keys().count(), 4);
}
