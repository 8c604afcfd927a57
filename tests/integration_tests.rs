// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for parsing and looking up rc files.

mod common;

use common::{write_rc, SAMPLE_PYLINTRC};
use lintrc::prelude::*;
use tempfile::TempDir;

#[test]
fn test_scalar_option() {
    let doc = lintrc::parse("[FORMAT]\nmax-line-length=100\n").unwrap();
    assert_eq!(doc.get("FORMAT", "max-line-length").unwrap(), &"100");
}

#[test]
fn test_list_option() {
    let doc = lintrc::parse("[MESSAGES CONTROL]\ndisable=locally-disabled,locally-enabled\n")
        .unwrap();
    assert_eq!(
        doc.get("MESSAGES CONTROL", "disable").unwrap(),
        &vec!["locally-disabled", "locally-enabled"]
    );
}

#[test]
fn test_option_before_section_is_rejected() {
    let result = lintrc::parse("max-line-length=100\n[FORMAT]\n");
    assert!(matches!(result, Err(ConfigError::ParseError { line: 1, .. })));
}

#[test]
fn test_absent_lookups() {
    let doc = lintrc::parse(SAMPLE_PYLINTRC).unwrap();
    assert!(doc.get("FORMAT", "indent-string").is_none());
    assert!(doc.get("REPORTS", "output-format").is_none());
}

#[test]
fn test_sample_document() {
    let doc = lintrc::parse(SAMPLE_PYLINTRC).unwrap();

    assert_eq!(
        doc.section_names(),
        vec!["MASTER", "FORMAT", "MISCELLANEOUS", "MESSAGES CONTROL"]
    );
    assert_eq!(doc.get("MASTER", "ignore").unwrap(), &"CVS");
    assert_eq!(
        doc.get("FORMAT", "max-line-length")
            .unwrap()
            .as_u32("FORMAT.max-line-length")
            .unwrap(),
        100
    );
    assert_eq!(doc.get("MISCELLANEOUS", "notes").unwrap(), &["FIXME", "XXX"]);
    assert_eq!(
        doc.get("MESSAGES CONTROL", "enable").unwrap(),
        &["useless-suppression", "c-extension-no-member"]
    );
}

#[test]
fn test_sample_round_trip() {
    let doc = lintrc::parse(SAMPLE_PYLINTRC).unwrap();
    let reparsed = lintrc::parse(&doc.to_string()).unwrap();
    assert_eq!(reparsed, doc);
}

#[test]
fn test_comment_only_input_is_empty() {
    let doc = lintrc::parse("# nothing\n\n; still nothing\n   # indented\n").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_file_adapter_reads_sample() {
    let dir = TempDir::new().unwrap();
    let path = write_rc(dir.path(), ".pylintrc", SAMPLE_PYLINTRC);

    let adapter = IniFileAdapter::from_file(&path).unwrap();
    assert_eq!(adapter.all_keys().unwrap().len(), 5);
    assert_eq!(
        adapter.get_option("MASTER", "ignore").unwrap().unwrap(),
        "CVS"
    );
}

#[test]
fn test_file_adapter_reports_parse_line() {
    let dir = TempDir::new().unwrap();
    let path = write_rc(dir.path(), ".pylintrc", "[MASTER]\nignore=CVS\n[FORMAT\n");

    let err = IniFileAdapter::from_file(&path).unwrap_err();
    assert_eq!(err.line(), Some(3));
}

#[test]
fn test_service_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_rc(dir.path(), ".pylintrc", SAMPLE_PYLINTRC);

    let service = DefaultConfigService::builder()
        .with_ini_file(&path)
        .unwrap()
        .build()
        .unwrap();

    let notes = service.get(&ConfigKey::new("MISCELLANEOUS", "notes")).unwrap();
    assert_eq!(notes.as_list(), vec!["FIXME", "XXX"]);
    assert!(service.get(&ConfigKey::new("MISCELLANEOUS", "todo")).is_none());
    assert_eq!(
        service.get_or_default(&ConfigKey::new("FORMAT", "indent-string"), "    "),
        "    "
    );
}

#[test]
#[cfg(feature = "discovery")]
fn test_discovered_file_feeds_service() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write_rc(cwd.path(), ".pylintrc", SAMPLE_PYLINTRC);

    let locator = RcFileLocator::new("pylintrc")
        .with_env_var("LINTRC_IT_UNSET_VARIABLE")
        .with_working_dir(cwd.path())
        .with_home_dir(home.path())
        .include_system(false);

    let service = DefaultConfigService::builder()
        .with_discovered(&locator)
        .unwrap()
        .build()
        .unwrap();

    assert!(service.has(&ConfigKey::new("MASTER", "ignore")));
}

#[test]
#[cfg(feature = "discovery")]
fn test_nothing_discovered_gives_empty_service() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    let locator = RcFileLocator::new("pylintrc")
        .with_env_var("LINTRC_IT_UNSET_VARIABLE")
        .with_working_dir(cwd.path())
        .with_home_dir(home.path())
        .include_system(false);

    let service = DefaultConfigService::builder()
        .with_discovered(&locator)
        .unwrap()
        .build()
        .unwrap();

    assert!(service.source_names().is_empty());
}
