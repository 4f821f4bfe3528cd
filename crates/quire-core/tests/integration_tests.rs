//! Integration tests for quire-core against the real and in-memory adapters.

use std::fs;
use std::path::Path;

use quire_adapters::{LocalFilesystem, MemoryFilesystem, dissertation};
use quire_core::prelude::*;
use tempfile::TempDir;

fn local_service() -> ScaffoldService {
    ScaffoldService::new(Box::new(LocalFilesystem::new()))
}

fn hello_table() -> ScaffoldTable {
    ScaffoldTable::builder("hello")
        .file("a/b.txt", "hello")
        .build()
        .unwrap()
}

#[test]
fn first_run_creates_then_second_run_skips() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("proj");
    let service = local_service();

    let first = service.run(&base, &hello_table()).unwrap();
    assert_eq!(first.outcome_of("a/b.txt"), Some(&EntryOutcome::Created));
    assert_eq!(fs::read_to_string(base.join("a/b.txt")).unwrap(), "hello");

    let second = service.run(&base, &hello_table()).unwrap();
    assert_eq!(second.outcome_of("a/b.txt"), Some(&EntryOutcome::Skipped));
    assert_eq!(fs::read_to_string(base.join("a/b.txt")).unwrap(), "hello");
}

#[test]
fn preseeded_file_is_left_untouched() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("proj");
    fs::create_dir_all(base.join("a")).unwrap();
    fs::write(base.join("a/b.txt"), "custom").unwrap();

    let report = local_service().run(&base, &hello_table()).unwrap();

    assert_eq!(report.outcome_of("a/b.txt"), Some(&EntryOutcome::Skipped));
    assert_eq!(fs::read_to_string(base.join("a/b.txt")).unwrap(), "custom");
}

#[test]
fn full_dissertation_scaffold_is_byte_exact() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("tise-itb-dissertation-quarto");
    let table = dissertation().unwrap();

    let report = local_service().run(&base, &table).unwrap();

    assert_eq!(report.created(), table.len());
    assert!(report.is_complete());
    for entry in &table {
        let on_disk = fs::read(base.join(entry.path.as_path())).unwrap();
        assert_eq!(on_disk, entry.content.as_bytes(), "{}", entry.path);
    }
}

#[test]
fn rerun_of_full_scaffold_writes_nothing() {
    let table = dissertation().unwrap();
    let fs_mem = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs_mem.clone()));

    service.run("proj", &table).unwrap();
    let writes_after_first = fs_mem.write_count();
    assert_eq!(writes_after_first, table.len());

    let second = service.run("proj", &table).unwrap();
    assert_eq!(second.skipped(), table.len());
    assert_eq!(fs_mem.write_count(), writes_after_first);
}

#[test]
fn missing_parent_chain_of_base_is_created() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("deep").join("er").join("proj");

    let report = local_service().run(&base, &hello_table()).unwrap();

    assert!(report.is_complete());
    assert!(base.join("a").is_dir());
}

#[test]
fn base_that_is_a_file_fails_before_any_entry() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("proj");
    fs::write(&base, "I am a file").unwrap();

    let err = local_service().run(&base, &hello_table()).unwrap_err();

    assert!(err.is_filesystem());
    assert_eq!(fs::read_to_string(&base).unwrap(), "I am a file");
}

#[test]
fn failed_entry_does_not_stop_later_entries() {
    let table = ScaffoldTable::builder("mixed")
        .file("locked/a.txt", "a")
        .file("open/b.txt", "b")
        .build()
        .unwrap();
    let fs_mem = MemoryFilesystem::new();
    fs_mem.set_read_only("proj/locked");

    let report = ScaffoldService::new(Box::new(fs_mem.clone()))
        .run("proj", &table)
        .unwrap();

    assert!(report.outcome_of("locked/a.txt").unwrap().is_failure());
    assert_eq!(report.outcome_of("open/b.txt"), Some(&EntryOutcome::Created));
    assert_eq!(
        fs_mem.read_file(Path::new("proj/open/b.txt")).as_deref(),
        Some("b")
    );
}

#[test]
fn directory_where_file_belongs_is_reported_failed() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("proj");
    fs::create_dir_all(base.join("a/b.txt")).unwrap();

    let report = local_service().run(&base, &hello_table()).unwrap();

    match report.outcome_of("a/b.txt") {
        Some(EntryOutcome::Failed { reason }) => assert!(reason.contains("Write error")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn preview_reports_without_creating_base() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("proj");

    let report = local_service().preview(&base, &hello_table()).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.created(), 1);
    assert!(!base.exists());
}
