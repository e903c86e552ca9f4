//! End-to-end tests for `mako init`.

use std::{fs, process::Command};

use predicates::prelude::*;
use tempfile::tempdir;

/// Build a command for the mako binary.
fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_mako")))
}

// -- scaffolding --

#[test]
fn creates_a_product_file() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("shoe.mako.md");

    cmd()
        .args(["init", target.to_str().expect("utf8 path")])
        .args(["--type", "product", "--entity", "Shoe", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Created"))
        .stdout(predicate::str::contains(
            "  Edit the file and run mako validate",
        ));

    let contents = fs::read_to_string(&target).expect("read scaffold");
    assert!(contents.contains("type: product"), "missing type field");
    assert!(contents.contains("entity: \"Shoe\""), "missing entity");
    assert!(contents.contains("language: en"), "missing language");
    assert!(contents.contains("# Shoe"), "missing title heading");
    assert!(contents.contains("add_to_cart"), "missing starter action");
}

#[test]
fn defaults_to_an_english_article() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("untitled.mako.md");

    cmd()
        .args(["init", target.to_str().expect("utf8 path")])
        .assert()
        .success();

    let contents = fs::read_to_string(&target).expect("read scaffold");
    assert!(contents.contains("type: article"), "missing type field");
    assert!(contents.contains("entity: \"Untitled\""), "missing entity");
    assert!(contents.contains("language: en"), "missing language");
    assert!(contents.contains("freshness: weekly"), "missing freshness");
}

#[test]
fn creates_docs_with_an_audience() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("guide.mako.md");

    cmd()
        .args(["init", target.to_str().expect("utf8 path")])
        .args(["--type", "docs", "--entity", "API Guide"])
        .assert()
        .success();

    let contents = fs::read_to_string(&target).expect("read scaffold");
    assert!(contents.contains("audience: developers"), "missing audience");
    assert!(contents.contains("## Getting Started"), "missing section");
}

#[test]
fn falls_back_for_unknown_types() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("landing.mako.md");

    cmd()
        .args(["init", target.to_str().expect("utf8 path")])
        .args(["--type", "landing", "--entity", "Landing Page"])
        .assert()
        .success();

    let contents = fs::read_to_string(&target).expect("read scaffold");
    assert!(contents.contains("type: landing"), "type not stamped");
    assert!(contents.contains("# Landing Page"), "missing title heading");
    assert!(
        !contents.contains("add_to_cart"),
        "generic scaffold should not carry product actions"
    );
}

#[test]
fn accepts_the_short_type_flag() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("short.mako.md");

    cmd()
        .args(["init", target.to_str().expect("utf8 path"), "-t", "docs"])
        .assert()
        .success();

    let contents = fs::read_to_string(&target).expect("read scaffold");
    assert!(contents.contains("type: docs"), "short flag ignored");
}

#[test]
fn stamps_todays_date() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("dated.mako.md");

    cmd()
        .args(["init", target.to_str().expect("utf8 path")])
        .assert()
        .success();

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let contents = fs::read_to_string(&target).expect("read scaffold");
    assert!(
        contents.contains(&format!("updated: \"{today}\"")),
        "scaffold not stamped with today's date"
    );
}

// -- safety --

#[test]
fn refuses_to_overwrite() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("existing.mako.md");
    fs::write(&target, "# hand-written\n").expect("write original");

    cmd()
        .args(["init", target.to_str().expect("utf8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File already exists"));

    let contents = fs::read_to_string(&target).expect("read original");
    assert_eq!(contents, "# hand-written\n", "original file was clobbered");
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("content/products/new.mako.md");

    cmd()
        .args(["init", target.to_str().expect("utf8 path")])
        .assert()
        .success();

    assert!(target.is_file(), "scaffold not created in nested directory");
}

// -- round trip --

#[test]
fn scaffolded_files_validate_cleanly() {
    let dir = tempdir().expect("tempdir");
    for kind in ["article", "product", "docs", "note"] {
        let target = dir.path().join(format!("{kind}.mako.md"));
        cmd()
            .args(["init", target.to_str().expect("utf8 path"), "-t", kind])
            .assert()
            .success();
    }

    let pattern = format!("{}/*.mako.md", dir.path().display());
    cmd()
        .args(["validate", &pattern, "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 files: 4 valid"));
}
