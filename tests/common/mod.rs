//! Common test utilities and fixtures for kotlin-tags integration tests
//!
//! This module provides:
//! - `tags_of` / `names_of` shortcuts over a freshly initialized parser
//! - `TestRepo` builder for on-disk source trees
//! - `ktags` runner for the built binary

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use kotlin_tags::{KotlinParser, LanguageId, Tag, TagKind};

/// Tag `source` with a fresh parser
pub fn tags_of(source: &str) -> Vec<Tag> {
    KotlinParser::initialize(LanguageId(0)).tags(source.as_bytes())
}

/// `(name, kind)` pairs in emission order
pub fn names_of(source: &str) -> Vec<(String, TagKind)> {
    tags_of(source)
        .into_iter()
        .map(|t| (t.name, t.kind))
        .collect()
}

/// Names of tags of one kind
pub fn names_of_kind(source: &str, kind: TagKind) -> Vec<String> {
    tags_of(source)
        .into_iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.name)
        .collect()
}

/// Temporary source tree
pub struct TestRepo {
    dir: tempfile::TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `relative`, creating parent directories
    pub fn add_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }
}

/// Run the `ktags` binary in `cwd`
pub fn ktags(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ktags"))
        .args(args)
        .current_dir(cwd)
        .env_remove("KTAGS_FORMAT")
        .env_remove("KTAGS_KINDS")
        .env_remove("KTAGS_LOG")
        .output()
        .expect("run ktags")
}
