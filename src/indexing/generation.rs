//! Parallel tag generation across files

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{KtagsError, Result};
use crate::lang::{KotlinParser, Lang};
use crate::tag::Tag;

/// Tags found in one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTags {
    pub path: PathBuf,
    pub lang: Lang,
    pub tags: Vec<Tag>,
}

/// Outcome of tagging a batch of files
#[derive(Debug, Default)]
pub struct IndexResult {
    /// Successfully tagged files, in input order
    pub files: Vec<FileTags>,
    /// Files that could not be read
    pub errors: Vec<(PathBuf, KtagsError)>,
    pub total_bytes: usize,
}

impl IndexResult {
    pub fn tag_count(&self) -> usize {
        self.files.iter().map(|f| f.tags.len()).sum()
    }
}

/// Read and tag a single file
pub fn tag_file(path: &Path, parser: &KotlinParser) -> Result<(FileTags, usize)> {
    if !path.exists() {
        return Err(KtagsError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let lang = Lang::from_path(path)?;
    let source = fs::read(path)?;

    let tags = parser.tags(&source);
    debug!(file = %path.display(), tags = tags.len(), bytes = source.len(), "tagged");

    Ok((
        FileTags {
            path: path.to_path_buf(),
            lang,
            tags,
        },
        source.len(),
    ))
}

/// Tag every file in parallel.
///
/// Per-file failures are collected in [`IndexResult::errors`] and never stop
/// the batch.
pub fn tag_files_parallel(files: &[PathBuf], parser: &KotlinParser) -> IndexResult {
    let start = std::time::Instant::now();

    let outcomes: Vec<(PathBuf, Result<(FileTags, usize)>)> = files
        .par_iter()
        .map(|path| (path.clone(), tag_file(path, parser)))
        .collect();

    let mut result = IndexResult::default();
    for (path, outcome) in outcomes {
        match outcome {
            Ok((file, bytes)) => {
                result.total_bytes += bytes;
                result.files.push(file);
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping file");
                result.errors.push((path, e));
            }
        }
    }

    info!(
        files = result.files.len(),
        errors = result.errors.len(),
        tags = result.tag_count(),
        bytes = result.total_bytes,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "tagging complete"
    );

    result
}
