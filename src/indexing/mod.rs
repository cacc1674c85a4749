//! Multi-file tagging for the CLI
//!
//! Collects Kotlin sources from a directory tree and tags them in parallel
//! with a single shared [`KotlinParser`](crate::lang::KotlinParser).
//!
//! # Example
//!
//! ```ignore
//! use kotlin_tags::indexing::{collect_files, tag_files_parallel};
//!
//! let files = collect_files(&repo_dir, 10, &[]);
//! let result = tag_files_parallel(&files, &parser);
//!
//! println!("Tagged {} files, {} errors", result.files.len(), result.errors.len());
//! ```

mod files;
mod generation;

pub use files::{collect_files, collect_files_recursive, should_skip_path};
pub use generation::{tag_file, tag_files_parallel, FileTags, IndexResult};
