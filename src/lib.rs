//! # Snapdoc
//!
//! `snapdoc` snapshots a directory tree into a single human-readable document:
//! it walks the tree applying gitignore-style ignore rules, renders the
//! surviving files as a directory tree, and pairs that with one content
//! section per file (full text for text files, a notice for binaries and
//! oversized files).
//!
//! Rules come from a built-in exclusion list, from `.gitignore` and
//! `.snapdocignore` at the scan root, and from caller-supplied patterns, in
//! that order; later rules win, and `!` patterns re-include paths. An ignored
//! directory is pruned without being descended into.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use snapdoc::output::{render_document, DocumentFormat};
//! use snapdoc::{snapshot, SnapdocBuilder};
//!
//! let options = SnapdocBuilder::new(".")
//!     .max_file_size(512 * 1024)
//!     .extra_patterns(vec!["*.tmp".into()])
//!     .build();
//!
//! let snap = snapshot(options).expect("failed to snapshot directory");
//!
//! println!("{}", snap.tree);
//! println!("{}", render_document(&snap, DocumentFormat::Markdown, false));
//! ```

mod classify;
mod engine;
mod error;
mod options;
pub mod output;
mod rules;
mod tree;
mod types;
mod walk;

pub use classify::{format_size, is_binary_extension, language_for_extension, parse_size};
pub use engine::{snapshot, IGNORE_FILE};
pub use error::SnapdocError;
pub use options::{BinaryDetection, SnapdocBuilder, SnapdocOptions, DEFAULT_MAX_FILE_SIZE};
pub use rules::{Rule, RuleSet, DEFAULT_EXCLUDES};
pub use tree::render_tree;
pub use types::{FileContent, FileEntry, Snapshot};
pub use walk::walk;
