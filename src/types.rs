use serde::{Deserialize, Serialize};

/// What a snapshot carries for one accepted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileContent {
    /// Full text content, lossily decoded as UTF-8.
    Text(String),
    /// Classified as binary (by extension or by sniffing); content omitted.
    Binary,
    /// Larger than the configured size limit; content omitted.
    Oversized,
    /// The file could not be read after the walk accepted it; carries the
    /// error text. The walk itself already succeeded, so this is reported
    /// per file instead of failing the snapshot.
    Unreadable(String),
}

/// A single accepted file with its relative path and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the scan root, `/`-separated.
    pub path: String,
    /// Size in bytes as reported by the filesystem.
    pub size: u64,
    /// The file's content or the reason it was omitted.
    pub content: FileContent,
}

/// The complete result of a snapshot run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Rendered directory tree of every accepted file.
    pub tree: String,
    /// Accepted files in walk order (depth-first, lexical per directory).
    pub files: Vec<FileEntry>,
}
