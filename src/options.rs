use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Size limit applied when no other value is configured: 1 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// How file bodies are checked for binary content.
///
/// The binary-extension table is always consulted first; this strategy only
/// governs what happens to files the table does not settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// A NUL byte in the head of the file marks it binary.
    Simple,
    /// Inspect the head with `content_inspector`.
    Accurate,
    /// Trust the extension table alone.
    None,
}

/// Configuration for one snapshot run; immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapdocOptions {
    /// Directory to snapshot.
    pub root: PathBuf,
    /// Files larger than this keep only a size notice in the document.
    pub max_file_size: u64,
    /// Strategy for sniffing binaries beyond the extension table.
    pub binary_detection: BinaryDetection,
    /// Seed the rule set with the built-in exclusion list.
    pub use_default_rules: bool,
    /// Read `.gitignore` and `.snapdocignore` at the scan root.
    pub read_ignore_files: bool,
    /// Extra pattern lines appended after the ignore-file rules.
    pub extra_patterns: Vec<String>,
}

impl Default for SnapdocOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            binary_detection: BinaryDetection::Accurate,
            use_default_rules: true,
            read_ignore_files: true,
            extra_patterns: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SnapdocBuilder {
    options: SnapdocOptions,
}

impl SnapdocBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SnapdocOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn max_file_size(mut self, limit: u64) -> Self {
        self.options.max_file_size = limit;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn use_default_rules(mut self, yes: bool) -> Self {
        self.options.use_default_rules = yes;
        self
    }
    pub fn read_ignore_files(mut self, yes: bool) -> Self {
        self.options.read_ignore_files = yes;
        self
    }
    pub fn extra_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.extra_patterns = patterns;
        self
    }
    pub fn build(self) -> SnapdocOptions {
        self.options
    }
}
