use crate::classify;
use crate::error::SnapdocError;
use crate::options::{BinaryDetection, SnapdocOptions};
use crate::rules::RuleSet;
use crate::tree::render_tree;
use crate::types::{FileContent, FileEntry, Snapshot};
use crate::walk::walk;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

/// Tool-specific ignore file consulted at the scan root, after `.gitignore`.
pub const IGNORE_FILE: &str = ".snapdocignore";

const GITIGNORE_FILE: &str = ".gitignore";

/// Bytes read from the head of each file for binary sniffing.
const SNIFF_LEN: u64 = 8192;

/// Snapshot the directory tree described by `options`.
///
/// Builds the rule set (built-ins, then the two optional ignore files at the
/// root, then any extra patterns), walks the tree, renders the tree view and
/// reads every accepted file. Traversal failures abort with an error; a file
/// that fails to read after the walk accepted it becomes an
/// [`FileContent::Unreadable`] entry instead of failing the run.
pub fn snapshot(options: SnapdocOptions) -> Result<Snapshot, SnapdocError> {
    #[cfg(feature = "logging")]
    tracing::debug!("starting snapshot of {}", options.root.display());
    let rules = load_rules(&options);
    let paths = walk(&options.root, &rules)?;
    let tree = render_tree(&paths);
    let mut files = Vec::with_capacity(paths.len());
    for rel in paths {
        let full = options.root.join(&rel);
        files.push(read_entry(&full, rel, &options));
    }
    Ok(Snapshot { tree, files })
}

fn load_rules(options: &SnapdocOptions) -> RuleSet {
    let mut rules = if options.use_default_rules {
        RuleSet::with_defaults()
    } else {
        RuleSet::new()
    };
    if options.read_ignore_files {
        load_ignore_file(&mut rules, &options.root.join(GITIGNORE_FILE));
        load_ignore_file(&mut rules, &options.root.join(IGNORE_FILE));
    }
    for pattern in &options.extra_patterns {
        rules.add_line(pattern);
    }
    #[cfg(feature = "logging")]
    tracing::debug!("rule set ready with {} glob rules", rules.len());
    rules
}

// A missing or unreadable ignore file is skipped, not an error.
fn load_ignore_file(rules: &mut RuleSet, path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };
    rules.add_lines(&contents);
    #[cfg(feature = "logging")]
    tracing::debug!("loaded ignore rules from {}", path.display());
}

fn read_entry(full: &Path, rel: String, options: &SnapdocOptions) -> FileEntry {
    match read_content(full, &rel, options) {
        Ok((size, content)) => FileEntry {
            path: rel,
            size,
            content,
        },
        Err(error) => {
            #[cfg(feature = "logging")]
            tracing::warn!("failed to read {}: {}", full.display(), error);
            FileEntry {
                path: rel,
                size: 0,
                content: FileContent::Unreadable(error.to_string()),
            }
        }
    }
}

fn read_content(
    full: &Path,
    rel: &str,
    options: &SnapdocOptions,
) -> Result<(u64, FileContent), SnapdocError> {
    let metadata = fs::metadata(full).map_err(|e| SnapdocError::io(full, e))?;
    let size = metadata.len();

    if classify::is_binary_extension(&classify::extension_of(rel)) {
        return Ok((size, FileContent::Binary));
    }

    let file = File::open(full).map_err(|e| SnapdocError::io(full, e))?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(SNIFF_LEN as usize);
    reader
        .by_ref()
        .take(SNIFF_LEN)
        .read_to_end(&mut bytes)
        .map_err(|e| SnapdocError::io(full, e))?;
    let is_binary = match options.binary_detection {
        BinaryDetection::Simple => bytes.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(&bytes).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        #[cfg(feature = "logging")]
        tracing::debug!("binary file detected: {}", full.display());
        return Ok((size, FileContent::Binary));
    }

    // The binary check deliberately precedes the size check: an oversized
    // binary is still reported as binary.
    if size > options.max_file_size {
        #[cfg(feature = "logging")]
        tracing::debug!(
            "file too large ({} > {}), content omitted",
            size,
            options.max_file_size
        );
        return Ok((size, FileContent::Oversized));
    }

    reader
        .read_to_end(&mut bytes)
        .map_err(|e| SnapdocError::io(full, e))?;
    Ok((size, FileContent::Text(String::from_utf8_lossy(&bytes).into_owned())))
}
