//! Filesystem traversal that produces the accepted-path collection.

use crate::error::SnapdocError;
use crate::rules::RuleSet;
use std::fs;
use std::path::Path;

/// Walk the tree rooted at `root` and collect every non-ignored file as a
/// `/`-separated path relative to `root`.
///
/// Traversal is depth-first with each directory's entries visited in lexical
/// file-name order, so the result is deterministic. The rule set is consulted
/// for every entry; an ignored directory is pruned rather than descended
/// into, so nothing beneath it can reach the result, and an ignored file is
/// simply skipped. The root itself is never evaluated or emitted.
///
/// # Errors
///
/// Any traversal failure (missing root, unreadable directory or entry) aborts
/// the whole walk with [`SnapdocError::Walk`]; a partial listing is never
/// returned.
pub fn walk(root: &Path, rules: &RuleSet) -> Result<Vec<String>, SnapdocError> {
    let mut accepted = Vec::new();
    walk_dir(root, "", rules, &mut accepted)?;
    Ok(accepted)
}

fn walk_dir(
    dir: &Path,
    rel_dir: &str,
    rules: &RuleSet,
    accepted: &mut Vec<String>,
) -> Result<(), SnapdocError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| SnapdocError::walk(dir, e))? {
        entries.push(entry.map_err(|e| SnapdocError::walk(dir, e))?);
    }
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let rel = if rel_dir.is_empty() {
            name
        } else {
            format!("{rel_dir}/{name}")
        };
        // file_type does not follow symlinks, so a link to a directory is
        // treated as a plain entry rather than a cycle risk.
        let file_type = entry
            .file_type()
            .map_err(|e| SnapdocError::walk(entry.path(), e))?;
        let is_dir = file_type.is_dir();
        if rules.should_ignore(&rel, is_dir) {
            continue;
        }
        if is_dir {
            walk_dir(&entry.path(), &rel, rules, accepted)?;
        } else {
            accepted.push(rel);
        }
    }
    Ok(())
}
