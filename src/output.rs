//! Document rendering for snapshots.
//!
//! Provides functions to render a [`Snapshot`] into the Markdown document
//! (tree block plus one section per file), a JSON dump, or the bare tree, and
//! to write the result to a file.

use crate::classify;
use crate::types::{FileContent, Snapshot};
use crate::SnapdocError;
use std::fs;
use std::path::Path;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Markdown,
    Json,
    Tree,
}

impl DocumentFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Markdown => "md",
            DocumentFormat::Json => "json",
            DocumentFormat::Tree => "txt",
        }
    }
}

/// Renders the snapshot into a string.
pub fn render_document(snapshot: &Snapshot, format: DocumentFormat, pretty: bool) -> String {
    match format {
        DocumentFormat::Markdown => render_markdown(snapshot),
        DocumentFormat::Json => render_json(snapshot, pretty),
        DocumentFormat::Tree => {
            let mut tree = snapshot.tree.clone();
            if !tree.ends_with('\n') {
                tree.push('\n');
            }
            tree
        }
    }
}

/// Renders the snapshot and writes it to a file.
pub fn write_document(
    snapshot: &Snapshot,
    format: DocumentFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), SnapdocError> {
    let content = render_document(snapshot, format, pretty);
    fs::write(&path, content).map_err(|e| SnapdocError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn render_markdown(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("# Project Structure\n\n```\n");
    out.push_str(&snapshot.tree);
    if !snapshot.tree.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n\n# Files\n\n");

    for file in &snapshot.files {
        out.push_str(&format!("## {}\n", file.path));
        match &file.content {
            FileContent::Text(body) => {
                let lang = classify::language_for_extension(&classify::extension_of(&file.path));
                out.push_str(&format!("```{lang}\n"));
                out.push_str(body);
                if !body.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n\n");
            }
            FileContent::Binary => {
                out.push_str(&format!(
                    "*Binary file ({})*\n\n",
                    classify::format_size(file.size)
                ));
            }
            FileContent::Oversized => {
                out.push_str(&format!(
                    "*File too large ({}) - content omitted*\n\n",
                    classify::format_size(file.size)
                ));
            }
            FileContent::Unreadable(reason) => {
                out.push_str(&format!("*Could not read file: {reason}*\n\n"));
            }
        }
    }
    out
}

fn render_json(snapshot: &Snapshot, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(snapshot).expect("JSON serialization failed")
    } else {
        serde_json::to_string(snapshot).expect("JSON serialization failed")
    }
}
