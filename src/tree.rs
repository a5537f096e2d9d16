//! Renders a flat list of accepted paths as a nested directory tree.
//!
//! The renderer is a pure function of the path strings: it never touches the
//! filesystem, and the tree it prints contains exactly the accepted files plus
//! the directories that are ancestors of at least one of them. Ignored files
//! and empty directories can therefore never appear.

use std::collections::{BTreeMap, BTreeSet};

/// Render accepted relative paths as box-drawing tree text.
///
/// Sub-directory names carry a trailing `/` to keep them distinct from file
/// names; siblings at each level print in lexicographic order, which makes
/// the output deterministic for identical input. The result always ends with
/// a newline.
///
/// ```
/// let tree = snapdoc::render_tree(&["src/lib.rs".into(), "README.md".into()]);
/// assert_eq!(tree, ".\n├── README.md\n└── src/\n    └── lib.rs\n");
/// ```
pub fn render_tree(paths: &[String]) -> String {
    let children = index_children(paths);
    let mut out = String::from(".\n");
    render_level(&children, "", "", &mut out);
    out
}

/// Group paths into a parent-directory → direct-children index, keyed by the
/// parent's relative path (`""` for the root).
fn index_children(paths: &[String]) -> BTreeMap<String, BTreeSet<String>> {
    let mut children: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for path in paths {
        let mut parent = String::new();
        let mut segments = path.split('/').peekable();
        while let Some(segment) = segments.next() {
            let is_file = segments.peek().is_none();
            let name = if is_file {
                segment.to_string()
            } else {
                format!("{segment}/")
            };
            children.entry(parent.clone()).or_default().insert(name);
            if !is_file {
                if !parent.is_empty() {
                    parent.push('/');
                }
                parent.push_str(segment);
            }
        }
    }
    children
}

fn render_level(
    children: &BTreeMap<String, BTreeSet<String>>,
    dir: &str,
    prefix: &str,
    out: &mut String,
) {
    let Some(entries) = children.get(dir) else {
        return;
    };
    for (position, name) in entries.iter().enumerate() {
        let is_last = position + 1 == entries.len();
        out.push_str(prefix);
        out.push_str(if is_last { "└── " } else { "├── " });
        out.push_str(name);
        out.push('\n');
        if let Some(sub) = name.strip_suffix('/') {
            let child_dir = if dir.is_empty() {
                sub.to_string()
            } else {
                format!("{dir}/{sub}")
            };
            let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            render_level(children, &child_dir, &child_prefix, out);
        }
    }
}
