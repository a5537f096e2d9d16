use snapdoc::output::{render_document, DocumentFormat};
use snapdoc::{
    snapshot, walk, BinaryDetection, FileContent, RuleSet, SnapdocBuilder, SnapdocError,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn walk_collects_files_depth_first_in_lexical_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("zeta.txt"), "z").unwrap();
    fs::write(dir.path().join("alpha.txt"), "a").unwrap();
    fs::create_dir(dir.path().join("mid")).unwrap();
    fs::write(dir.path().join("mid/inner.txt"), "i").unwrap();

    let accepted = walk(dir.path(), &RuleSet::new()).unwrap();
    assert_eq!(accepted, vec!["alpha.txt", "mid/inner.txt", "zeta.txt"]);
}

#[test]
fn walk_skips_ignored_files_and_prunes_ignored_directories() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("keep.txt"), "k").unwrap();
    fs::write(dir.path().join("drop.tmp"), "d").unwrap();
    fs::create_dir(dir.path().join("vendor")).unwrap();
    fs::write(dir.path().join("vendor/lib.txt"), "v").unwrap();

    let mut rules = RuleSet::new();
    rules.add_line("*.tmp");
    rules.add_line("vendor/");
    let accepted = walk(dir.path(), &rules).unwrap();
    assert_eq!(accepted, vec!["keep.txt"]);
}

#[test]
fn pruned_directory_cannot_be_reentered_by_negation() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("vendor")).unwrap();
    fs::write(dir.path().join("vendor/keep.txt"), "k").unwrap();

    let mut rules = RuleSet::new();
    rules.add_line("vendor/");
    rules.add_line("!vendor/keep.txt");
    let accepted = walk(dir.path(), &rules).unwrap();
    assert!(accepted.is_empty());
}

#[test]
fn walk_fails_when_root_is_missing() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = walk(&missing, &RuleSet::new()).unwrap_err();
    assert!(matches!(err, SnapdocError::Walk { .. }));
}

#[test]
fn builtin_excludes_prune_well_known_noise() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("frontend/node_modules/pkg")).unwrap();
    fs::write(dir.path().join("frontend/node_modules/pkg/lib.js"), "x").unwrap();
    fs::write(dir.path().join("frontend/app.js"), "app").unwrap();

    let options = SnapdocBuilder::new(dir.path()).build();
    let result = snapshot(options).unwrap();
    let paths: Vec<_> = result.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["frontend/app.js"]);
    assert!(!result.tree.contains("node_modules"));
}

#[test]
fn gitignore_rules_apply_with_negation() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "*.log\n!keep.log\n").unwrap();
    fs::write(dir.path().join("keep.log"), "kept").unwrap();
    fs::write(dir.path().join("other.log"), "dropped").unwrap();
    fs::write(dir.path().join("notes.txt"), "text").unwrap();

    let options = SnapdocBuilder::new(dir.path()).build();
    let result = snapshot(options).unwrap();
    let paths: Vec<_> = result.files.iter().map(|f| f.path.as_str()).collect();
    // .gitignore itself is suppressed by the built-in ".git" substring token.
    assert_eq!(paths, vec!["keep.log", "notes.txt"]);
}

#[test]
fn tool_ignore_file_is_read_after_gitignore() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "secret/\n").unwrap();
    fs::write(dir.path().join(snapdoc::IGNORE_FILE), "!secret/\n*.txt\n").unwrap();
    fs::create_dir(dir.path().join("secret")).unwrap();
    fs::write(dir.path().join("secret/inner.md"), "inner").unwrap();
    fs::write(dir.path().join("readme.txt"), "readme").unwrap();

    let options = SnapdocBuilder::new(dir.path()).build();
    let result = snapshot(options).unwrap();
    let paths: Vec<_> = result.files.iter().map(|f| f.path.as_str()).collect();
    // .gitignore is caught by the built-in ".git" token; the tool file is an
    // ordinary file and stays unless a rule excludes it. Its negation
    // re-included the directory and its *.txt rule dropped the text file.
    assert_eq!(paths, vec![".snapdocignore", "secret/inner.md"]);
}

#[test]
fn extra_patterns_apply_last() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("b.tmp"), "b").unwrap();

    let options = SnapdocBuilder::new(dir.path())
        .extra_patterns(vec!["*.tmp".into()])
        .build();
    let result = snapshot(options).unwrap();
    let paths: Vec<_> = result.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["a.txt"]);
}

#[test]
fn disabled_rule_sources_accept_everything() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "*.txt\n").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();

    let options = SnapdocBuilder::new(dir.path())
        .use_default_rules(false)
        .read_ignore_files(false)
        .build();
    let result = snapshot(options).unwrap();
    let paths: Vec<_> = result.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec![".gitignore", "a.txt"]);
}

#[test]
fn empty_directories_never_appear_in_the_tree() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();

    let options = SnapdocBuilder::new(dir.path()).build();
    let result = snapshot(options).unwrap();
    assert!(result.tree.contains("a.txt"));
    assert!(!result.tree.contains("empty"));
}

#[test]
fn oversized_files_keep_only_a_size_notice() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("big.txt"), "A".repeat(5000)).unwrap();

    let options = SnapdocBuilder::new(dir.path()).max_file_size(100).build();
    let result = snapshot(options).unwrap();
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].size, 5000);
    assert_eq!(result.files[0].content, FileContent::Oversized);

    let document = render_document(&result, DocumentFormat::Markdown, false);
    assert!(document.contains("*File too large (4.9 KB) - content omitted*"));
}

#[test]
fn binary_detection_by_content() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("blob.dat"), [0u8, 1, 2, 3]).unwrap();

    let options = SnapdocBuilder::new(dir.path())
        .binary_detection(BinaryDetection::Simple)
        .build();
    let result = snapshot(options).unwrap();
    assert_eq!(result.files[0].content, FileContent::Binary);
}

#[test]
fn binary_detection_by_extension_alone() {
    let dir = tempdir().unwrap();
    // Plain text body, but the extension table wins without sniffing.
    fs::write(dir.path().join("image.png"), "not really an image").unwrap();

    let options = SnapdocBuilder::new(dir.path())
        .binary_detection(BinaryDetection::None)
        .build();
    let result = snapshot(options).unwrap();
    assert_eq!(result.files[0].content, FileContent::Binary);
}

#[test]
fn text_files_keep_their_content() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), "hello world").unwrap();

    let options = SnapdocBuilder::new(dir.path())
        .binary_detection(BinaryDetection::None)
        .build();
    let result = snapshot(options).unwrap();
    assert_eq!(result.files.len(), 1);
    assert_eq!(
        result.files[0].content,
        FileContent::Text("hello world".into())
    );
    assert_eq!(result.files[0].size, 11);
}

#[cfg(unix)]
#[test]
fn read_failures_keep_an_unreadable_entry_without_aborting() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ok.txt"), "fine").unwrap();
    // A dangling link passes the walk (entry type is taken without following
    // the link) and then fails the content read.
    std::os::unix::fs::symlink("missing-target", dir.path().join("broken.txt")).unwrap();

    let options = SnapdocBuilder::new(dir.path()).build();
    let result = snapshot(options).unwrap();
    let paths: Vec<_> = result.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["broken.txt", "ok.txt"]);
    assert!(matches!(result.files[0].content, FileContent::Unreadable(_)));
    assert_eq!(result.files[1].content, FileContent::Text("fine".into()));

    let document = render_document(&result, DocumentFormat::Markdown, false);
    assert!(document.contains("## broken.txt\n*Could not read file: "));
    assert!(document.contains("## ok.txt\n```\nfine\n```\n\n"));
}

#[test]
fn markdown_document_has_tree_and_tagged_sections() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "pub fn answer() -> u32 { 42 }").unwrap();
    fs::write(dir.path().join("README.md"), "# readme\n").unwrap();

    let options = SnapdocBuilder::new(dir.path()).build();
    let result = snapshot(options).unwrap();
    let document = render_document(&result, DocumentFormat::Markdown, false);

    assert!(document.starts_with("# Project Structure\n\n```\n.\n"));
    assert!(document.contains("# Files\n\n"));
    assert!(document.contains("## README.md\n```markdown\n# readme\n```\n\n"));
    assert!(document.contains("## src/lib.rs\n```rust\npub fn answer() -> u32 { 42 }\n```\n\n"));
}

#[test]
fn json_document_round_trips() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();

    let options = SnapdocBuilder::new(dir.path()).build();
    let result = snapshot(options).unwrap();
    let json = render_document(&result, DocumentFormat::Json, false);
    let parsed: snapdoc::Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.files.len(), result.files.len());
    assert_eq!(parsed.tree, result.tree);
}

#[test]
fn document_formats_carry_conventional_extensions() {
    assert_eq!(DocumentFormat::Markdown.extension(), "md");
    assert_eq!(DocumentFormat::Json.extension(), "json");
    assert_eq!(DocumentFormat::Tree.extension(), "txt");
}

#[test]
fn snapshot_is_deterministic_across_runs() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/a.rs"), "a").unwrap();
    fs::write(dir.path().join("src/b.rs"), "b").unwrap();
    fs::write(dir.path().join("top.txt"), "t").unwrap();

    let first = snapshot(SnapdocBuilder::new(dir.path()).build()).unwrap();
    let second = snapshot(SnapdocBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(
        render_document(&first, DocumentFormat::Markdown, false),
        render_document(&second, DocumentFormat::Markdown, false)
    );
}
