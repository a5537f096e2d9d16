//! Gitignore-style ignore rules: parsing, matching and evaluation.
//!
//! A [`RuleSet`] combines two exclusion sources with deliberately different
//! matching strategies: ordered glob rules parsed from ignore-file lines, and
//! the built-in substring safety net seeded from [`DEFAULT_EXCLUDES`]. Rules
//! are evaluated in insertion order and every matching rule overwrites the
//! running decision, so later rules win: a `!` rule can re-include a path an
//! earlier rule ignored.

/// Built-in exclusion list for well-known noise files and directories.
///
/// Applied ahead of any user rules; see [`RuleSet::with_defaults`].
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    ".DS_Store",
    "Thumbs.db",
    "*.swp",
    "*.swo",
    "*~",
    ".idea",
    ".vscode",
    "*.pyc",
    "__pycache__",
    "node_modules",
    ".env",
    ".env.local",
    "*.log",
    "dist",
    "build",
    "target",
    "*.exe",
    "*.dll",
    "*.so",
    "*.dylib",
];

/// One parsed ignore-pattern entry with its modifier flags.
///
/// Pattern lines support:
/// - `*` - matches any run of characters within one path segment
/// - `?` - matches exactly one character, never `/`
/// - `**` - matches any number of whole segments (`**/foo`, `src/**`, `a/**/b`)
/// - leading `!` - a match re-includes the path instead of ignoring it
/// - leading `/` - anchors the pattern to the scan root
/// - trailing `/` - restricts the pattern to directories
///
/// There are no character classes; `[` matches itself. Matching is
/// case-sensitive throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Pattern body after stripping the `!`, leading-`/` and trailing-`/` markers.
    pub text: String,
    /// A match un-ignores the path instead of ignoring it.
    pub negated: bool,
    /// The pattern must match starting at the scan root.
    pub anchored: bool,
    /// The pattern only applies when the candidate is a directory.
    pub dir_only: bool,
}

impl Rule {
    /// Parse one line of an ignore file.
    ///
    /// Blank lines and `#` comments yield `None`. Malformed patterns never
    /// error; the worst case is a rule that matches nothing.
    pub fn parse(line: &str) -> Option<Self> {
        let mut text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            return None;
        }
        let mut negated = false;
        if let Some(rest) = text.strip_prefix('!') {
            negated = true;
            text = rest;
        }
        let mut anchored = false;
        if let Some(rest) = text.strip_prefix('/') {
            anchored = true;
            text = rest;
        }
        let mut dir_only = false;
        if let Some(rest) = text.strip_suffix('/') {
            dir_only = true;
            text = rest;
        }
        Some(Self {
            text: text.to_string(),
            negated,
            anchored,
            dir_only,
        })
    }

    /// Decide whether this rule matches `path`, a `/`-separated path relative
    /// to the scan root.
    pub fn matches(&self, path: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        if !self.text.contains('/') {
            // Bare pattern: match a single segment at any depth, or only the
            // first segment when anchored.
            if self.anchored {
                return path
                    .split('/')
                    .next()
                    .is_some_and(|first| glob_match(&self.text, first));
            }
            return path.split('/').any(|segment| glob_match(&self.text, segment));
        }
        if self.anchored {
            return path_glob_match(&self.text, path);
        }
        // Unanchored path pattern: try the full path, then every suffix with
        // the leading segments removed, so the pattern can match at any depth.
        let mut suffix = path;
        loop {
            if path_glob_match(&self.text, suffix) {
                return true;
            }
            match suffix.split_once('/') {
                Some((_, rest)) => suffix = rest,
                None => return false,
            }
        }
    }
}

/// Ordered ignore rules plus the built-in substring safety net.
///
/// Evaluation per [`RuleSet::should_ignore`]: every rule is consulted in
/// order and the last matching rule decides; if no rule ignored the path, any
/// built-in token contained anywhere in it still does. The containment test
/// is intentionally coarser than rule matching: a token `build` also ignores
/// `rebuild-notes.txt`.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    builtins: Vec<String>,
}

impl RuleSet {
    /// An empty rule set that ignores nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A rule set seeded with [`DEFAULT_EXCLUDES`].
    ///
    /// Every default token is registered twice: parsed as a glob rule, so
    /// `*.log` works as a pattern, and kept verbatim as a substring token, so
    /// `build` also catches paths that merely embed it.
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        for token in DEFAULT_EXCLUDES {
            set.add_line(token);
            set.add_builtin(*token);
        }
        set
    }

    /// Parse one ignore-file line and append it as a rule.
    ///
    /// Returns false when the line was a blank or a comment.
    pub fn add_line(&mut self, line: &str) -> bool {
        match Rule::parse(line) {
            Some(rule) => {
                self.rules.push(rule);
                true
            }
            None => false,
        }
    }

    /// Append every pattern line of an ignore-file body, in file order.
    pub fn add_lines(&mut self, contents: &str) {
        for line in contents.lines() {
            self.add_line(line);
        }
    }

    /// Append a substring token to the built-in safety net.
    pub fn add_builtin(&mut self, token: impl Into<String>) {
        self.builtins.push(token.into());
    }

    /// Number of parsed glob rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.builtins.is_empty()
    }

    /// Decide whether `path` should be excluded from the snapshot.
    ///
    /// Later rules override earlier ones, so the loop never exits early; a
    /// negated rule can lift a built-in glob rule's match, but the substring
    /// net is checked afterwards and cannot be negated away.
    pub fn should_ignore(&self, path: &str, is_dir: bool) -> bool {
        let mut ignored = false;
        for rule in &self.rules {
            if rule.matches(path, is_dir) {
                ignored = !rule.negated;
            }
        }
        if !ignored {
            ignored = self
                .builtins
                .iter()
                .any(|token| path.contains(token.as_str()));
        }
        ignored
    }
}

/// Match a pattern containing separators against a full relative path.
///
/// A pattern that names a directory also matches everything beneath it.
fn path_glob_match(pattern: &str, path: &str) -> bool {
    glob_match(pattern, path)
        || path == pattern
        || path
            .strip_prefix(pattern)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Minimal glob matcher over the supported subset.
///
/// `*` stops at separators, `?` consumes one non-separator character, and
/// `**` spans segments: `**/` eats zero or more whole leading segments, a
/// trailing `**` swallows the remainder, and an embedded `**` matches any run
/// including separators.
fn glob_match(pattern: &str, text: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix("**") {
        if rest.is_empty() {
            return true;
        }
        if let Some(tail) = rest.strip_prefix('/') {
            if glob_match(tail, text) {
                return true;
            }
            return match text.split_once('/') {
                Some((_, deeper)) => glob_match(pattern, deeper),
                None => false,
            };
        }
        let mut remainder = text;
        loop {
            if glob_match(rest, remainder) {
                return true;
            }
            match remainder.chars().next() {
                Some(c) => remainder = &remainder[c.len_utf8()..],
                None => return false,
            }
        }
    }
    let mut pattern_chars = pattern.chars();
    match pattern_chars.next() {
        None => text.is_empty(),
        Some('*') => {
            let rest = pattern_chars.as_str();
            let mut remainder = text;
            loop {
                if glob_match(rest, remainder) {
                    return true;
                }
                match remainder.chars().next() {
                    Some(c) if c != '/' => remainder = &remainder[c.len_utf8()..],
                    _ => return false,
                }
            }
        }
        Some('?') => {
            let rest = pattern_chars.as_str();
            match text.chars().next() {
                Some(c) if c != '/' => glob_match(rest, &text[c.len_utf8()..]),
                _ => false,
            }
        }
        Some(expected) => {
            let rest = pattern_chars.as_str();
            match text.chars().next() {
                Some(c) if c == expected => glob_match(rest, &text[c.len_utf8()..]),
                _ => false,
            }
        }
    }
}
