//! Stateless lookups shared by the engine and the document renderer:
//! extension-based binary classification, syntax-highlight language tags and
//! byte-size formatting.

/// Lowercase extension of the final path segment, or `""` when there is none.
pub fn extension_of(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => String::new(),
    }
}

/// Whether a (lowercase, dot-free) extension is treated as binary without
/// looking at the file's bytes.
pub fn is_binary_extension(ext: &str) -> bool {
    matches!(
        ext,
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "ico" | "tiff" | "webp" | "svg"
            | "mp3" | "mp4" | "avi" | "mov" | "wmv" | "flv" | "webm" | "wav" | "flac"
            | "zip" | "rar" | "7z" | "tar" | "gz"
            | "pdf" | "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx"
            | "exe" | "dll" | "so" | "dylib"
            | "ttf" | "otf" | "woff" | "woff2"
            | "db" | "sqlite"
            | "jar" | "class"
            | "o" | "a" | "lib"
    )
}

/// Syntax-highlight tag for a (lowercase, dot-free) extension, `""` when
/// unknown; an untagged fence renders as plain text.
pub fn language_for_extension(ext: &str) -> &'static str {
    match ext {
        "go" => "go",
        "py" => "python",
        "js" => "javascript",
        "ts" => "typescript",
        "jsx" => "jsx",
        "tsx" => "tsx",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" => "cpp",
        "cs" => "csharp",
        "php" => "php",
        "rb" => "ruby",
        "swift" => "swift",
        "kt" => "kotlin",
        "rs" => "rust",
        "r" => "r",
        "scala" => "scala",
        "sh" | "bash" => "bash",
        "zsh" => "zsh",
        "fish" => "fish",
        "ps1" => "powershell",
        "sql" => "sql",
        "html" | "htm" => "html",
        "xml" => "xml",
        "css" => "css",
        "scss" => "scss",
        "sass" => "sass",
        "less" => "less",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "ini" | "cfg" => "ini",
        "conf" => "conf",
        "md" => "markdown",
        "rst" => "rst",
        "tex" => "latex",
        _ => "",
    }
}

/// Human-readable size: `512 B`, `1.5 KB`, `1.0 MB`, … (1024 divisor, one
/// decimal above the byte range).
pub fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{bytes} B");
    }
    let mut divisor = UNIT;
    let mut exponent = 0;
    let mut scaled = bytes / UNIT;
    while scaled >= UNIT {
        divisor *= UNIT;
        exponent += 1;
        scaled /= UNIT;
    }
    const SUFFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];
    format!("{:.1} {}B", bytes as f64 / divisor as f64, SUFFIXES[exponent])
}

/// Parse a human-readable size such as `200KB`, `2MB` or `1GB` into bytes; a
/// bare number is taken as bytes. Suffixes are case-insensitive. Values that
/// overflow `u64` are rejected.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let upper = s.trim().to_ascii_uppercase();
    let (digits, multiplier) = if let Some(d) = upper.strip_suffix("KB") {
        (d, 1024)
    } else if let Some(d) = upper.strip_suffix("MB") {
        (d, 1024 * 1024)
    } else if let Some(d) = upper.strip_suffix("GB") {
        (d, 1024 * 1024 * 1024)
    } else if let Some(d) = upper.strip_suffix('B') {
        (d, 1)
    } else {
        (upper.as_str(), 1)
    };
    let value: u64 = digits
        .trim()
        .parse()
        .map_err(|_| format!("invalid size: {}", s))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("invalid size: {}", s))
}
