//! Command-line interface for snapdoc.
//!
//! Walks a directory tree with the configured ignore rules and writes the
//! resulting snapshot document to a file (or stdout).

use clap::{Parser, ValueEnum};
use snapdoc::output::{render_document, write_document, DocumentFormat};
use snapdoc::{
    BinaryDetection, FileContent, Snapshot, SnapdocBuilder, SnapdocOptions, parse_size, snapshot,
};
use std::path::PathBuf;
use std::process::exit;

/// snapdoc — snapshot a directory tree into a single document
#[derive(Parser)]
#[command(name = "snapdoc", version, about, long_about = None)]
struct Cli {
    /// Directory to snapshot (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file; defaults to `project` with the format's extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Document format
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Largest file whose content is included, e.g. 200KB or 2MB
    #[arg(long = "max-size", default_value = "1MB", value_parser = parse_size)]
    max_size: u64,

    /// Extra ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Skip the built-in exclusion list
    #[arg(long)]
    no_default_rules: bool,

    /// Do not read .gitignore / .snapdocignore at the root
    #[arg(long)]
    no_ignore_files: bool,

    /// Binary detection strategy
    #[arg(long, default_value = "accurate", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
    Tree,
}

impl Format {
    fn document_format(self) -> DocumentFormat {
        match self {
            Format::Markdown => DocumentFormat::Markdown,
            Format::Json => DocumentFormat::Json,
            Format::Tree => DocumentFormat::Tree,
        }
    }
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

struct Emit {
    format: DocumentFormat,
    output: PathBuf,
    stdout: bool,
    pretty: bool,
}

impl Cli {
    fn into_options(self) -> (SnapdocOptions, Emit) {
        let options = SnapdocBuilder::new(self.root)
            .max_file_size(self.max_size)
            .binary_detection(self.binary_detection)
            .use_default_rules(!self.no_default_rules)
            .read_ignore_files(!self.no_ignore_files)
            .extra_patterns(self.ignore)
            .build();
        let format = self.format.document_format();
        let output = self
            .output
            .unwrap_or_else(|| PathBuf::from(format!("project.{}", format.extension())));
        let emit = Emit {
            format,
            output,
            stdout: self.stdout,
            pretty: self.pretty,
        };
        (options, emit)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, emit) = cli.into_options();

    let snap = match snapshot(options) {
        Ok(snap) => snap,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    warn_unreadable(&snap);

    if emit.stdout {
        print!("{}", render_document(&snap, emit.format, emit.pretty));
        return;
    }
    if let Err(e) = write_document(&snap, emit.format, &emit.output, emit.pretty) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!("Successfully generated {}", emit.output.display());
}

fn warn_unreadable(snap: &Snapshot) {
    for file in &snap.files {
        if let FileContent::Unreadable(reason) = &file.content {
            eprintln!("Warning: failed to read {}: {}", file.path, reason);
        }
    }
}
