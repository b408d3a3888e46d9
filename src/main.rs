//! tokscan CLI - token catalog for source-like text

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokscan::{comment, tokenize_line, LexicalTables, ScanOptions, Scanner, TokenCatalog};

/// tokscan - group the unique tokens of a file by kind
#[derive(Parser, Debug)]
#[command(name = "tks")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List the keywords, identifiers, operators, delimiters and literals of a file", long_about = None)]
struct Cli {
    /// Input file
    #[arg(value_name = "INPUT", default_value = "file.txt")]
    input: PathBuf,

    /// JSON file overriding the keyword/operator/delimiter tables
    #[arg(long, value_name = "JSON")]
    tables: Option<PathBuf>,

    /// Treat the quote character as an ordinary character
    #[arg(long)]
    no_strings: bool,

    /// Print the catalog as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Echo the source listing before the catalog
    #[arg(short, long)]
    listing: bool,

    /// Write the comment-stripped source to this file
    #[arg(long, value_name = "PATH")]
    cleaned: Option<PathBuf>,

    /// Show debug information
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        eprintln!("[DEBUG] Input: {:?}", cli.input);
        eprintln!("[DEBUG] Tables: {:?}", cli.tables);
    }

    let tables = match &cli.tables {
        Some(path) => LexicalTables::from_file(path)
            .with_context(|| format!("Unable to load tables from {}", path.display()))?,
        None => LexicalTables::default(),
    };

    let source = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Unable to open input file {}", cli.input.display()))?;

    if cli.debug {
        eprintln!("[DEBUG] Source length: {} bytes", source.len());
    }

    let marker = tables.comment_marker();

    if cli.listing {
        for line in comment::source_listing(&source, marker) {
            println!("{line}");
        }
    }

    if let Some(path) = &cli.cleaned {
        std::fs::write(path, tokscan::clean_source(&source, marker))
            .with_context(|| format!("Unable to write cleaned source to {}", path.display()))?;
    }

    let options = ScanOptions {
        string_literals: !cli.no_strings,
    };
    let scanner = Scanner::new(&tables, options);
    let mut catalog = TokenCatalog::new();
    for (n, line) in source.lines().enumerate() {
        let tokens = tokenize_line(line, &scanner);
        if cli.debug {
            eprintln!("[DEBUG] Line {}: {} tokens", n + 1, tokens.len());
        }
        catalog.extend(&tokens);
    }

    let report = catalog.finalize();
    if cli.json {
        println!("{}", report.to_json());
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
