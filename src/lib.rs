//! tokscan - lexical token catalog
//!
//! # Overview
//! Strips line comments from source-like text, splits what remains into
//! keywords, identifiers, operators, delimiters and literals, and collects
//! the unique tokens of each kind.

pub mod catalog;
pub mod comment;
pub mod error;
pub mod lexer;

use std::path::Path;

pub use catalog::{CatalogEntry, CatalogReport, TokenCatalog};
pub use error::{Result, TokscanError};
pub use lexer::{LexicalTables, ScanOptions, Scanner, Token, TokenKind, DEFAULT_TABLES};

/// Strip the comment from one raw line and tokenize the rest
pub fn tokenize_line(line: &str, scanner: &Scanner) -> Vec<Token> {
    let cleaned = comment::strip_comment(line, scanner.tables().comment_marker());
    scanner.tokenize(cleaned)
}

/// Build a catalog from source text using the default tables
pub fn analyze(source: &str) -> TokenCatalog {
    analyze_with(source, &DEFAULT_TABLES, ScanOptions::default())
}

/// Build a catalog from source text, one line at a time
pub fn analyze_with(source: &str, tables: &LexicalTables, options: ScanOptions) -> TokenCatalog {
    let scanner = Scanner::new(tables, options);
    let mut catalog = TokenCatalog::new();
    for line in source.lines() {
        catalog.extend(&tokenize_line(line, &scanner));
    }
    catalog
}

/// Read a file and build its catalog
pub fn analyze_file(path: &Path, tables: &LexicalTables, options: ScanOptions) -> Result<TokenCatalog> {
    let source = std::fs::read_to_string(path)?;
    Ok(analyze_with(&source, tables, options))
}

/// Source text with every line's comment removed
pub fn clean_source(source: &str, marker: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for line in source.lines() {
        out.push_str(comment::strip_comment(line, marker));
        out.push('\n');
    }
    out
}
