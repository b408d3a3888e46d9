//! Static lexical tables
//!
//! Keyword, operator, delimiter and whitespace sets consulted by the scanner
//! and the classifier. The default tables are built once per process and
//! never mutated; alternate tables can be loaded from a JSON document.

use crate::error::{Result, TokscanError};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

pub const DEFAULT_KEYWORDS: &[&str] = &["def", "return", "print", "int"];

pub const DEFAULT_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "<", ">", "+=", "-=", "*=", "/=", "%=", "==", "!=", "<=", ">=",
    "&&", "||", "++", "--", "<<", ">>",
];

pub const DEFAULT_DELIMITERS: &str = ",;(){}";
pub const DEFAULT_WHITESPACE: &str = " \t\n";
pub const DEFAULT_QUOTE: char = '"';
pub const DEFAULT_ESCAPE: char = '\\';
pub const DEFAULT_COMMENT_MARKER: &str = "//";

/// Longest operator the scanner can munch
pub const MAX_OPERATOR_LEN: usize = 2;

/// Tables shared by every scan in the process
pub static DEFAULT_TABLES: Lazy<LexicalTables> = Lazy::new(LexicalTables::default);

/// Serialized form of [`LexicalTables`]; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablesConfig {
    pub keywords: Vec<String>,
    pub operators: Vec<String>,
    pub delimiters: String,
    pub whitespace: String,
    pub quote: char,
    pub escape: char,
    pub comment_marker: String,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            operators: DEFAULT_OPERATORS.iter().map(|s| s.to_string()).collect(),
            delimiters: DEFAULT_DELIMITERS.to_string(),
            whitespace: DEFAULT_WHITESPACE.to_string(),
            quote: DEFAULT_QUOTE,
            escape: DEFAULT_ESCAPE,
            comment_marker: DEFAULT_COMMENT_MARKER.to_string(),
        }
    }
}

/// Read-only lookup tables
#[derive(Debug, Clone)]
pub struct LexicalTables {
    keywords: BTreeSet<String>,
    operators: HashSet<String>,
    delimiters: HashSet<char>,
    whitespace: HashSet<char>,
    quote: char,
    escape: char,
    comment_marker: String,
}

impl LexicalTables {
    /// Build tables from a config, rejecting entries the scanner cannot honour
    pub fn from_config(config: TablesConfig) -> Result<Self> {
        for op in &config.operators {
            let len = op.chars().count();
            if len == 0 {
                return Err(TokscanError::invalid_tables("empty operator"));
            }
            if len > MAX_OPERATOR_LEN {
                return Err(TokscanError::invalid_tables(format!(
                    "operator '{op}' is longer than {MAX_OPERATOR_LEN} characters"
                )));
            }
        }
        if config.keywords.iter().any(|k| k.is_empty()) {
            return Err(TokscanError::invalid_tables("empty keyword"));
        }
        if config.comment_marker.is_empty() {
            return Err(TokscanError::invalid_tables("empty comment marker"));
        }

        if config.whitespace.contains(config.quote) {
            return Err(TokscanError::invalid_tables(format!(
                "quote character {:?} is also whitespace",
                config.quote
            )));
        }
        if config.whitespace.contains(config.escape) {
            return Err(TokscanError::invalid_tables(format!(
                "escape character {:?} is also whitespace",
                config.escape
            )));
        }

        Ok(Self::assemble(config))
    }

    fn assemble(config: TablesConfig) -> Self {
        Self {
            keywords: config.keywords.into_iter().collect(),
            operators: config.operators.into_iter().collect(),
            delimiters: config.delimiters.chars().collect(),
            whitespace: config.whitespace.chars().collect(),
            quote: config.quote,
            escape: config.escape,
            comment_marker: config.comment_marker,
        }
    }

    /// Parse tables from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TablesConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// Load tables from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_operator(&self, op: &str) -> bool {
        self.operators.contains(op)
    }

    pub fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }

    pub fn is_whitespace(&self, ch: char) -> bool {
        self.whitespace.contains(&ch)
    }

    pub fn quote(&self) -> char {
        self.quote
    }

    pub fn escape(&self) -> char {
        self.escape
    }

    pub fn comment_marker(&self) -> &str {
        &self.comment_marker
    }

    /// Keywords in lexicographic order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

impl Default for LexicalTables {
    fn default() -> Self {
        Self::assemble(TablesConfig::default())
    }
}
