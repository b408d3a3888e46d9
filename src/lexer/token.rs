//! Token definitions

use serde::Serialize;
use std::fmt;

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    Delimiter,
    Literal,
    Unknown,
}

impl TokenKind {
    /// Every kind, in report order
    pub const ALL: [TokenKind; 6] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Delimiter,
        TokenKind::Literal,
        TokenKind::Unknown,
    ];

    /// Plural label used in reports
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keywords",
            TokenKind::Identifier => "Identifiers",
            TokenKind::Operator => "Operators",
            TokenKind::Delimiter => "Delimiters",
            TokenKind::Literal => "Literals",
            TokenKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified lexical unit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.text)
    }
}
