//! TokenCatalog - unique tokens grouped by kind

use crate::lexer::{Token, TokenKind};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Separator between token texts in a category listing
pub const TOKEN_SEPARATOR: &str = ", ";

const RULE_WIDTH: usize = 48;

/// Append-only set of unique token texts per kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCatalog {
    entries: BTreeMap<TokenKind, BTreeSet<String>>,
}

impl TokenCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a token. Returns `true` if it was not already present.
    pub fn insert(&mut self, token: &Token) -> bool {
        self.entries
            .entry(token.kind)
            .or_default()
            .insert(token.text.clone())
    }

    pub fn extend<'a>(&mut self, tokens: impl IntoIterator<Item = &'a Token>) {
        for token in tokens {
            self.insert(token);
        }
    }

    /// Fold another catalog into this one
    pub fn merge(&mut self, other: TokenCatalog) {
        for (kind, texts) in other.entries {
            self.entries.entry(kind).or_default().extend(texts);
        }
    }

    pub fn get(&self, kind: TokenKind) -> Option<&BTreeSet<String>> {
        self.entries.get(&kind)
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.get(token.kind)
            .is_some_and(|texts| texts.contains(&token.text))
    }

    /// Kinds with at least one token, in report order
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.entries
            .iter()
            .filter(|(_, texts)| !texts.is_empty())
            .map(|(kind, _)| *kind)
    }

    /// Total number of unique (text, kind) pairs
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every stored token, grouped by kind and sorted within each kind
    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.entries
            .iter()
            .flat_map(|(kind, texts)| texts.iter().map(move |text| Token::new(text.clone(), *kind)))
    }

    /// Sorted listing of every non-empty category
    pub fn finalize(&self) -> CatalogReport {
        let categories = self
            .entries
            .iter()
            .filter(|(_, texts)| !texts.is_empty())
            .map(|(kind, texts)| CatalogEntry {
                kind: *kind,
                label: kind.label(),
                tokens: texts.iter().cloned().collect(),
            })
            .collect();
        CatalogReport { categories }
    }
}

/// One category row of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub kind: TokenKind,
    pub label: &'static str,
    pub tokens: Vec<String>,
}

impl CatalogEntry {
    pub fn joined(&self) -> String {
        self.tokens.join(TOKEN_SEPARATOR)
    }
}

/// Finalized catalog ready for display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
    pub categories: Vec<CatalogEntry>,
}

impl CatalogReport {
    pub fn get(&self, kind: TokenKind) -> Option<&CatalogEntry> {
        self.categories.iter().find(|entry| entry.kind == kind)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Two-column table: category label, then its tokens
    pub fn to_text(&self) -> String {
        let mut out = String::from("Category\t\tTokens\n");
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        for entry in &self.categories {
            out.push_str(&format!("{}\t\t{}\n", entry.label, entry.joined()));
        }
        out
    }
}
