//! Token classification
//!
//! Precedence is fixed: keyword, operator, delimiter, literal, identifier.
//! The first rule that matches decides the kind.

use super::tables::LexicalTables;
use super::token::TokenKind;

/// Classify a finished token's text
pub fn classify(text: &str, tables: &LexicalTables) -> TokenKind {
    if tables.is_keyword(text) {
        return TokenKind::Keyword;
    }
    if tables.is_operator(text) {
        return TokenKind::Operator;
    }
    if let Some(ch) = single_char(text) {
        if tables.is_delimiter(ch) && ch != tables.quote() {
            return TokenKind::Delimiter;
        }
    }
    if starts_with_digit(text) || is_string_literal(text, tables.quote()) {
        return TokenKind::Literal;
    }
    TokenKind::Identifier
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

fn starts_with_digit(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Quoted on both ends. A lone quote is not a literal.
fn is_string_literal(text: &str, quote: char) -> bool {
    text.chars().count() > 1 && text.starts_with(quote) && text.ends_with(quote)
}
