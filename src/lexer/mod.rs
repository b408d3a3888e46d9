//! Lexer module - Tokenization
//!
//! A single left-to-right pass over one cleaned line with one character of
//! lookahead. Operators are matched longest-first so `+=` never splits into
//! `+` and `=`. Quoted text is kept whole, honouring a backslash before the
//! closing quote.

mod classify;
mod tables;
mod token;

#[cfg(test)]
mod tests;

pub use classify::classify;
pub use tables::*;
pub use token::*;

/// Scanner behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Recognise quoted string literals. When off the quote is an ordinary
    /// character.
    pub string_literals: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            string_literals: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString,
}

/// Maximal-munch scanner over a set of lexical tables
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'t> {
    tables: &'t LexicalTables,
    options: ScanOptions,
}

impl<'t> Scanner<'t> {
    pub fn new(tables: &'t LexicalTables, options: ScanOptions) -> Self {
        Self { tables, options }
    }

    pub fn tables(&self) -> &'t LexicalTables {
        self.tables
    }

    /// Split a cleaned line into raw token strings
    pub fn scan(&self, line: &str) -> Vec<String> {
        let chars: Vec<char> = line.chars().collect();
        let quote = self.tables.quote();

        let mut tokens = Vec::new();
        let mut acc = String::new();
        let mut state = ScanState::Normal;
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            match state {
                ScanState::InString => {
                    acc.push(ch);
                    if ch == quote && !self.is_escaped(&chars, i) {
                        flush(&mut acc, &mut tokens);
                        state = ScanState::Normal;
                    }
                    i += 1;
                }
                ScanState::Normal => {
                    if self.tables.is_whitespace(ch) {
                        flush(&mut acc, &mut tokens);
                        i += 1;
                    } else if self.tables.is_delimiter(ch) && ch != quote {
                        flush(&mut acc, &mut tokens);
                        tokens.push(ch.to_string());
                        i += 1;
                    } else if self.options.string_literals && ch == quote {
                        flush(&mut acc, &mut tokens);
                        acc.push(ch);
                        state = ScanState::InString;
                        i += 1;
                    } else if let Some(len) = self.munch_operator(&chars[i..]) {
                        flush(&mut acc, &mut tokens);
                        tokens.push(chars[i..i + len].iter().collect());
                        i += len;
                    } else {
                        acc.push(ch);
                        i += 1;
                    }
                }
            }
        }

        // Unterminated literals are emitted as-is
        flush(&mut acc, &mut tokens);
        tokens
    }

    /// Scan a cleaned line and classify every token
    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        self.scan(line)
            .into_iter()
            .map(|text| {
                let kind = classify(&text, self.tables);
                Token { text, kind }
            })
            .collect()
    }

    /// Length of the longest operator at the head of `rest`, if any
    fn munch_operator(&self, rest: &[char]) -> Option<usize> {
        (1..=MAX_OPERATOR_LEN.min(rest.len()))
            .rev()
            .find(|&len| {
                let candidate: String = rest[..len].iter().collect();
                self.tables.is_operator(&candidate)
            })
    }

    /// Only the immediately preceding character is inspected.
    fn is_escaped(&self, chars: &[char], i: usize) -> bool {
        i > 0 && chars[i - 1] == self.tables.escape()
    }
}

fn flush(acc: &mut String, tokens: &mut Vec<String>) {
    if !acc.is_empty() {
        tokens.push(std::mem::take(acc));
    }
}

/// Split a cleaned line using the default tables
pub fn scan(line: &str) -> Vec<String> {
    Scanner::new(&DEFAULT_TABLES, ScanOptions::default()).scan(line)
}

/// Tokenize a cleaned line using the default tables
pub fn tokenize(line: &str) -> Vec<Token> {
    Scanner::new(&DEFAULT_TABLES, ScanOptions::default()).tokenize(line)
}
