//! Scanner tests

use super::*;

fn no_strings(line: &str) -> Vec<String> {
    Scanner::new(
        &DEFAULT_TABLES,
        ScanOptions {
            string_literals: false,
        },
    )
    .scan(line)
}

#[test]
fn test_scan_empty() {
    assert!(scan("").is_empty());
    assert!(tokenize("").is_empty());
}

#[test]
fn test_scan_whitespace_only() {
    assert!(scan(" \t  \t").is_empty());
}

#[test]
fn test_maximal_munch() {
    assert_eq!(scan("a+=b"), vec!["a", "+=", "b"]);
    assert_eq!(scan("i++"), vec!["i", "++"]);
    assert_eq!(scan("x<<2"), vec!["x", "<<", "2"]);
    assert_eq!(scan("a==b!=c"), vec!["a", "==", "b", "!=", "c"]);
}

#[test]
fn test_single_char_operators() {
    assert_eq!(scan("a+b"), vec!["a", "+", "b"]);
    assert_eq!(scan("a = -b"), vec!["a", "=", "-", "b"]);
}

#[test]
fn test_munch_is_greedy_left_to_right() {
    // `+++` is `++` then `+`
    assert_eq!(scan("a+++b"), vec!["a", "++", "+", "b"]);
}

#[test]
fn test_lone_bang_is_not_an_operator() {
    assert_eq!(scan("!x"), vec!["!x"]);
}

#[test]
fn test_delimiters_split() {
    assert_eq!(
        scan("print(a,b);"),
        vec!["print", "(", "a", ",", "b", ")", ";"]
    );
    assert_eq!(scan("{}"), vec!["{", "}"]);
}

#[test]
fn test_string_literal_integrity() {
    assert_eq!(scan(r#"x = "a+b";"#), vec!["x", "=", "\"a+b\"", ";"]);
}

#[test]
fn test_string_keeps_whitespace_and_delimiters() {
    assert_eq!(scan(r#"print("a, b (c)")"#), vec!["print", "(", "\"a, b (c)\"", ")"]);
}

#[test]
fn test_escaped_quote() {
    assert_eq!(scan(r#""a\"b""#), vec![r#""a\"b""#]);
    let tokens = tokenize(r#""a\"b""#);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Literal);
}

#[test]
fn test_escaped_backslash_still_blocks_close() {
    // Only the preceding character is looked at, so `\\"` does not close.
    assert_eq!(scan(r#"x = "a\\" y"#), vec!["x", "=", r#""a\\" y"#]);
}

#[test]
fn test_empty_string_literal() {
    assert_eq!(scan(r#"s = "";"#), vec!["s", "=", "\"\"", ";"]);
}

#[test]
fn test_adjacent_literal_flushes_accumulator() {
    assert_eq!(scan(r#"abc"d"e"#), vec!["abc", "\"d\"", "e"]);
}

#[test]
fn test_unterminated_literal() {
    assert_eq!(scan(r#"x = "abc"#), vec!["x", "=", "\"abc"]);
}

#[test]
fn test_lone_quote() {
    let tokens = tokenize("\"");
    assert_eq!(tokens, vec![Token::new("\"", TokenKind::Identifier)]);
}

#[test]
fn test_strings_disabled() {
    assert_eq!(no_strings(r#"x = "a+b";"#), vec!["x", "=", "\"a", "+", "b\"", ";"]);
}

#[test]
fn test_strings_disabled_matches_plain_scan_without_quotes() {
    let line = "int total = a+=b*2, c;";
    assert_eq!(no_strings(line), scan(line));
}

#[test]
fn test_tokenize_classifies() {
    let tokens = tokenize("int x = 5;");
    assert_eq!(
        tokens,
        vec![
            Token::new("int", TokenKind::Keyword),
            Token::new("x", TokenKind::Identifier),
            Token::new("=", TokenKind::Operator),
            Token::new("5", TokenKind::Literal),
            Token::new(";", TokenKind::Delimiter),
        ]
    );
}

#[test]
fn test_tokenize_idempotent() {
    let line = r#"def f(a, b) { return a <= "b\"c"; }"#;
    assert_eq!(tokenize(line), tokenize(line));
}

#[test]
fn test_keyword_and_operator_tokens_are_table_members() {
    let line = r#"def add(a, b) { return a+b; } print(x >= 10 && y != "q")"#;
    for token in tokenize(line) {
        match token.kind {
            TokenKind::Keyword => assert!(DEFAULT_TABLES.is_keyword(&token.text)),
            TokenKind::Operator => assert!(DEFAULT_TABLES.is_operator(&token.text)),
            _ => {}
        }
    }
}

#[test]
fn test_custom_tables() {
    let tables = LexicalTables::from_json(
        r#"{"keywords": ["let"], "operators": ["->", "-", ":"], "delimiters": "[]", "quote": "'"}"#,
    )
    .unwrap();
    let scanner = Scanner::new(&tables, ScanOptions::default());
    let tokens = scanner.tokenize("let f: a->[b] 'x y'");
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["let", "f", ":", "a", "->", "[", "b", "]", "'x y'"]);
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[8].kind, TokenKind::Literal);
}

#[test]
fn test_non_ascii_text() {
    assert_eq!(scan("größe = \"ü\";"), vec!["größe", "=", "\"ü\"", ";"]);
}
