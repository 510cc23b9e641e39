use crate::graphql::lexer::{lex, token_text};

fn snapshot(input: &str) -> String {
    let mut out = String::new();
    for token in lex(input) {
        out.push_str(&format!(
            "{:?} {:?}\n",
            token.kind,
            token_text(input, &token)
        ));
    }
    out
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("! $ ( ) ... : = @ [ ] { }"), @r#"
    Bang "!"
    Dollar "$"
    ParenL "("
    ParenR ")"
    Spread "..."
    Colon ":"
    Equals "="
    At "@"
    BracketL "["
    BracketR "]"
    BraceL "{"
    BraceR "}"
    "#);
}

#[test]
fn insignificant_characters_are_skipped() {
    insta::assert_snapshot!(snapshot("\u{FEFF}a,,b\r\n\tc # trailing comment\nd"), @r#"
    Name "a"
    Name "b"
    Name "c"
    Name "d"
    "#);
}

#[test]
fn numbers() {
    insta::assert_snapshot!(snapshot("0 -12 3.14 1e10 -2.5E-3"), @r#"
    Int "0"
    Int "-12"
    Float "3.14"
    Float "1e10"
    Float "-2.5E-3"
    "#);
}

#[test]
fn strings() {
    insta::assert_snapshot!(snapshot(r#""plain" "esc\"aped" """block""""#), @r#"
    String "\"plain\""
    String "\"esc\\\"aped\""
    BlockString "\"\"\"block\"\"\""
    "#);
}

#[test]
fn block_string_with_escaped_delimiter() {
    let input = r#""""a \""" b""""#;
    let tokens = lex(input);
    assert_eq!(tokens.len(), 1);
    assert_eq!(token_text(input, &tokens[0]), input);
}

#[test]
fn unterminated_block_string_is_garbage() {
    insta::assert_snapshot!(snapshot(r#"a """never closed"#), @r#"
    Name "a"
    Garbage "\"\"\"never closed"
    "#);
}

#[test]
fn comments_run_to_end_of_line() {
    insta::assert_snapshot!(snapshot("a # { b } \"c\"\r\nd #\n# e"), @r#"
    Name "a"
    Name "d"
    "#);
}

#[test]
fn type_system_punctuation_is_garbage() {
    insta::assert_snapshot!(snapshot("A &|B"), @r#"
    Name "A"
    Garbage "&|"
    Name "B"
    "#);
}

#[test]
fn unknown_characters_coalesce() {
    insta::assert_snapshot!(snapshot("a ^%^b"), @r#"
    Name "a"
    Garbage "^%^"
    Name "b"
    "#);
}

#[test]
fn query_tokens() {
    insta::assert_snapshot!(snapshot("query Q($id: ID!) { node(id: $id) { ...F } }"), @r#"
    Name "query"
    Name "Q"
    ParenL "("
    Dollar "$"
    Name "id"
    Colon ":"
    Name "ID"
    Bang "!"
    ParenR ")"
    BraceL "{"
    Name "node"
    ParenL "("
    Name "id"
    Colon ":"
    Dollar "$"
    Name "id"
    ParenR ")"
    BraceL "{"
    Spread "..."
    Name "F"
    BraceR "}"
    BraceR "}"
    "#);
}
