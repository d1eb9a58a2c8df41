//! Integration tests for the scanner over realistic Clojure snippets.
//!
//! Case tables cover the tokenization rules one input at a time; the
//! snapshot tests render whole token streams to catch position regressions.

use cljfmt::clj::lexing::lex;
use cljfmt::clj::token::{Token, TokenKind};
use rstest::rstest;

fn lex_all(source: &str) -> Vec<Token> {
    lex("sample.clj", source).collect()
}

fn kinds_and_texts(source: &str) -> Vec<(TokenKind, String)> {
    lex_all(source)
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

fn render(source: &str) -> String {
    lex_all(source)
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[rstest]
#[case::dispatch_ignore("#_foo", &[
    (TokenKind::Dispatch, "#_"),
    (TokenKind::Symbol, "_foo"),
    (TokenKind::Eof, ""),
])]
#[case::tag_with_space("# foo", &[
    (TokenKind::Octothorpe, ""),
    (TokenKind::Symbol, "foo"),
    (TokenKind::Eof, ""),
])]
#[case::bare_tag("#bar", &[
    (TokenKind::Octothorpe, ""),
    (TokenKind::Symbol, "bar"),
    (TokenKind::Eof, ""),
])]
#[case::octothorpe_at_eof("#", &[
    (TokenKind::Octothorpe, ""),
    (TokenKind::Eof, ""),
])]
#[case::set_literal("#{1}", &[
    (TokenKind::Dispatch, "#{"),
    (TokenKind::LeftBrace, ""),
    (TokenKind::Number, "1"),
    (TokenKind::RightBrace, ""),
    (TokenKind::Eof, ""),
])]
#[case::var_quote("#'x", &[
    (TokenKind::Dispatch, "#'"),
    (TokenKind::Apostrophe, ""),
    (TokenKind::Symbol, "x"),
    (TokenKind::Eof, ""),
])]
fn test_dispatch_lookahead(#[case] source: &str, #[case] expected: &[(TokenKind, &str)]) {
    let expected: Vec<(TokenKind, String)> = expected
        .iter()
        .map(|(k, t)| (*k, t.to_string()))
        .collect();
    assert_eq!(kinds_and_texts(source), expected);
}

#[rstest]
#[case::negative_number("-5", TokenKind::Number, "-5")]
#[case::positive_number("+5", TokenKind::Number, "+5")]
#[case::negative_symbol("-foo", TokenKind::Symbol, "-foo")]
#[case::bare_minus("-", TokenKind::Symbol, "-")]
#[case::bare_plus("+", TokenKind::Symbol, "+")]
#[case::permissive_number("3foo", TokenKind::Number, "3foo")]
fn test_sign_and_number_ambiguity(
    #[case] source: &str,
    #[case] kind: TokenKind,
    #[case] text: &str,
) {
    let tokens = lex_all(source);
    assert_eq!(tokens.len(), 2, "{tokens:?}");
    assert_eq!(tokens[0].kind, kind);
    assert_eq!(tokens[0].text, text);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[rstest]
#[case::escaped_quote(r#""a\"b""#, r#"a\"b"#)]
#[case::empty(r#""""#, "")]
#[case::plain(r#""hello world""#, "hello world")]
#[case::newline_escape(r#""a\nb""#, r"a\nb")]
fn test_string_contents(#[case] source: &str, #[case] expected: &str) {
    let tokens = lex_all(source);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, expected);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[rstest]
#[case::char_literal_plain(r"\a", &[(TokenKind::CharLiteral, r"\a")])]
#[case::char_literal_named(r"\newline", &[(TokenKind::CharLiteral, r"\newline")])]
#[case::char_literal_delimiter(r"\(", &[(TokenKind::CharLiteral, r"\(")])]
#[case::keyword(":foo/bar", &[(TokenKind::Keyword, ":foo/bar")])]
#[case::bare_colon_keyword(":", &[(TokenKind::Keyword, ":")])]
#[case::lambda_arg_bare("%", &[(TokenKind::LambdaArg, "%")])]
#[case::lambda_arg_rest("%&", &[(TokenKind::LambdaArg, "%&")])]
#[case::comma_is_whitespace("a,b", &[
    (TokenKind::Symbol, "a"),
    (TokenKind::Symbol, "b"),
])]
fn test_literal_categories(#[case] source: &str, #[case] expected: &[(TokenKind, &str)]) {
    let mut expected: Vec<(TokenKind, String)> = expected
        .iter()
        .map(|(k, t)| (*k, t.to_string()))
        .collect();
    expected.push((TokenKind::Eof, String::new()));
    assert_eq!(kinds_and_texts(source), expected);
}

#[rstest]
#[case::unterminated_string("\"unterminated", "reached EOF before string closing quote")]
#[case::lone_backslash("\\", "invalid character literal")]
#[case::unrecognized_rune("|x", "unrecognized token starting with |")]
fn test_scan_errors_are_terminal(#[case] source: &str, #[case] message: &str) {
    let tokens = lex_all(source);
    assert_eq!(tokens.len(), 1, "{tokens:?}");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].text, message);
    let err = tokens[0].as_error();
    assert!(err.to_string().starts_with("lex error at sample.clj:1:1:"));
}

#[test]
fn test_defn_tokens() {
    let rendered = render("(defn add [x y]\n  (+ x y))\n");
    insta::assert_snapshot!("defn_tokens", rendered);
}

#[test]
fn test_reader_macros() {
    let rendered = render("#_(str \"hi\") @x ; done\n");
    insta::assert_snapshot!("reader_macros", rendered);
}
