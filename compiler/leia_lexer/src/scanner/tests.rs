use pretty_assertions::assert_eq;

use super::*;
use crate::mode::Mode;
use crate::token::{BracketKind, Keyword};

use crate::token::TokenCategory as T;

/// Every token with its lexeme.
fn all(source: &str) -> Vec<(TokenCategory, &str)> {
    Tokens::new(source)
        .map(|t| (t.category, t.text(source)))
        .collect()
}

/// Tokens with whitespace dropped.
fn significant(source: &str) -> Vec<(TokenCategory, &str)> {
    Tokens::new(source)
        .significant()
        .map(|t| (t.category, t.text(source)))
        .collect()
}

fn end_state(source: &str) -> Vec<Mode> {
    let mut tokens = Tokens::new(source);
    tokens.by_ref().for_each(drop);
    tokens.modes().as_slice().to_vec()
}

fn stack(modes: &[Mode]) -> ModeStack {
    let mut stack = ModeStack::new();
    for &mode in modes {
        assert!(stack.push(mode), "{mode} is not pushable");
    }
    stack
}

// === Statements ===

#[test]
fn print_statement() {
    assert_eq!(
        significant("print x == 10;"),
        vec![
            (T::Keyword(Keyword::Print), "print"),
            (T::Identifier, "x"),
            (T::Operator, "=="),
            (T::Integer, "10"),
            (T::Delimiter, ";"),
        ]
    );
}

#[test]
fn whitespace_is_emitted_between_tokens() {
    assert_eq!(
        all("a \t\nb"),
        vec![
            (T::Identifier, "a"),
            (T::Whitespace, " \t\n"),
            (T::Identifier, "b"),
        ]
    );
}

#[test]
fn empty_source_yields_nothing() {
    assert!(all("").is_empty());
    assert_eq!(end_state(""), vec![Mode::Root]);
}

#[test]
fn function_header() {
    assert_eq!(
        significant("fn fib(n) { if n < 2 { n } else { fib(n - 1) } }")
            .into_iter()
            .take(6)
            .collect::<Vec<_>>(),
        vec![
            (T::Keyword(Keyword::Fn), "fn"),
            (T::Identifier, "fib"),
            (T::Bracket(BracketKind::Paren), "("),
            (T::Identifier, "n"),
            (T::Bracket(BracketKind::Paren), ")"),
            (T::Bracket(BracketKind::Curly), "{"),
        ]
    );
}

// === Keywords & identifiers ===

#[test]
fn keyword_needs_whole_identifier() {
    assert_eq!(
        significant("if ifx $if else_"),
        vec![
            (T::Keyword(Keyword::If), "if"),
            (T::Identifier, "ifx"),
            (T::Identifier, "$if"),
            (T::Identifier, "else_"),
        ]
    );
}

#[test]
fn booleans_are_keywords() {
    assert_eq!(
        significant("true false"),
        vec![
            (T::Keyword(Keyword::True), "true"),
            (T::Keyword(Keyword::False), "false"),
        ]
    );
}

#[test]
fn annotation_before_function() {
    assert_eq!(
        significant("@inline fn"),
        vec![
            (T::Annotation, "@inline"),
            (T::Keyword(Keyword::Fn), "fn"),
        ]
    );
}

// === Numbers ===

#[test]
fn number_forms() {
    assert_eq!(
        significant("0x1A 0b101 0755 3.14 42 1e10 2f 7L 1_000"),
        vec![
            (T::Hex, "0x1A"),
            (T::Binary, "0b101"),
            (T::Octal, "0755"),
            (T::Float, "3.14"),
            (T::Integer, "42"),
            (T::Float, "1e10"),
            (T::Float, "2f"),
            (T::Integer, "7L"),
            (T::Integer, "1_000"),
        ]
    );
}

#[test]
fn decimal_float_is_one_token() {
    assert_eq!(all("3.14"), vec![(T::Float, "3.14")]);
}

#[test]
fn no_leading_dot_floats() {
    assert_eq!(all(".5"), vec![(T::Delimiter, "."), (T::Integer, "5")]);
}

#[test]
fn trailing_dot_is_punctuation() {
    assert_eq!(all("3."), vec![(T::Integer, "3"), (T::Delimiter, ".")]);
}

#[test]
fn zero_alone_is_integer() {
    assert_eq!(all("0"), vec![(T::Integer, "0")]);
}

#[test]
fn member_access_splits_on_dot() {
    assert_eq!(
        all("x.y"),
        vec![
            (T::Identifier, "x"),
            (T::Delimiter, "."),
            (T::Identifier, "y"),
        ]
    );
}

// === Operators, brackets & delimiters ===

#[test]
fn lone_angle_is_bracket_but_runs_are_operators() {
    assert_eq!(
        all("<a"),
        vec![(T::Bracket(BracketKind::Angle), "<"), (T::Identifier, "a")]
    );
    assert_eq!(all("<="), vec![(T::Operator, "<=")]);
    assert_eq!(all("a>"), vec![(T::Identifier, "a"), (T::Bracket(BracketKind::Angle), ">")]);
}

#[test]
fn symbol_runs_outside_operator_set_are_delimiters() {
    assert_eq!(
        significant("a != b => c && d"),
        vec![
            (T::Identifier, "a"),
            (T::Delimiter, "!="),
            (T::Identifier, "b"),
            (T::Delimiter, "=>"),
            (T::Identifier, "c"),
            (T::Operator, "&&"),
            (T::Identifier, "d"),
        ]
    );
}

#[test]
fn stray_comment_close_in_code() {
    assert_eq!(significant("a */"), vec![(T::Identifier, "a"), (T::Delimiter, "*/")]);
}

// === Strings ===

#[test]
fn closed_string_pushes_and_pops() {
    assert_eq!(
        all(r#""hi there""#),
        vec![(T::String, "\""), (T::String, "hi there"), (T::String, "\"")]
    );
    assert_eq!(end_state(r#""hi""#), vec![Mode::Root]);
}

#[test]
fn escapes_inside_string() {
    let source = r#""a\nb\qc""#;
    assert_eq!(
        all(source),
        vec![
            (T::String, "\""),
            (T::String, "a"),
            (T::StringEscape, "\\n"),
            (T::String, "b"),
            (T::StringEscapeInvalid, "\\q"),
            (T::String, "c"),
            (T::String, "\""),
        ]
    );
}

#[test]
fn escaped_quote_does_not_close() {
    assert_eq!(
        all(r#""\"""#),
        vec![(T::String, "\""), (T::StringEscape, "\\\""), (T::String, "\"")]
    );
}

#[test]
fn unterminated_string_covers_rest_of_line() {
    assert_eq!(
        all("\"abc\nx"),
        vec![
            (T::StringInvalid, "\"abc"),
            (T::Whitespace, "\n"),
            (T::Identifier, "x"),
        ]
    );
    assert_eq!(end_state("\"abc\nx"), vec![Mode::Root]);
}

#[test]
fn unterminated_string_at_end_of_input() {
    assert_eq!(all("\"open"), vec![(T::StringInvalid, "\"open")]);
}

#[test]
fn trailing_backslash_keeps_string_open() {
    assert_eq!(
        all("\"abc\\"),
        vec![(T::String, "\""), (T::String, "abc"), (T::Invalid, "\\")]
    );
    assert_eq!(end_state("\"abc\\"), vec![Mode::Root, Mode::String]);
}

// === Chars ===

#[test]
fn char_literals() {
    assert_eq!(all("'a'"), vec![(T::Char, "'a'")]);
    assert_eq!(all("'λ'"), vec![(T::Char, "'λ'")]);
}

#[test]
fn char_escape_splits_into_three_tokens() {
    assert_eq!(
        all("'\\n'"),
        vec![(T::Char, "'"), (T::StringEscape, "\\n"), (T::Char, "'")]
    );
}

#[test]
fn malformed_char_marks_only_the_quote() {
    assert_eq!(
        all("'ab'"),
        vec![
            (T::CharInvalid, "'"),
            (T::Identifier, "ab"),
            (T::CharInvalid, "'"),
        ]
    );
}

// === Comments ===

#[test]
fn line_comment_stops_at_newline() {
    assert_eq!(
        all("x // hi\ny"),
        vec![
            (T::Identifier, "x"),
            (T::Whitespace, " "),
            (T::LineComment, "// hi"),
            (T::Whitespace, "\n"),
            (T::Identifier, "y"),
        ]
    );
}

#[test]
fn block_comments_do_not_nest() {
    let source = "/* a /* b */ c";
    let tokens = significant(source);
    let (last, comment) = tokens.split_last().unwrap();
    assert_eq!(*last, (T::Identifier, "c"));
    assert!(comment.iter().all(|(category, _)| *category == T::BlockComment));
    let text: String = comment.iter().map(|(_, text)| *text).collect();
    assert_eq!(text, "/* a /* b */");
    assert_eq!(end_state(source), vec![Mode::Root]);
}

#[test]
fn empty_block_comment_is_not_doc() {
    assert_eq!(
        all("/**/"),
        vec![(T::BlockComment, "/*"), (T::BlockComment, "*/")]
    );
}

#[test]
fn doc_comment_flags_nested_open() {
    assert_eq!(
        all("/** a /* b */"),
        vec![
            (T::DocComment, "/**"),
            (T::DocComment, " a "),
            (T::DocCommentInvalid, "/*"),
            (T::DocComment, " b "),
            (T::DocComment, "*/"),
        ]
    );
}

#[test]
fn unclosed_comment_leaves_mode_open() {
    assert_eq!(end_state("/* open"), vec![Mode::Root, Mode::BlockComment]);
    assert_eq!(end_state("/** open"), vec![Mode::Root, Mode::DocComment]);
}

// === Fallback ===

#[test]
fn unrecognized_characters_are_invalid() {
    assert_eq!(
        all("x#é"),
        vec![(T::Identifier, "x"), (T::Invalid, "#"), (T::Invalid, "é")]
    );
}

#[test]
fn lone_at_sign_is_invalid() {
    assert_eq!(all("@ 1"), vec![(T::Invalid, "@"), (T::Whitespace, " "), (T::Integer, "1")]);
}

#[test]
fn iterator_is_fused() {
    let mut tokens = Tokens::new("x");
    assert!(tokens.next().is_some());
    assert_eq!(tokens.next(), None);
    assert_eq!(tokens.next(), None);
}

#[test]
fn offset_tracks_consumed_input() {
    let mut tokens = Tokens::new("ab cd");
    assert_eq!(tokens.offset(), 0);
    tokens.next();
    assert_eq!(tokens.offset(), 2);
}

// === Restarting ===

#[test]
fn resume_inside_block_comment() {
    let source = "still */ x";
    let tokens: Vec<_> = Tokens::resume(source, stack(&[Mode::BlockComment]))
        .map(|t| (t.category, t.text(source)))
        .collect();
    assert_eq!(
        tokens,
        vec![
            (T::BlockComment, "still "),
            (T::BlockComment, "*/"),
            (T::Whitespace, " "),
            (T::Identifier, "x"),
        ]
    );
}

#[test]
fn resume_from_root_only_stack_returns_to_root() {
    let mut modes = ModeStack::new();
    modes.push(Mode::Root);
    let mut tokens = Tokens::resume("\"abc\"", modes);
    tokens.by_ref().for_each(drop);
    assert!(tokens.modes().is_root());
    assert_eq!(tokens.modes().as_slice(), &[Mode::Root]);
}

#[test]
fn line_by_line_carries_open_comment() {
    let lines = ["let /* one", "two */ \"s", "\\n\" x"];
    let mut state = ModeStack::new();
    let mut categories = Vec::new();
    for line in lines {
        let result = tokenize_line(line, &state);
        categories.extend(result.tokens.iter().map(|t| t.category));
        state = result.end_state;
    }
    assert!(state.is_root());
    assert_eq!(
        categories,
        vec![
            T::Identifier,
            T::Whitespace,
            T::BlockComment,
            T::BlockComment,
            // line 2
            T::BlockComment,
            T::BlockComment,
            T::Whitespace,
            T::StringInvalid,
            // line 3
            T::Invalid,
            T::Identifier,
            T::StringInvalid,
        ]
    );
}

#[test]
fn tokenize_line_reports_end_state() {
    let first = tokenize_line("x = \"abc\\", &ModeStack::new());
    assert_eq!(first.end_state.as_slice(), &[Mode::Root, Mode::String]);

    let second = tokenize_line("def\"", &first.end_state);
    assert!(second.end_state.is_root());
    assert_eq!(
        second.tokens.iter().map(|t| t.category).collect::<Vec<_>>(),
        vec![T::String, T::String]
    );
}
