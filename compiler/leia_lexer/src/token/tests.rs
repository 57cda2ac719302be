use super::*;

// === Span ===

#[test]
fn span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn span_point_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.to_range(), 7..7);
}

#[test]
fn span_u32_max_boundaries() {
    let span = Span::new(u32::MAX - 10, u32::MAX);
    assert_eq!(span.len(), 10);
    assert_eq!(span.merge(Span::point(0)).start, 0);
}

#[test]
fn span_display() {
    assert_eq!(Span::new(3, 9).to_string(), "3..9");
    assert_eq!(format!("{:?}", Span::new(3, 9)), "3..9");
}

// === Token ===

#[test]
fn token_serializes_category_and_span() {
    let keyword = Token::new(TokenCategory::Keyword(Keyword::Fn), Span::new(0, 2));
    assert_eq!(
        serde_json::to_value(keyword).unwrap(),
        serde_json::json!({"category": {"Keyword": "Fn"}, "span": {"start": 0, "end": 2}})
    );
    let bracket = Token::new(TokenCategory::Bracket(BracketKind::Angle), Span::new(4, 5));
    assert_eq!(
        serde_json::to_value(bracket).unwrap()["category"],
        serde_json::json!({"Bracket": "Angle"})
    );
    let integer = Token::new(TokenCategory::Integer, Span::new(6, 7));
    assert_eq!(serde_json::to_value(integer).unwrap()["category"], "Integer");
}

#[test]
fn token_text_slices_source() {
    let source = "print x";
    let token = Token::new(TokenCategory::Identifier, Span::new(6, 7));
    assert_eq!(token.text(source), "x");
}

// === Categories ===

#[test]
fn keyword_names_round_trip_through_scope() {
    for keyword in Keyword::ALL {
        let scope = TokenCategory::Keyword(keyword).scope();
        assert_eq!(scope.strip_prefix("keyword."), Some(keyword.as_str()));
    }
}

#[test]
fn scopes_are_hierarchical() {
    assert!(TokenCategory::StringEscape.scope().starts_with("string"));
    assert!(TokenCategory::Char.scope().starts_with("string"));
    assert!(TokenCategory::DocCommentInvalid.scope().starts_with("comment.doc"));
    assert!(TokenCategory::Hex.scope().starts_with("number"));
    assert_eq!(
        TokenCategory::Bracket(BracketKind::Paren).scope(),
        "delimiter.parenthesis"
    );
}

#[test]
fn only_whitespace_is_trivia() {
    assert!(TokenCategory::Whitespace.is_trivia());
    assert!(!TokenCategory::LineComment.is_trivia());
    assert!(!TokenCategory::Invalid.is_trivia());
}
