//! Lexeme classification.
//!
//! Some rules match a lexeme *shape* without committing to a category: an
//! identifier-shaped run may be a keyword, a symbol run may or may not be
//! an operator. The scanner hands those lexemes here; the answer is a pure
//! table lookup, so changing the language's vocabulary means editing the
//! tables below, never the rules.

use crate::token::{BracketKind, Keyword, TokenCategory};

/// Reserved words, as a host editor expects them.
pub const KEYWORDS: &[&str] = &["fn", "if", "else", "true", "false", "print"];

/// Symbol runs highlighted as operators.
pub const OPERATORS: &[&str] = &[
    "=", ">", "<", "==", "<=", ">=", "&&", "||", "+", "-", "*", "/",
];

/// The shape a classifying rule matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    /// `[A-Za-z_$][A-Za-z0-9_$]*`
    IdentifierLike,
    /// A maximal run of symbol characters.
    SymbolRun,
    /// A single bracket character.
    Bracket,
}

/// Resolve the category of a lexeme matched as `kind`.
pub fn classify(lexeme: &str, kind: LexemeKind) -> TokenCategory {
    match kind {
        LexemeKind::IdentifierLike => match lookup_keyword(lexeme) {
            Some(keyword) => TokenCategory::Keyword(keyword),
            None => TokenCategory::Identifier,
        },
        LexemeKind::SymbolRun => {
            if is_operator(lexeme) {
                TokenCategory::Operator
            } else {
                TokenCategory::Delimiter
            }
        }
        LexemeKind::Bracket => match bracket_kind(lexeme) {
            Some(kind) => TokenCategory::Bracket(kind),
            None => TokenCategory::Delimiter,
        },
    }
}

/// Look up a reserved keyword by text.
///
/// Uses length-bucketing for fast rejection: every keyword is 2-5 bytes.
#[inline]
pub fn lookup_keyword(text: &str) -> Option<Keyword> {
    match text.len() {
        2 => match text {
            "fn" => Some(Keyword::Fn),
            "if" => Some(Keyword::If),
            _ => None,
        },
        4 => match text {
            "else" => Some(Keyword::Else),
            "true" => Some(Keyword::True),
            _ => None,
        },
        5 => match text {
            "false" => Some(Keyword::False),
            "print" => Some(Keyword::Print),
            _ => None,
        },
        _ => None,
    }
}

/// Returns `true` if `text` is exactly one of [`OPERATORS`].
#[inline]
pub fn is_operator(text: &str) -> bool {
    match text.len() {
        1 => matches!(text, "=" | ">" | "<" | "+" | "-" | "*" | "/"),
        2 => matches!(text, "==" | "<=" | ">=" | "&&" | "||"),
        _ => false,
    }
}

fn bracket_kind(text: &str) -> Option<BracketKind> {
    match text {
        "{" | "}" => Some(BracketKind::Curly),
        "(" | ")" => Some(BracketKind::Paren),
        "[" | "]" => Some(BracketKind::Square),
        "<" | ">" => Some(BracketKind::Angle),
        _ => None,
    }
}
