//! Lexical diagnostics.
//!
//! The scanner never fails: malformed input becomes tokens of an invalid
//! category and scanning continues. This module turns those tokens (and
//! any string or comment still open at end of input) into errors with the
//! WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` naming the lexical region the error occurred in
//! - HOW: `suggestions` providing actionable fixes

use crate::mode::Mode;
use crate::scanner::Tokens;
use crate::token::{Span, Token, TokenCategory};

/// A lexical error with enough context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY: the region the scanner was in.
    pub context: LexErrorContext,
    /// HOW to fix.
    pub suggestions: Vec<LexSuggestion>,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A string opened on a line that never closes it, or left open at end
    /// of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A block or doc comment left open at end of input.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// A `'` that does not start `'c'` or `'\n'`.
    #[error("invalid character literal")]
    InvalidCharLiteral,
    /// `\` followed by a character that is not a known escape.
    #[error("unknown escape sequence `\\{escape}`")]
    InvalidEscape { escape: char },
    /// A character no rule recognizes.
    #[error("unrecognized character `{}`", .found.escape_debug())]
    UnrecognizedCharacter { found: char },
    /// A `/*` inside a doc comment.
    #[error("block comment opened inside a doc comment")]
    NestedDocComment,
}

/// The lexical region an error occurred in.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Ordinary code.
    #[default]
    TopLevel,
    /// Inside a string literal opened at `start`.
    InsideString { start: u32 },
    /// Inside a char literal.
    InsideChar,
    /// Inside a block comment opened at `start`.
    InsideComment { start: u32 },
    /// Inside a doc comment opened at `start`.
    InsideDocComment { start: u32 },
}

impl LexErrorContext {
    /// Short prose for diagnostic notes.
    pub fn describe(self) -> &'static str {
        match self {
            LexErrorContext::TopLevel => "while scanning code",
            LexErrorContext::InsideString { .. } => "while scanning a string literal",
            LexErrorContext::InsideChar => "while scanning a character literal",
            LexErrorContext::InsideComment { .. } => "while scanning a block comment",
            LexErrorContext::InsideDocComment { .. } => "while scanning a doc comment",
        }
    }
}

/// Suggestion for fixing a lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// Concrete text replacement for auto-fix, if applicable.
    pub replacement: Option<LexReplacement>,
    /// Priority (lower = more likely relevant). 0 = most likely.
    pub priority: u8,
}

/// A concrete text replacement for an auto-fix.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexReplacement {
    /// The span to replace. Empty for pure insertions.
    pub span: Span,
    /// The replacement text.
    pub text: String,
}

impl LexSuggestion {
    /// A text-only suggestion (no code replacement).
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        Self {
            message: message.into(),
            replacement: None,
            priority,
        }
    }

    /// A suggestion that deletes `span`.
    pub fn removal(message: impl Into<String>, span: Span) -> Self {
        Self::replace(message, span, "")
    }

    /// A suggestion that inserts `text` at `offset`.
    pub fn insertion(message: impl Into<String>, offset: u32, text: impl Into<String>) -> Self {
        Self::replace(message, Span::point(offset), text)
    }

    /// A suggestion that replaces `span` with `text`.
    pub fn replace(message: impl Into<String>, span: Span, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: text.into(),
            }),
            priority: 0,
        }
    }
}

const VALID_ESCAPES: &str =
    r#"valid escapes are \a \b \f \n \r \t \v \\ \" \', \x with 1-4 hex digits, \u with 4, \U with 8"#;

impl LexError {
    /// A string literal that runs to the end of its line, or of the input.
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedString,
            context: LexErrorContext::InsideString { start: span.start },
            suggestions: vec![LexSuggestion::insertion(
                "add closing `\"`",
                span.end,
                "\"",
            )],
        }
    }

    /// A block or doc comment still open at end of input.
    #[cold]
    pub fn unterminated_comment(span: Span, doc: bool) -> Self {
        let context = if doc {
            LexErrorContext::InsideDocComment { start: span.start }
        } else {
            LexErrorContext::InsideComment { start: span.start }
        };
        Self {
            span,
            kind: LexErrorKind::UnterminatedComment,
            context,
            suggestions: vec![LexSuggestion::insertion("add closing `*/`", span.end, "*/")],
        }
    }

    /// A stray or malformed `'`.
    #[cold]
    pub fn invalid_char_literal(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidCharLiteral,
            context: LexErrorContext::InsideChar,
            suggestions: vec![LexSuggestion::text(
                "a character literal holds exactly one character or escape; use `\"` for text",
                0,
            )],
        }
    }

    /// An unknown escape inside a string opened at `string_start`.
    #[cold]
    pub fn invalid_escape(span: Span, escape: char, string_start: u32) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidEscape { escape },
            context: LexErrorContext::InsideString {
                start: string_start,
            },
            suggestions: vec![
                LexSuggestion::text(VALID_ESCAPES, 1),
                LexSuggestion::replace(
                    "escape the backslash to keep it literally",
                    Span::new(span.start, span.start + 1),
                    "\\\\",
                ),
            ],
        }
    }

    /// A character no rule of the active mode recognizes.
    #[cold]
    pub fn unrecognized_character(span: Span, found: char) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnrecognizedCharacter { found },
            context: LexErrorContext::TopLevel,
            suggestions: vec![LexSuggestion::removal("remove this character", span)],
        }
    }

    /// A `/*` inside a doc comment opened at `doc_start`.
    #[cold]
    pub fn nested_doc_comment(span: Span, doc_start: u32) -> Self {
        Self {
            span,
            kind: LexErrorKind::NestedDocComment,
            context: LexErrorContext::InsideDocComment { start: doc_start },
            suggestions: vec![LexSuggestion::text(
                "comments do not nest; close the doc comment with `*/` first",
                0,
            )],
        }
    }

    /// Replace the context.
    #[must_use]
    pub fn with_context(mut self, context: LexErrorContext) -> Self {
        self.context = context;
        self
    }
}

/// Collect every lexical error in `source`, in source order.
pub fn lex_errors(source: &str) -> Vec<LexError> {
    let mut tokens = Tokens::new(source);
    let mut errors = Vec::new();
    // Start of the string or comment currently open, if any.
    let mut opened_at = 0;

    loop {
        let mode = tokens.modes().top();
        let depth = tokens.modes().depth();
        let Some(token) = tokens.next() else { break };
        if tokens.modes().depth() > depth {
            opened_at = token.span.start;
        }
        if let Some(error) = token_error(source, token, mode, opened_at) {
            errors.push(error);
        }
    }

    let end = tokens.offset();
    let open = Span::new(opened_at, end);
    match tokens.modes().top() {
        Mode::String => errors.push(LexError::unterminated_string(open)),
        Mode::BlockComment => errors.push(LexError::unterminated_comment(open, false)),
        Mode::DocComment => errors.push(LexError::unterminated_comment(open, true)),
        Mode::Root | Mode::Whitespace => {}
    }
    errors
}

fn token_error(source: &str, token: Token, mode: Mode, opened_at: u32) -> Option<LexError> {
    let span = token.span;
    let text = token.text(source);
    let error = match token.category {
        TokenCategory::StringInvalid => LexError::unterminated_string(span),
        TokenCategory::CharInvalid => LexError::invalid_char_literal(span),
        TokenCategory::StringEscapeInvalid => {
            let escape = text.chars().nth(1).unwrap_or('\\');
            LexError::invalid_escape(span, escape, opened_at)
        }
        TokenCategory::DocCommentInvalid => LexError::nested_doc_comment(span, opened_at),
        TokenCategory::Invalid => {
            let found = text.chars().next().unwrap_or('\u{FFFD}');
            let error = LexError::unrecognized_character(span, found);
            if mode == Mode::String {
                error.with_context(LexErrorContext::InsideString { start: opened_at })
            } else {
                error
            }
        }
        _ => return None,
    };
    Some(error)
}
