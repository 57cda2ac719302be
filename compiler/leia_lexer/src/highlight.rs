//! Highlight spans for editors.
//!
//! A highlighter wants one span per colored region, not one per rule
//! match: a string literal is scanned as quote, body, escape, quote but
//! colored as a single region plus its escapes. [`highlight`] merges
//! touching tokens of the same category and drops whitespace.

use serde::Serialize;

use crate::language::Language;
use crate::scanner::Tokens;
use crate::token::{Span, TokenCategory};

/// A maximal run of touching same-category tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HighlightSpan {
    pub span: Span,
    pub category: TokenCategory,
}

/// A highlight span with its theme scope name resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScopedSpan {
    #[serde(flatten)]
    pub span: Span,
    /// Scope name with the language postfix, e.g. `keyword.fn.leia`.
    pub scope: String,
}

/// Highlight spans of `source` in order, whitespace excluded.
pub fn highlight(source: &str) -> Vec<HighlightSpan> {
    let mut spans: Vec<HighlightSpan> = Vec::new();
    for token in Tokens::new(source).significant() {
        match spans.last_mut() {
            Some(last) if last.category == token.category && last.span.end == token.span.start => {
                last.span = last.span.merge(token.span);
            }
            _ => spans.push(HighlightSpan {
                span: token.span,
                category: token.category,
            }),
        }
    }
    spans
}

/// Highlight spans of `source` with scope names for `language`.
pub fn scoped_spans(source: &str, language: &Language) -> Vec<ScopedSpan> {
    highlight(source)
        .into_iter()
        .map(|h| ScopedSpan {
            span: h.span,
            scope: language.scope(h.category),
        })
        .collect()
}
