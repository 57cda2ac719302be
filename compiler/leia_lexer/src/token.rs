//! Tokens, spans, and the closed set of highlighting categories.

use std::fmt;

use serde::Serialize;

/// Byte span into the scanned source.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from source start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

const _: () = assert!(std::mem::size_of::<Span>() == 8);

/// A classified span of source text.
///
/// Tokens never own text; use [`Token::text`] with the scanned source to
/// recover the lexeme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub category: TokenCategory,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(category: TokenCategory, span: Span) -> Self {
        Token { category, span }
    }

    /// The lexeme this token covers in `source`.
    ///
    /// `source` must be the text the token was produced from.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.to_range()]
    }
}

/// Reserved words of the language.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Keyword {
    Fn,
    If,
    Else,
    True,
    False,
    Print,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 6] = [
        Keyword::Fn,
        Keyword::If,
        Keyword::Else,
        Keyword::True,
        Keyword::False,
        Keyword::Print,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Fn => "fn",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Print => "print",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which pair a bracket token belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BracketKind {
    /// `{` or `}`
    Curly,
    /// `(` or `)`
    Paren,
    /// `[` or `]`
    Square,
    /// A lone `<` or `>`
    Angle,
}

/// Highlighting category of a token.
///
/// The set is closed: every span the scanner emits carries exactly one of
/// these. Sub-kinds (keyword name, bracket pair) are tagged inline so that
/// consumers can match on the umbrella category or the specific one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenCategory {
    Identifier,
    Keyword(Keyword),
    /// A symbol run that is a member of the operator set.
    Operator,
    /// Statement punctuation, or a symbol run outside the operator set.
    Delimiter,
    Bracket(BracketKind),
    /// `@name`
    Annotation,

    // === Numbers ===
    Integer,
    Float,
    Hex,
    Octal,
    Binary,

    // === Strings & Chars ===
    /// String delimiters and string body text.
    String,
    /// A well-formed escape sequence inside a string or char literal.
    StringEscape,
    /// A `\` followed by something that is not a recognized escape.
    StringEscapeInvalid,
    /// A string opened on a line that never closes it.
    StringInvalid,
    Char,
    /// A `'` that does not start a well-formed char literal.
    CharInvalid,

    // === Comments ===
    LineComment,
    BlockComment,
    DocComment,
    /// A `/*` inside a doc comment; comments do not nest.
    DocCommentInvalid,

    // === Trivia & Errors ===
    /// Spaces, tabs, and line breaks. Discardable for highlighting.
    Whitespace,
    /// A character no rule of the active mode recognizes.
    Invalid,
}

impl TokenCategory {
    /// Dotted scope name used by highlighting themes.
    ///
    /// Names are hierarchical, so a theme rule for `string` also colors
    /// `string.escape` and `string.char`.
    pub const fn scope(self) -> &'static str {
        match self {
            TokenCategory::Identifier => "identifier",
            TokenCategory::Keyword(keyword) => match keyword {
                Keyword::Fn => "keyword.fn",
                Keyword::If => "keyword.if",
                Keyword::Else => "keyword.else",
                Keyword::True => "keyword.true",
                Keyword::False => "keyword.false",
                Keyword::Print => "keyword.print",
            },
            TokenCategory::Operator => "operator",
            TokenCategory::Delimiter => "delimiter",
            TokenCategory::Bracket(kind) => match kind {
                BracketKind::Curly => "delimiter.curly",
                BracketKind::Paren => "delimiter.parenthesis",
                BracketKind::Square => "delimiter.square",
                BracketKind::Angle => "delimiter.angle",
            },
            TokenCategory::Annotation => "annotation",
            TokenCategory::Integer => "number.integer",
            TokenCategory::Float => "number.float",
            TokenCategory::Hex => "number.hex",
            TokenCategory::Octal => "number.octal",
            TokenCategory::Binary => "number.binary",
            TokenCategory::String => "string",
            TokenCategory::StringEscape => "string.escape",
            TokenCategory::StringEscapeInvalid => "string.escape.invalid",
            TokenCategory::StringInvalid => "string.invalid",
            TokenCategory::Char => "string.char",
            TokenCategory::CharInvalid => "string.char.invalid",
            TokenCategory::LineComment => "comment.line",
            TokenCategory::BlockComment => "comment.block",
            TokenCategory::DocComment => "comment.doc",
            TokenCategory::DocCommentInvalid => "comment.doc.invalid",
            TokenCategory::Whitespace => "whitespace",
            TokenCategory::Invalid => "invalid",
        }
    }

    /// Returns `true` for categories a highlighter may drop.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenCategory::Whitespace)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scope())
    }
}

#[cfg(test)]
mod tests;
