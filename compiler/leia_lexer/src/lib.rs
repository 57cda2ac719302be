//! Table-driven highlighting tokenizer for the Leia language.
//!
//! Source text goes in, classified spans come out. The scanner is a small
//! state machine over nested lexical modes (code, block comments, doc
//! comments, strings), with the rules of each mode declared as ordered data
//! in a [`RuleTable`]. Standalone: no editor or compiler dependencies.
//!
//! - [`Tokens`]: lazy token stream; every byte lands in exactly one token
//! - [`highlight`]: merged, whitespace-free spans for coloring
//! - [`lex_errors`]: diagnostics for malformed literals and stray characters
//! - [`language`]: the registration record for editor hosts
//!
//! ```
//! use leia_lexer::{tokenize, Keyword, TokenCategory};
//!
//! let tokens = tokenize("print 1;");
//! assert_eq!(tokens[0].category, TokenCategory::Keyword(Keyword::Print));
//! ```

mod classify;
mod cursor;
mod highlight;
mod language;
mod lex_error;
mod mode;
mod rules;
mod scanner;
mod token;

pub use classify::{classify, is_operator, lookup_keyword, LexemeKind, KEYWORDS, OPERATORS};
pub use cursor::Cursor;
pub use highlight::{highlight, scoped_spans, HighlightSpan, ScopedSpan};
pub use language::{language, register, Language, LanguageRegistry, Registration};
pub use lex_error::{
    lex_errors, LexError, LexErrorContext, LexErrorKind, LexReplacement, LexSuggestion,
};
pub use mode::{Mode, ModeStack, UnknownMode};
pub use rules::{Action, Recognizer, Rule, RuleEntry, RuleTable, Transition};
pub use scanner::{tokenize_line, LineTokens, Tokens};
pub use token::{BracketKind, Keyword, Span, Token, TokenCategory};

/// Scan all of `source`, whitespace included.
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokens::new(source).collect()
}
