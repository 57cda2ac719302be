//! The scanning engine.
//!
//! [`Tokens`] walks the source one rule match at a time. At each step it
//! takes the rules of the mode on top of the [`ModeStack`], commits the
//! first one whose recognizer consumes input, emits its token(s), and
//! applies the rule's push or pop. If nothing matches it emits a single
//! [`TokenCategory::Invalid`] token over one character.
//!
//! # Termination
//!
//! Every step advances by at least one byte: rule matches must be
//! non-empty, and the fallback consumes a whole character. A source of
//! length `L` therefore yields at most `L` tokens (plus the two extra
//! tokens a char-escape literal splits into).
//!
//! # Restarting
//!
//! The only state is the cursor and the mode stack. [`Tokens::resume`]
//! starts a scan from an arbitrary mode stack, so a host can highlight one
//! line at a time and feed each line's final stack into the next line.

use smallvec::SmallVec;
use tracing::trace;

use crate::classify::classify;
use crate::cursor::Cursor;
use crate::mode::ModeStack;
use crate::rules::{Action, Rule, RuleTable, Transition};
use crate::token::{Span, Token, TokenCategory};

/// Lazy token stream over one source string.
///
/// Every byte of the source belongs to exactly one yielded token,
/// whitespace included; see [`Tokens::significant`] to drop whitespace.
#[derive(Clone, Debug)]
pub struct Tokens<'src> {
    source: &'src str,
    cursor: Cursor<'src>,
    modes: ModeStack,
    /// Tokens already matched but not yet yielded, in reverse order.
    pending: SmallVec<[Token; 2]>,
    rules: &'static RuleTable,
}

impl<'src> Tokens<'src> {
    /// Scan `source` starting in [`Mode::Root`].
    pub fn new(source: &'src str) -> Self {
        Self::resume(source, ModeStack::new())
    }

    /// Scan `source` starting from a mode stack left by an earlier scan.
    pub fn resume(source: &'src str, modes: ModeStack) -> Self {
        Tokens {
            source,
            cursor: Cursor::at(source, 0),
            modes,
            pending: SmallVec::new(),
            rules: RuleTable::get(),
        }
    }

    /// The mode stack as of the last yielded token.
    ///
    /// After the iterator is exhausted this is the end-of-input state: a
    /// stack deeper than `[Root]` means a string or comment was left open.
    pub fn modes(&self) -> &ModeStack {
        &self.modes
    }

    /// Consume the stream, returning its current mode stack.
    pub fn into_modes(self) -> ModeStack {
        self.modes
    }

    /// Byte offset of the next unscanned input.
    pub fn offset(&self) -> u32 {
        self.cursor.pos()
    }

    /// Drop whitespace, keeping the tokens a highlighter colors.
    pub fn significant(self) -> impl Iterator<Item = Token> + 'src {
        self.filter(|token| !token.category.is_trivia())
    }

    /// Match one rule (or the fallback) at the cursor.
    fn step(&mut self) -> Token {
        let start = self.cursor.pos();
        let mode = self.modes.top();

        for &rule in self.rules.rules_for(mode) {
            let mut probe = self.cursor;
            if (rule.recognizer)(&mut probe) && probe.pos() > start {
                self.cursor = probe;
                let token = self.emit(rule, Span::new(start, probe.pos()));
                self.transition(rule);
                return token;
            }
        }

        self.cursor.advance_char();
        let span = Span::new(start, self.cursor.pos());
        trace!(%mode, %span, "no rule matched");
        Token::new(TokenCategory::Invalid, span)
    }

    /// Turn a matched span into the first token, queueing any others.
    fn emit(&mut self, rule: &Rule, span: Span) -> Token {
        match rule.action {
            Action::Emit(category) => Token::new(category, span),
            Action::Classify(kind) => {
                let lexeme = &self.source[span.to_range()];
                Token::new(classify(lexeme, kind), span)
            }
            Action::Enclosed { delimiter, body } => {
                if span.len() < 3 {
                    return Token::new(delimiter, span);
                }
                let open = Span::new(span.start, span.start + 1);
                let inner = Span::new(span.start + 1, span.end - 1);
                let close = Span::new(span.end - 1, span.end);
                self.pending.push(Token::new(delimiter, close));
                self.pending.push(Token::new(body, inner));
                Token::new(delimiter, open)
            }
        }
    }

    fn transition(&mut self, rule: &Rule) {
        match rule.transition {
            Transition::Stay => {}
            Transition::Push(mode) => {
                trace!(rule = rule.name, %mode, depth = self.modes.depth(), "push");
                self.modes.push(mode);
            }
            Transition::Pop => match self.modes.pop() {
                Some(mode) => trace!(rule = rule.name, %mode, "pop"),
                None => trace!(rule = rule.name, "pop at root ignored"),
            },
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.pop() {
            return Some(token);
        }
        if self.cursor.is_eof() {
            return None;
        }
        Some(self.step())
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Tokens of one line plus the mode stack the line ends in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineTokens {
    pub tokens: Vec<Token>,
    pub end_state: ModeStack,
}

/// Tokenize a single line of a document, starting from `state`.
///
/// Spans are relative to the start of `line`. Feed `end_state` into the
/// next line's call to continue strings and comments across lines.
pub fn tokenize_line(line: &str, state: &ModeStack) -> LineTokens {
    let mut tokens = Tokens::resume(line, state.clone());
    let collected = tokens.by_ref().collect();
    LineTokens {
        tokens: collected,
        end_state: tokens.into_modes(),
    }
}

#[cfg(test)]
mod tests;
