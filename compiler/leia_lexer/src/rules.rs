//! The rule table: ordered lexical rules per mode.
//!
//! Rules are data. Each pairs a recognizer with an [`Action`] that decides
//! the emitted category and a [`Transition`] on the mode stack. Within a
//! mode the first rule whose recognizer consumes input wins, so the order
//! of each table below is part of the language definition:
//!
//! - identifiers come before everything else, then the included whitespace
//!   rules, so `/*` opens a comment before the symbol-run rule sees `/`;
//! - lone `<`/`>` come before the symbol-run rule, so `<=` stays one run;
//! - number forms are tried longest-prefix-first (`1e5`, `1.5`, `0x1`,
//!   `01`, `0b1`, `1f`, `1`), and all of them before `.`, so `3.14` is one
//!   float rather than `3`, `.`, `14`;
//! - the unterminated-string rule comes before the plain `"` opener.

mod recognize;

use std::fmt;
use std::sync::LazyLock;

use crate::classify::LexemeKind;
use crate::cursor::Cursor;
use crate::mode::Mode;
use crate::token::TokenCategory;

/// Consumes a prefix of the input, returning `true` on a match.
pub type Recognizer = fn(&mut Cursor<'_>) -> bool;

/// How a matched span becomes tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// One token of a fixed category.
    Emit(TokenCategory),
    /// One token whose category the classifier resolves from the lexeme.
    Classify(LexemeKind),
    /// Three tokens: the first and last byte as `delimiter`, the bytes
    /// between as `body`. Used for `'\n'`-style char literals.
    Enclosed {
        delimiter: TokenCategory,
        body: TokenCategory,
    },
}

/// Mode stack effect applied after a rule matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Push(Mode),
    Pop,
}

/// A single lexical rule.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short identifier used in traces and tests.
    pub name: &'static str,
    pub recognizer: Recognizer,
    pub action: Action,
    pub transition: Transition,
}

impl Rule {
    const fn emit(name: &'static str, recognizer: Recognizer, category: TokenCategory) -> Self {
        Rule {
            name,
            recognizer,
            action: Action::Emit(category),
            transition: Transition::Stay,
        }
    }

    const fn classify(name: &'static str, recognizer: Recognizer, kind: LexemeKind) -> Self {
        Rule {
            name,
            recognizer,
            action: Action::Classify(kind),
            transition: Transition::Stay,
        }
    }

    const fn push(self, mode: Mode) -> Self {
        Rule {
            transition: Transition::Push(mode),
            ..self
        }
    }

    const fn pop(self) -> Self {
        Rule {
            transition: Transition::Pop,
            ..self
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("action", &self.action)
            .field("transition", &self.transition)
            .finish_non_exhaustive()
    }
}

/// An entry in a mode's declared rule list.
#[derive(Clone, Copy, Debug)]
pub enum RuleEntry {
    Rule(Rule),
    /// Splice another mode's rules in at this position.
    Include(Mode),
}

use self::RuleEntry::{Include, Rule as R};
use crate::token::TokenCategory as T;

const ROOT: &[RuleEntry] = &[
    R(Rule::classify("identifier", recognize::identifier, LexemeKind::IdentifierLike)),
    Include(Mode::Whitespace),
    R(Rule::classify("bracket", recognize::bracket, LexemeKind::Bracket)),
    R(Rule::classify("angle", recognize::lone_angle, LexemeKind::Bracket)),
    R(Rule::classify("symbols", recognize::symbol_run, LexemeKind::SymbolRun)),
    R(Rule::emit("annotation", recognize::annotation, T::Annotation)),
    R(Rule::emit("float.scientific", recognize::scientific_float, T::Float)),
    R(Rule::emit("float.decimal", recognize::decimal_float, T::Float)),
    R(Rule::emit("hex", recognize::hex_number, T::Hex)),
    R(Rule::emit("octal", recognize::octal_number, T::Octal)),
    R(Rule::emit("binary", recognize::binary_number, T::Binary)),
    R(Rule::emit("float.suffixed", recognize::suffixed_float, T::Float)),
    R(Rule::emit("integer", recognize::integer, T::Integer)),
    R(Rule::emit("punctuation", recognize::punctuation, T::Delimiter)),
    R(Rule::emit("string.unterminated", recognize::unterminated_string, T::StringInvalid)),
    R(Rule::emit("string.open", recognize::double_quote, T::String).push(Mode::String)),
    R(Rule::emit("char", recognize::char_literal, T::Char)),
    R(Rule {
        name: "char.escape",
        recognizer: recognize::char_escape_literal,
        action: Action::Enclosed {
            delimiter: T::Char,
            body: T::StringEscape,
        },
        transition: Transition::Stay,
    }),
    R(Rule::emit("char.invalid", recognize::single_quote, T::CharInvalid)),
];

const WHITESPACE: &[RuleEntry] = &[
    R(Rule::emit("whitespace", recognize::whitespace, T::Whitespace)),
    R(Rule::emit("doc.open", recognize::doc_comment_open, T::DocComment).push(Mode::DocComment)),
    R(Rule::emit("comment.open", recognize::block_comment_open, T::BlockComment)
        .push(Mode::BlockComment)),
    R(Rule::emit("comment.line", recognize::line_comment, T::LineComment)),
];

const BLOCK_COMMENT: &[RuleEntry] = &[
    R(Rule::emit("comment.text", recognize::comment_text, T::BlockComment)),
    R(Rule::emit("comment.close", recognize::comment_close, T::BlockComment).pop()),
    R(Rule::emit("comment.symbol", recognize::comment_symbol, T::BlockComment)),
];

const DOC_COMMENT: &[RuleEntry] = &[
    R(Rule::emit("doc.text", recognize::comment_text, T::DocComment)),
    R(Rule::emit("doc.nested", recognize::block_comment_open, T::DocCommentInvalid)),
    R(Rule::emit("doc.close", recognize::comment_close, T::DocComment).pop()),
    R(Rule::emit("doc.symbol", recognize::comment_symbol, T::DocComment)),
];

const STRING: &[RuleEntry] = &[
    R(Rule::emit("string.text", recognize::string_text, T::String)),
    R(Rule::emit("string.escape", recognize::escape, T::StringEscape)),
    R(Rule::emit("string.escape.invalid", recognize::any_escape, T::StringEscapeInvalid)),
    R(Rule::emit("string.close", recognize::double_quote, T::String).pop()),
];

/// The rules exactly as declared for `mode`, includes unexpanded.
pub(crate) fn entries_for(mode: Mode) -> &'static [RuleEntry] {
    match mode {
        Mode::Root => ROOT,
        Mode::Whitespace => WHITESPACE,
        Mode::BlockComment => BLOCK_COMMENT,
        Mode::DocComment => DOC_COMMENT,
        Mode::String => STRING,
    }
}

/// Per-mode rule lists with includes expanded.
///
/// Built once per process; see [`RuleTable::get`].
pub struct RuleTable {
    modes: [Vec<&'static Rule>; Mode::COUNT],
}

static TABLE: LazyLock<RuleTable> = LazyLock::new(RuleTable::build);

impl RuleTable {
    /// The process-wide table.
    pub fn get() -> &'static RuleTable {
        &TABLE
    }

    fn build() -> Self {
        RuleTable {
            modes: Mode::ALL.map(|mode| {
                let mut rules = Vec::new();
                flatten(mode, &mut rules);
                rules
            }),
        }
    }

    /// Rules for `mode` in priority order.
    #[inline]
    pub fn rules_for(&self, mode: Mode) -> &[&'static Rule] {
        &self.modes[mode.index()]
    }
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for mode in Mode::ALL {
            let names: Vec<_> = self.rules_for(mode).iter().map(|r| r.name).collect();
            map.entry(&mode, &names);
        }
        map.finish()
    }
}

fn flatten(mode: Mode, out: &mut Vec<&'static Rule>) {
    for entry in entries_for(mode) {
        match entry {
            RuleEntry::Rule(rule) => out.push(rule),
            RuleEntry::Include(included) => {
                debug_assert_ne!(*included, mode, "mode {mode} includes itself");
                flatten(*included, out);
            }
        }
    }
}
