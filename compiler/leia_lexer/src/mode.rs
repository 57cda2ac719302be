//! Lexical modes and the per-scan mode stack.
//!
//! A mode selects which rules apply at the cursor. Only [`Mode::Root`]
//! enters other modes, and every entered mode leaves straight back to
//! `Root`: comments never nest, and strings never contain comments.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// A named lexical context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Code body.
    Root,
    /// Whitespace and comment openers. Only ever included into `Root`,
    /// never pushed.
    Whitespace,
    /// Inside `/* ... */`.
    BlockComment,
    /// Inside `/** ... */`.
    DocComment,
    /// Inside `" ... "`.
    String,
}

impl Mode {
    pub const COUNT: usize = 5;

    pub const ALL: [Mode; Mode::COUNT] = [
        Mode::Root,
        Mode::Whitespace,
        Mode::BlockComment,
        Mode::DocComment,
        Mode::String,
    ];

    /// Stable name, also accepted by [`Mode::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Root => "root",
            Mode::Whitespace => "whitespace",
            Mode::BlockComment => "comment",
            Mode::DocComment => "doc",
            Mode::String => "string",
        }
    }

    /// Returns `true` for modes a rule may push: the ones that open a
    /// string or comment. `Root` is the floor and `Whitespace` is only
    /// ever included.
    #[inline]
    pub const fn is_pushable(self) -> bool {
        matches!(self, Mode::BlockComment | Mode::DocComment | Mode::String)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A mode name that names no defined mode.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown lexer mode `{name}` (expected one of: root, whitespace, comment, doc, string)")]
pub struct UnknownMode {
    pub name: String,
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| UnknownMode { name: s.to_owned() })
    }
}

/// Stack of active modes. The bottom entry is always [`Mode::Root`].
///
/// The stack is part of the scan state: seeding a new scan with the stack
/// left by a previous one resumes highlighting mid-comment or mid-string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ModeStack {
    modes: SmallVec<[Mode; 4]>,
}

impl ModeStack {
    /// A stack holding only `Root`.
    pub fn new() -> Self {
        let mut modes = SmallVec::new();
        modes.push(Mode::Root);
        ModeStack { modes }
    }

    /// The active mode.
    #[inline]
    pub fn top(&self) -> Mode {
        self.modes.last().copied().unwrap_or(Mode::Root)
    }

    /// Enter `mode`. `Root` and `Whitespace` are never pushed; returns
    /// `false` and leaves the stack unchanged for them.
    pub fn push(&mut self, mode: Mode) -> bool {
        if mode.is_pushable() {
            self.modes.push(mode);
            true
        } else {
            false
        }
    }

    /// Leave the active mode. Popping `Root` is a no-op.
    ///
    /// Returns the mode that was left, or `None` when only `Root` remains.
    pub fn pop(&mut self) -> Option<Mode> {
        if self.modes.len() > 1 {
            self.modes.pop()
        } else {
            None
        }
    }

    /// Returns `true` when no string or comment is open.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.top() == Mode::Root
    }

    /// Number of entries, including the `Root` floor.
    pub fn depth(&self) -> usize {
        self.modes.len()
    }

    /// Modes from bottom (`Root`) to top.
    pub fn as_slice(&self) -> &[Mode] {
        &self.modes
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModeStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.modes.iter()).finish()
    }
}
