//! Byte cursor over the scanned source.
//!
//! Recognizers advance a cursor to claim input. The cursor is [`Copy`], so
//! the scanner hands each rule a snapshot and only commits it when the rule
//! matches; a failed recognizer may leave its snapshot anywhere.
//!
//! # End of input
//!
//! [`current()`](Cursor::current) returns `0x00` past the end of the
//! source. Interior null bytes also read as `0x00`; use
//! [`is_eof()`](Cursor::is_eof) to tell them apart. The `eat_*` methods
//! never advance past the end regardless of the predicate.
//!
//! # Character boundaries
//!
//! Every rule stops on ASCII bytes or steps over whole characters with
//! [`advance_char()`](Cursor::advance_char), so every committed position
//! falls on a UTF-8 boundary.

/// Copyable read position in a source string.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a [u8],
    /// Current read position (byte index into `src`).
    pos: u32,
    /// Scannable length. Saturates at `u32::MAX` for sources over 4 GiB.
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at `pos`.
    pub(crate) fn at(source: &'a str, pos: u32) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        debug_assert!(pos <= source_len, "cursor start {pos} past end {source_len}");
        Self {
            src: source.as_bytes(),
            pos,
            source_len,
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos < self.source_len {
            self.src[pos as usize]
        } else {
            0
        }
    }

    /// Advance the cursor by one byte. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Returns `true` at EOF or before a `\n` or `\r`.
    #[inline]
    pub fn at_line_end(&self) -> bool {
        self.is_eof() || matches!(self.current(), b'\n' | b'\r')
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Consume `byte` if it is the current byte.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if !self.is_eof() && self.current() == byte {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the current byte if `pred` accepts it.
    #[inline]
    pub fn eat_if(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        if !self.is_eof() && pred(self.current()) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `bytes` if the input continues with exactly them.
    ///
    /// On failure the cursor is left where it was.
    pub fn eat_str(&mut self, bytes: &[u8]) -> bool {
        let start = self.pos as usize;
        let end = self.source_len as usize;
        if self.src[start..end].starts_with(bytes) {
            self.pos += bytes.len() as u32;
            true
        } else {
            false
        }
    }

    /// Advance while `pred` returns `true`. Returns the number of bytes eaten.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> u32 {
        let start = self.pos;
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance while `pred` returns `true`, eating at most `max` bytes.
    pub fn eat_while_max(&mut self, max: u32, pred: impl Fn(u8) -> bool) -> u32 {
        let start = self.pos;
        while self.pos - start < max && !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character. No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.current());
        self.pos = self.pos.saturating_add(width).min(self.source_len);
    }

    /// Advance to the next `\n` or `\r`, or to EOF if there is none.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_line_end(&mut self) {
        let remaining = &self.src[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr2(b'\n', b'\r', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }
}
