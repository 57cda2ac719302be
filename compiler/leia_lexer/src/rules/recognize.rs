//! Recognizers: the pattern half of each rule.
//!
//! Each recognizer advances the cursor over the prefix it accepts and
//! returns `true`, or returns `false` with the cursor in an unspecified
//! position (the scanner discards the snapshot). Identifier, number, and
//! run recognizers are greedy.

use crate::cursor::Cursor;

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Characters that form operator and delimiter runs.
#[inline]
fn is_symbol(b: u8) -> bool {
    matches!(
        b,
        b'=' | b'>' | b'<' | b'!' | b'~' | b'?' | b':' | b'&' | b'|' | b'+' | b'-' | b'*' | b'/'
            | b'^' | b'%'
    )
}

#[inline]
fn is_octal(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
fn is_binary(b: u8) -> bool {
    b == b'0' || b == b'1'
}

// ─── Code ──────────────────────────────────────────────────────

pub(crate) fn identifier(c: &mut Cursor<'_>) -> bool {
    if !c.eat_if(is_ident_start) {
        return false;
    }
    c.eat_while(is_ident_continue);
    true
}

pub(crate) fn bracket(c: &mut Cursor<'_>) -> bool {
    c.eat_if(|b| matches!(b, b'{' | b'}' | b'(' | b')' | b'[' | b']'))
}

/// `<` or `>` not followed by another symbol character.
pub(crate) fn lone_angle(c: &mut Cursor<'_>) -> bool {
    c.eat_if(|b| b == b'<' || b == b'>') && !is_symbol(c.current())
}

pub(crate) fn symbol_run(c: &mut Cursor<'_>) -> bool {
    c.eat_while(is_symbol) > 0
}

/// `@`, optional horizontal space, identifier.
pub(crate) fn annotation(c: &mut Cursor<'_>) -> bool {
    if !c.eat(b'@') {
        return false;
    }
    c.eat_while(|b| b == b' ' || b == b'\t');
    identifier(c)
}

/// `;`, `,`, or `.`
pub(crate) fn punctuation(c: &mut Cursor<'_>) -> bool {
    c.eat_if(|b| matches!(b, b';' | b',' | b'.'))
}

// ─── Numbers ───────────────────────────────────────────────────

/// Digit groups separated by underscores: `d+(_+d+)*`.
///
/// Trailing underscores are not consumed: `1_` eats only `1`.
fn digit_groups(c: &mut Cursor<'_>, is_digit: fn(u8) -> bool) -> bool {
    if c.eat_while(is_digit) == 0 {
        return false;
    }
    loop {
        let mut probe = *c;
        if probe.eat_while(|b| b == b'_') == 0 || probe.eat_while(is_digit) == 0 {
            return true;
        }
        *c = probe;
    }
}

fn decimal_digits(c: &mut Cursor<'_>) -> bool {
    digit_groups(c, |b| b.is_ascii_digit())
}

/// Optional `[fFdD]`.
fn float_suffix(c: &mut Cursor<'_>) {
    c.eat_if(|b| matches!(b, b'f' | b'F' | b'd' | b'D'));
}

/// Optional `[lL]`.
fn long_suffix(c: &mut Cursor<'_>) {
    c.eat_if(|b| b == b'l' || b == b'L');
}

/// Optional `[+-]? digits`; consumes nothing unless the digits are present.
fn signed_digits(c: &mut Cursor<'_>) -> bool {
    let mut probe = *c;
    probe.eat_if(|b| b == b'+' || b == b'-');
    if decimal_digits(&mut probe) {
        *c = probe;
        true
    } else {
        false
    }
}

/// `digits [eE] ([+-]? digits)? [fFdD]?`
///
/// The exponent digits are optional: `1e` is a float on its own.
pub(crate) fn scientific_float(c: &mut Cursor<'_>) -> bool {
    if !decimal_digits(c) || !c.eat_if(|b| b == b'e' || b == b'E') {
        return false;
    }
    signed_digits(c);
    float_suffix(c);
    true
}

/// `digits . digits ([eE] [+-]? digits)? [fFdD]?`
pub(crate) fn decimal_float(c: &mut Cursor<'_>) -> bool {
    if !decimal_digits(c) || !c.eat(b'.') || !decimal_digits(c) {
        return false;
    }
    let mut probe = *c;
    if probe.eat_if(|b| b == b'e' || b == b'E') && signed_digits(&mut probe) {
        *c = probe;
    }
    float_suffix(c);
    true
}

/// `0[xX] hexdigits [lL]?`
pub(crate) fn hex_number(c: &mut Cursor<'_>) -> bool {
    if !c.eat(b'0') || !c.eat_if(|b| b == b'x' || b == b'X') {
        return false;
    }
    if !digit_groups(c, |b| b.is_ascii_hexdigit()) {
        return false;
    }
    long_suffix(c);
    true
}

/// `0 octaldigits [lL]?`
pub(crate) fn octal_number(c: &mut Cursor<'_>) -> bool {
    if !c.eat(b'0') || !digit_groups(c, is_octal) {
        return false;
    }
    long_suffix(c);
    true
}

/// `0[bB] binarydigits [lL]?`
pub(crate) fn binary_number(c: &mut Cursor<'_>) -> bool {
    if !c.eat(b'0') || !c.eat_if(|b| b == b'b' || b == b'B') {
        return false;
    }
    if !digit_groups(c, is_binary) {
        return false;
    }
    long_suffix(c);
    true
}

/// `digits [fFdD]`
pub(crate) fn suffixed_float(c: &mut Cursor<'_>) -> bool {
    decimal_digits(c) && c.eat_if(|b| matches!(b, b'f' | b'F' | b'd' | b'D'))
}

/// `digits [lL]?`
pub(crate) fn integer(c: &mut Cursor<'_>) -> bool {
    if !decimal_digits(c) {
        return false;
    }
    long_suffix(c);
    true
}

// ─── Strings & Chars ───────────────────────────────────────────

/// One escape sequence: `\` followed by a simple escape letter, `x` and
/// 1-4 hex digits, `u` and 4 hex digits, or `U` and 8 hex digits.
pub(crate) fn escape(c: &mut Cursor<'_>) -> bool {
    if !c.eat(b'\\') {
        return false;
    }
    match c.current() {
        b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'\\' | b'"' | b'\'' => {
            c.advance();
            true
        }
        b'x' => {
            c.advance();
            c.eat_while_max(4, |b| b.is_ascii_hexdigit()) >= 1
        }
        b'u' => {
            c.advance();
            c.eat_while_max(4, |b| b.is_ascii_hexdigit()) == 4
        }
        b'U' => {
            c.advance();
            c.eat_while_max(8, |b| b.is_ascii_hexdigit()) == 8
        }
        _ => false,
    }
}

/// A `"` whose string runs to the end of the line without closing.
///
/// Matches the whole rest of the line. A `\` escapes whatever single
/// character follows it, so `\"` does not close the string.
pub(crate) fn unterminated_string(c: &mut Cursor<'_>) -> bool {
    if !c.eat(b'"') {
        return false;
    }
    loop {
        if c.at_line_end() {
            return true;
        }
        match c.current() {
            b'"' => return false,
            b'\\' => {
                c.advance();
                if c.at_line_end() {
                    // A trailing `\` escapes nothing; the line is not a
                    // complete unterminated string.
                    return false;
                }
                c.advance_char();
            }
            _ => c.advance(),
        }
    }
}

pub(crate) fn double_quote(c: &mut Cursor<'_>) -> bool {
    c.eat(b'"')
}

/// `'x'` where `x` is one character other than `\`, `'`, or a line break.
pub(crate) fn char_literal(c: &mut Cursor<'_>) -> bool {
    if !c.eat(b'\'') || c.at_line_end() || matches!(c.current(), b'\\' | b'\'') {
        return false;
    }
    c.advance_char();
    c.eat(b'\'')
}

/// `'` escape `'`
pub(crate) fn char_escape_literal(c: &mut Cursor<'_>) -> bool {
    c.eat(b'\'') && escape(c) && c.eat(b'\'')
}

pub(crate) fn single_quote(c: &mut Cursor<'_>) -> bool {
    c.eat(b'\'')
}

/// String body text: anything but `\` and `"`, line breaks included.
pub(crate) fn string_text(c: &mut Cursor<'_>) -> bool {
    c.eat_while(|b| b != b'\\' && b != b'"') > 0
}

/// `\` followed by any character on the same line.
pub(crate) fn any_escape(c: &mut Cursor<'_>) -> bool {
    if !c.eat(b'\\') || c.at_line_end() {
        return false;
    }
    c.advance_char();
    true
}

// ─── Whitespace & Comments ─────────────────────────────────────

pub(crate) fn whitespace(c: &mut Cursor<'_>) -> bool {
    c.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n')) > 0
}

/// `/**` not immediately followed by `/`, so `/**/` stays a block comment.
pub(crate) fn doc_comment_open(c: &mut Cursor<'_>) -> bool {
    c.eat_str(b"/**") && c.current() != b'/'
}

pub(crate) fn block_comment_open(c: &mut Cursor<'_>) -> bool {
    c.eat_str(b"/*")
}

/// `//` through the end of the line, line break excluded.
pub(crate) fn line_comment(c: &mut Cursor<'_>) -> bool {
    if !c.eat_str(b"//") {
        return false;
    }
    c.eat_until_line_end();
    true
}

/// Comment body text: anything but `/` and `*`.
pub(crate) fn comment_text(c: &mut Cursor<'_>) -> bool {
    c.eat_while(|b| b != b'/' && b != b'*') > 0
}

pub(crate) fn comment_close(c: &mut Cursor<'_>) -> bool {
    c.eat_str(b"*/")
}

/// A lone `/` or `*` inside a comment.
pub(crate) fn comment_symbol(c: &mut Cursor<'_>) -> bool {
    c.eat_if(|b| b == b'/' || b == b'*')
}
