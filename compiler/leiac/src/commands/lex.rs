//! `leia lex`: dump the raw token stream.

use std::fmt::Write;

use leia_lexer::{Mode, Tokens};
use tracing::debug;

use super::{read_file, CliError};

/// Lex a file and print every token, whitespace included.
pub fn lex_file(path: &str) -> Result<(), CliError> {
    let content = read_file(path)?;
    print!("{}", render_tokens(path, &content));
    Ok(())
}

/// One line per token: category, span, and lexeme.
///
/// A trailing line names the open modes when the input ends inside a
/// string or comment.
pub fn render_tokens(path: &str, source: &str) -> String {
    let mut tokens = Tokens::new(source);
    let mut lines = String::new();
    let mut count = 0usize;
    for token in tokens.by_ref() {
        count += 1;
        let _ = writeln!(
            lines,
            "  {:?} @ {} {:?}",
            token.category,
            token.span,
            token.text(source)
        );
    }
    debug!(path, count, "lexed file");

    let mut out = format!("Tokens for '{path}' ({count} tokens):\n{lines}");
    if !tokens.modes().is_root() {
        let open: Vec<&str> = tokens
            .modes()
            .as_slice()
            .iter()
            .copied()
            .map(Mode::name)
            .collect();
        let _ = writeln!(out, "  (input ends in modes {})", open.join(" > "));
    }
    out
}
