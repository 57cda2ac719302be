//! `leia check`: report lexical diagnostics.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use leia_lexer::{lex_errors, LexError};
use tracing::debug;

use super::{read_file, CliError};

/// Check a file, printing diagnostics to stderr.
///
/// Returns the number of errors found; the caller decides the exit status.
pub fn check_file(path: &str) -> Result<usize, CliError> {
    let content = read_file(path)?;
    let errors = lex_errors(&content);
    debug!(path, errors = errors.len(), "checked file");
    if !errors.is_empty() {
        eprint!("{}", render_diagnostics(path, &content, &errors, true)?);
    }
    Ok(errors.len())
}

/// Render `errors` as annotated source snippets.
pub fn render_diagnostics(
    path: &str,
    source: &str,
    errors: &[LexError],
    color: bool,
) -> Result<String, CliError> {
    let mut out = Vec::new();
    for error in errors {
        report(path, source, error, color)
            .write((path, Source::from(source)), &mut out)
            .map_err(CliError::Render)?;
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn report<'a>(
    path: &'a str,
    source: &str,
    error: &LexError,
    color: bool,
) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    // Spans are byte offsets; reports index by character.
    let start = char_offset(source, error.span.start);
    let end = char_offset(source, error.span.end);

    let mut builder = Report::build(ReportKind::Error, path, start)
        .with_config(Config::default().with_color(color))
        .with_message(error.kind.to_string())
        .with_label(
            Label::new((path, start..end))
                .with_message(error.context.describe())
                .with_color(Color::Red),
        );
    if !error.suggestions.is_empty() {
        let help: Vec<_> = error.suggestions.iter().map(|s| s.message.as_str()).collect();
        builder = builder.with_help(help.join("; "));
    }
    builder.finish()
}

fn char_offset(source: &str, byte: u32) -> usize {
    let byte = (byte as usize).min(source.len());
    source
        .char_indices()
        .take_while(|(i, _)| *i < byte)
        .count()
}
