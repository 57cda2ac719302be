//! `leia highlight`: print merged highlight spans with scope names.

use std::fmt::Write;
use std::path::Path;

use leia_lexer::{scoped_spans, Language, LanguageRegistry};
use tracing::debug;

use super::{read_file, CliError};

/// Output shape for `leia highlight`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HighlightFormat {
    /// `start..end scope` per line.
    #[default]
    Text,
    /// A JSON array of `{start, end, scope}` objects.
    Json,
}

pub fn highlight_file(path: &str, format: HighlightFormat) -> Result<(), CliError> {
    let content = read_file(path)?;
    let language = language_for(path)?;
    println!("{}", render_highlight(&content, language, format)?);
    Ok(())
}

/// The registered language claiming the extension of `path`.
pub fn language_for(path: &str) -> Result<&'static Language, CliError> {
    let mut registry = LanguageRegistry::new();
    leia_lexer::register(&mut registry);
    Path::new(path)
        .extension()
        .and_then(|extension| extension.to_str())
        .and_then(|extension| registry.for_extension(extension))
        .ok_or_else(|| CliError::UnknownLanguage {
            path: path.to_owned(),
        })
}

pub fn render_highlight(
    source: &str,
    language: &Language,
    format: HighlightFormat,
) -> Result<String, CliError> {
    let spans = scoped_spans(source, language);
    debug!(language = language.id, spans = spans.len(), ?format, "highlighted");
    match format {
        HighlightFormat::Json => Ok(serde_json::to_string_pretty(&spans)?),
        HighlightFormat::Text => {
            let mut out = String::new();
            for span in &spans {
                let text = &source[span.span.to_range()];
                let _ = writeln!(out, "{:<10} {:<28} {text:?}", span.span.to_string(), span.scope);
            }
            Ok(out.trim_end().to_owned())
        }
    }
}
