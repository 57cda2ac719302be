//! The language definition handed to editor hosts.
//!
//! A host registers a language once and afterwards looks it up by id.
//! [`language`] returns the immutable Leia definition; the
//! [`LanguageRegistry`] keeps the first registration per id so repeated
//! setup calls are harmless.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::classify::{KEYWORDS, OPERATORS};
use crate::rules::RuleTable;
use crate::token::TokenCategory;

/// Everything a host needs to highlight one language.
pub struct Language {
    /// Registry key, e.g. `leia`.
    pub id: &'static str,
    /// Appended to every scope name, e.g. `.leia`.
    pub token_postfix: &'static str,
    /// File extensions, without the dot.
    pub extensions: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub operators: &'static [&'static str],
    pub rules: &'static RuleTable,
}

impl Language {
    /// The theme scope of `category` for this language.
    pub fn scope(&self, category: TokenCategory) -> String {
        format!("{}{}", category.scope(), self.token_postfix)
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("id", &self.id)
            .field("token_postfix", &self.token_postfix)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}

static LEIA: LazyLock<Language> = LazyLock::new(|| Language {
    id: "leia",
    token_postfix: ".leia",
    extensions: &["leia"],
    keywords: KEYWORDS,
    operators: OPERATORS,
    rules: RuleTable::get(),
});

/// The Leia language definition.
pub fn language() -> &'static Language {
    &LEIA
}

/// Outcome of [`LanguageRegistry::register`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    Registered,
    /// The id was taken; the earlier definition stays in place.
    AlreadyRegistered,
}

/// Languages known to a host, keyed by id.
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    languages: FxHashMap<&'static str, &'static Language>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `language` under its id. Idempotent.
    pub fn register(&mut self, language: &'static Language) -> Registration {
        if self.languages.contains_key(language.id) {
            debug!(id = language.id, "language already registered");
            return Registration::AlreadyRegistered;
        }
        self.languages.insert(language.id, language);
        debug!(id = language.id, "registered language");
        Registration::Registered
    }

    pub fn get(&self, id: &str) -> Option<&'static Language> {
        self.languages.get(id).copied()
    }

    /// Find the language claiming a file extension (without the dot).
    pub fn for_extension(&self, extension: &str) -> Option<&'static Language> {
        self.languages
            .values()
            .copied()
            .find(|language| language.extensions.iter().any(|e| *e == extension))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Register Leia with `registry`.
pub fn register(registry: &mut LanguageRegistry) -> Registration {
    registry.register(language())
}

#[cfg(test)]
mod tests;
