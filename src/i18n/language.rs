//! Language type: validated language handle.
//!
//! A `Language` can only be built for a code present in the registry, so the
//! rest of the crate never has to re-check codes it receives.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Serialize, Serializer};
use std::fmt;

/// Error returned when a code is not in the language table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'")]
    Unknown(String),
}

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Code as stored in the registry (e.g., "en", "zh-CN")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const SPANISH: Language = Language { code: "es" };

    /// Create a Language from a language code string.
    ///
    /// # Example
    /// ```
    /// use text_translator::i18n::Language;
    ///
    /// let french = Language::from_code("fr").unwrap();
    /// assert_eq!(french.name(), "French");
    /// ```
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| LanguageError::Unknown(code.to_string()))
    }

    /// All supported languages in display order.
    pub fn all() -> impl Iterator<Item = Language> {
        LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|config| Language { code: config.code })
    }

    /// The language code sent upstream.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        // Only registry codes can reach this point, see `from_code` and the constants.
        LanguageRegistry::get()
            .get_by_code(self.code)
            .unwrap_or(&LanguageRegistry::get().list_all()[0])
    }

    /// Human-readable display label (e.g., "Spanish").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl TryFrom<&str> for Language {
    type Error = LanguageError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        Language::from_code(code)
    }
}
