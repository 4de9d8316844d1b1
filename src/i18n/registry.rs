//! Language registry: Single source of truth for all supported languages.
//!
//! The table is a `static` slice built at compile time. It is never rebuilt
//! or mutated, so every caller (server handlers, sessions, the adapter) sees
//! the same ordered list.

use serde::Serialize;

/// Configuration for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    /// Code understood by the upstream service (e.g., "en", "zh-CN")
    pub code: &'static str,

    /// English display label (e.g., "Spanish", "Chinese (Simplified)")
    pub name: &'static str,

    /// Name of the language in the language itself (e.g., "Español")
    pub native_name: &'static str,
}

/// Global language registry.
///
/// Languages are kept in display order. The first two entries form the
/// default source/target pair.
pub struct LanguageRegistry {
    languages: &'static [LanguageConfig],
}

static REGISTRY: LanguageRegistry = LanguageRegistry {
    languages: &[
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
        },
        LanguageConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
        },
        LanguageConfig {
            code: "zh-CN",
            name: "Chinese (Simplified)",
            native_name: "简体中文",
        },
        LanguageConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
        },
        LanguageConfig {
            code: "te",
            name: "Telugu",
            native_name: "తెలుగు",
        },
    ],
};

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        &REGISTRY
    }

    /// Get a language configuration by its code.
    ///
    /// Codes are matched exactly; `"zh-cn"` is not `"zh-CN"`.
    pub fn get_by_code(&self, code: &str) -> Option<&'static LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages in display order.
    pub fn list_all(&self) -> &'static [LanguageConfig] {
        self.languages
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// The default (source, target) selection shown before the user picks.
    pub fn default_pair(&self) -> (&'static LanguageConfig, &'static LanguageConfig) {
        (&self.languages[0], &self.languages[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("English should be registered");

        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert_eq!(config.native_name, "English");
    }

    #[test]
    fn test_get_by_code_locale_qualified() {
        let config = LanguageRegistry::get()
            .get_by_code("zh-CN")
            .expect("Simplified Chinese should be registered");

        assert_eq!(config.name, "Chinese (Simplified)");
    }

    #[test]
    fn test_get_by_code_is_case_sensitive() {
        assert!(LanguageRegistry::get().get_by_code("zh-cn").is_none());
        assert!(LanguageRegistry::get().get_by_code("EN").is_none());
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("xx").is_none());
        assert!(LanguageRegistry::get().get_by_code("").is_none());
    }

    #[test]
    fn test_list_all_order_and_size() {
        let all = LanguageRegistry::get().list_all();

        assert_eq!(all.len(), 13);
        assert_eq!(all.first().map(|l| l.code), Some("en"));
        assert_eq!(all.last().map(|l| l.code), Some("te"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let all = LanguageRegistry::get().list_all();
        let codes: HashSet<_> = all.iter().map(|l| l.code).collect();

        assert_eq!(codes.len(), all.len(), "Duplicate language code in registry");
    }

    #[test]
    fn test_every_language_has_labels() {
        for lang in LanguageRegistry::get().list_all() {
            assert!(!lang.name.trim().is_empty(), "{} has no label", lang.code);
            assert!(
                !lang.native_name.trim().is_empty(),
                "{} has no native name",
                lang.code
            );
        }
    }

    #[test]
    fn test_default_pair_is_distinct() {
        let (source, target) = LanguageRegistry::get().default_pair();

        assert_eq!(source.code, "en");
        assert_eq!(target.code, "es");
        assert_ne!(source.code, target.code);
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("te"));
        assert!(!registry.is_supported("klingon"));
    }

    #[test]
    fn test_language_config_serializes_fields() {
        let config = LanguageRegistry::get().get_by_code("de").unwrap();
        let json = serde_json::to_value(config).expect("Should serialize");

        assert_eq!(json["code"], "de");
        assert_eq!(json["name"], "German");
        assert_eq!(json["native_name"], "Deutsch");
    }
}
