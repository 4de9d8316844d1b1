use crate::i18n::Language;
use anyhow::{bail, Context, Result};

/// MyMemory endpoint (free, no API key)
pub const DEFAULT_API_URL: &str = "https://api.mymemory.translated.net/get";

#[derive(Debug, Clone)]
pub struct Config {
    // Upstream
    pub api_url: String,

    // Initial language selection
    pub default_source: Language,
    pub default_target: Language,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_url =
            std::env::var("TRANSLATION_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        reqwest::Url::parse(&api_url)
            .with_context(|| format!("TRANSLATION_API_URL is not a valid URL: {}", api_url))?;

        let default_source = language_from_env("DEFAULT_SOURCE_LANGUAGE", Language::ENGLISH)?;
        let default_target = language_from_env("DEFAULT_TARGET_LANGUAGE", Language::SPANISH)?;
        if default_source == default_target {
            bail!(
                "DEFAULT_SOURCE_LANGUAGE and DEFAULT_TARGET_LANGUAGE must differ (both are '{}')",
                default_source
            );
        }

        let port = match std::env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", v))?,
            Err(_) => 8080,
        };

        Ok(Self {
            api_url,
            default_source,
            default_target,
            port,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_source: Language::ENGLISH,
            default_target: Language::SPANISH,
            port: 8080,
        }
    }
}

fn language_from_env(var: &str, default: Language) -> Result<Language> {
    match std::env::var(var) {
        Ok(code) => {
            Language::from_code(code.trim()).with_context(|| format!("{} is invalid", var))
        }
        Err(_) => Ok(default),
    }
}
