//! Translator session: the state behind one translation screen.
//!
//! Holds the language selection, the input text and a single [`UiState`].
//! Loading, error and result are one tagged value, so a screen can never show
//! an error and a result at the same time.

use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::i18n::{Language, LanguageRegistry};
use crate::translation::{self, TranslationOutcome, TranslationRequest};
use anyhow::Result;
use tracing::{debug, info};

/// What the screen is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Resolved(TranslationOutcome),
}

#[derive(Debug, Clone)]
pub struct TranslatorSession {
    source: Language,
    target: Language,
    text: String,
    state: UiState,
}

impl Default for TranslatorSession {
    fn default() -> Self {
        let (source, target) = LanguageRegistry::get().default_pair();
        // Registry entries are always valid codes
        Self::new(
            Language::from_code(source.code).unwrap_or(Language::ENGLISH),
            Language::from_code(target.code).unwrap_or(Language::SPANISH),
        )
    }
}

impl TranslatorSession {
    pub fn new(source: Language, target: Language) -> Self {
        Self {
            source,
            target,
            text: String::new(),
            state: UiState::Idle,
        }
    }

    /// Session starting from the configured default languages.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_source, config.default_target)
    }

    pub fn source(&self) -> Language {
        self.source
    }

    pub fn target(&self) -> Language {
        self.target
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn set_source(&mut self, language: Language) {
        self.source = language;
    }

    pub fn set_target(&mut self, language: Language) {
        self.target = language;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, UiState::Loading)
    }

    /// Whether the translate action should be enabled.
    pub fn can_translate(&self) -> bool {
        !self.is_loading() && !self.text.trim().is_empty()
    }

    /// Translated text, if the last translation succeeded.
    pub fn result(&self) -> Option<&str> {
        match &self.state {
            UiState::Resolved(outcome) => outcome.translated_text(),
            _ => None,
        }
    }

    /// Enter `Loading` and hand out the request to send.
    ///
    /// Returns `None` while a previous request is still outstanding.
    pub fn begin_translation(&mut self) -> Option<TranslationRequest> {
        if self.is_loading() {
            debug!("Translation already in progress, ignoring request");
            return None;
        }
        self.state = UiState::Loading;
        Some(TranslationRequest::new(
            self.source,
            self.target,
            self.text.clone(),
        ))
    }

    pub fn finish_translation(&mut self, outcome: TranslationOutcome) {
        self.state = UiState::Resolved(outcome);
    }

    /// Run one translation of the current input.
    ///
    /// Returns `None` without calling the service if one is already running.
    pub async fn translate(
        &mut self,
        client: &reqwest::Client,
        config: &Config,
    ) -> Option<&TranslationOutcome> {
        let request = self.begin_translation()?;
        let outcome = translation::translate(client, config, &request).await;
        self.finish_translation(outcome);
        match &self.state {
            UiState::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Swap source and target, moving the current result into the input.
    ///
    /// The result is cleared; with no result the input becomes empty.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
        self.text = self.result().unwrap_or_default().to_string();
        self.state = UiState::Idle;
    }

    /// Clear input and result; the language selection is kept.
    pub fn clear(&mut self) {
        self.text.clear();
        self.state = UiState::Idle;
    }

    /// Copy the translated text to `clipboard`.
    ///
    /// Returns `Ok(false)` when there is no successful result to copy.
    pub fn copy_result(&self, clipboard: &mut dyn ClipboardSink) -> Result<bool> {
        match self.result() {
            Some(result) => {
                clipboard.set_text(result)?;
                info!("Copied {} chars to clipboard", result.chars().count());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    fn success(text: &str) -> TranslationOutcome {
        TranslationOutcome::Success {
            translated_text: text.to_string(),
        }
    }

    fn resolved_session(text: &str, result: &str) -> TranslatorSession {
        let mut session = TranslatorSession::new(Language::ENGLISH, Language::SPANISH);
        session.set_text(text);
        session.begin_translation().expect("Should start");
        session.finish_translation(success(result));
        session
    }

    // ==================== Defaults ====================

    #[test]
    fn test_default_languages_are_distinct() {
        let session = TranslatorSession::default();

        assert_eq!(session.source(), Language::ENGLISH);
        assert_eq!(session.target(), Language::SPANISH);
        assert_eq!(session.state(), &UiState::Idle);
        assert_eq!(session.text(), "");
    }

    #[test]
    fn test_from_config_uses_configured_languages() {
        let config = Config {
            default_source: Language::from_code("fr").unwrap(),
            default_target: Language::from_code("de").unwrap(),
            ..Config::default()
        };
        let session = TranslatorSession::from_config(&config);

        assert_eq!(session.source().code(), "fr");
        assert_eq!(session.target().code(), "de");
    }

    // ==================== Busy Gating ====================

    #[test]
    fn test_can_translate_requires_text() {
        let mut session = TranslatorSession::default();
        assert!(!session.can_translate());

        session.set_text("   ");
        assert!(!session.can_translate());

        session.set_text("hello");
        assert!(session.can_translate());
    }

    #[test]
    fn test_begin_translation_blocks_second_request() {
        let mut session = TranslatorSession::default();
        session.set_text("hello");

        let request = session.begin_translation().expect("First should start");
        assert_eq!(request.text, "hello");
        assert_eq!(request.language_pair(), "en|es");
        assert!(session.is_loading());
        assert!(!session.can_translate());

        assert!(session.begin_translation().is_none());
    }

    #[test]
    fn test_finish_translation_resolves() {
        let session = resolved_session("hello", "hola");

        assert!(!session.is_loading());
        assert_eq!(session.result(), Some("hola"));
        assert!(session.can_translate());
    }

    #[test]
    fn test_error_outcome_has_no_result() {
        let mut session = TranslatorSession::default();
        session.set_text("hello");
        session.begin_translation();
        session.finish_translation(TranslationOutcome::QuotaExceeded);

        assert_eq!(
            session.state(),
            &UiState::Resolved(TranslationOutcome::QuotaExceeded)
        );
        assert_eq!(session.result(), None);
    }

    #[test]
    fn test_char_count_counts_characters() {
        let mut session = TranslatorSession::default();
        session.set_text("héllo 世界");
        assert_eq!(session.char_count(), 8);
    }

    // ==================== Swap / Clear ====================

    #[test]
    fn test_swap_exchanges_languages_and_text() {
        let mut session = resolved_session("hello", "hola");

        session.swap();

        assert_eq!(session.source(), Language::SPANISH);
        assert_eq!(session.target(), Language::ENGLISH);
        assert_eq!(session.text(), "hola");
        assert_eq!(session.result(), None);
        assert_eq!(session.state(), &UiState::Idle);
    }

    #[test]
    fn test_swap_without_result_empties_input() {
        let mut session = TranslatorSession::default();
        session.set_text("hello");

        session.swap();

        assert_eq!(session.source(), Language::SPANISH);
        assert_eq!(session.text(), "");
    }

    #[test]
    fn test_swap_after_error_empties_input() {
        let mut session = TranslatorSession::default();
        session.set_text("Xyzzy123");
        session.begin_translation();
        session.finish_translation(TranslationOutcome::NoTranslationAvailable);

        session.swap();

        assert_eq!(session.text(), "");
        assert_eq!(session.state(), &UiState::Idle);
    }

    #[test]
    fn test_clear_keeps_languages() {
        let mut session = resolved_session("hello", "hola");
        session.set_target(Language::from_code("it").unwrap());

        session.clear();

        assert_eq!(session.text(), "");
        assert_eq!(session.state(), &UiState::Idle);
        assert_eq!(session.source(), Language::ENGLISH);
        assert_eq!(session.target().code(), "it");
    }

    // ==================== Clipboard ====================

    #[test]
    fn test_copy_result_writes_translation() {
        let session = resolved_session("hello", "hola");
        let mut clipboard = MemoryClipboard::default();

        let copied = session.copy_result(&mut clipboard).unwrap();

        assert!(copied);
        assert_eq!(clipboard.contents(), Some("hola"));
    }

    #[test]
    fn test_copy_result_without_translation() {
        let session = TranslatorSession::default();
        let mut clipboard = MemoryClipboard::default();

        let copied = session.copy_result(&mut clipboard).unwrap();

        assert!(!copied);
        assert_eq!(clipboard.contents(), None);
    }

    // ==================== End to End ====================

    #[tokio::test]
    async fn test_translate_resolves_session() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "responseStatus": 200,
                "responseData": { "translatedText": "Hola" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config {
            api_url: format!("{}/get", mock_server.uri()),
            ..Config::default()
        };
        let client = reqwest::Client::new();
        let mut session = TranslatorSession::from_config(&config);
        session.set_text("Hello");

        let outcome = session.translate(&client, &config).await.cloned();

        assert_eq!(outcome, Some(success("Hola")));
        assert_eq!(session.result(), Some("Hola"));
    }

    #[tokio::test]
    async fn test_translate_blank_input_resolves_invalid() {
        let config = Config {
            api_url: "http://127.0.0.1:1/get".to_string(),
            ..Config::default()
        };
        let client = reqwest::Client::new();
        let mut session = TranslatorSession::default();

        let outcome = session.translate(&client, &config).await.cloned();

        assert!(matches!(
            outcome,
            Some(TranslationOutcome::InvalidInput { .. })
        ));
    }
}
