use crate::config::Config;
use crate::i18n::{Language, LanguageError};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

const QUOTA_STATUS: i64 = 403;
const SUCCESS_STATUS: i64 = 200;

const EMPTY_INPUT_DETAIL: &str = "Please enter text to translate.";
const MALFORMED_DETAIL: &str = "malformed response";
const GENERIC_UPSTREAM_DETAIL: &str = "Unable to translate text";
const CONNECT_FAILURE_DETAIL: &str = "failed to connect to translation service";

/// One user-initiated translation.
///
/// Built fresh for every action and never mutated afterwards. The text is
/// kept exactly as entered; blank text is rejected by [`translate`], not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source: Language,
    pub target: Language,
    pub text: String,
}

impl TranslationRequest {
    pub fn new(source: Language, target: Language, text: impl Into<String>) -> Self {
        Self {
            source,
            target,
            text: text.into(),
        }
    }

    /// Build a request from raw language codes, validating them against the registry.
    pub fn from_codes(
        source: &str,
        target: &str,
        text: impl Into<String>,
    ) -> Result<Self, LanguageError> {
        Ok(Self::new(
            Language::from_code(source)?,
            Language::from_code(target)?,
            text,
        ))
    }

    /// The `langpair` token, e.g. `"en|es"`.
    pub fn language_pair(&self) -> String {
        format!("{}|{}", self.source.code(), self.target.code())
    }

    pub fn is_same_language(&self) -> bool {
        self.source == self.target
    }
}

/// Result of one translation attempt.
///
/// Every failure mode is a variant, so callers have a single result channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranslationOutcome {
    Success { translated_text: String },
    /// The service echoed the input back instead of translating it.
    NoTranslationAvailable,
    QuotaExceeded,
    UpstreamError { detail: String },
    NetworkFailure { detail: String },
    InvalidInput { detail: String },
}

impl TranslationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TranslationOutcome::Success { .. })
    }

    pub fn translated_text(&self) -> Option<&str> {
        match self {
            TranslationOutcome::Success { translated_text } => Some(translated_text),
            _ => None,
        }
    }

    /// User-facing text for this outcome.
    pub fn message(&self) -> String {
        match self {
            TranslationOutcome::Success { translated_text } => translated_text.clone(),
            TranslationOutcome::NoTranslationAvailable => {
                "No translation available for this language pair. Try a different combination."
                    .to_string()
            }
            TranslationOutcome::QuotaExceeded => {
                "Translation service: daily limit reached. Try again tomorrow.".to_string()
            }
            TranslationOutcome::UpstreamError { detail } => {
                format!("Translation error: {}", detail)
            }
            TranslationOutcome::NetworkFailure { detail } => format!("Network error: {}", detail),
            TranslationOutcome::InvalidInput { detail } => detail.clone(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            TranslationOutcome::Success { .. } => "success",
            TranslationOutcome::NoTranslationAvailable => "no_translation_available",
            TranslationOutcome::QuotaExceeded => "quota_exceeded",
            TranslationOutcome::UpstreamError { .. } => "upstream_error",
            TranslationOutcome::NetworkFailure { .. } => "network_failure",
            TranslationOutcome::InvalidInput { .. } => "invalid_input",
        }
    }
}

/// Build the upstream URL: `<api_url>?q=<encoded text>&langpair=<source>|<target>`
pub fn build_request_url(api_url: &str, request: &TranslationRequest) -> Result<reqwest::Url> {
    reqwest::Url::parse_with_params(
        api_url,
        &[
            ("q", request.text.as_str()),
            ("langpair", request.language_pair().as_str()),
        ],
    )
    .with_context(|| format!("Invalid translation API URL: {}", api_url))
}

/// Translate `request.text` through the upstream service.
///
/// Issues at most one GET and never fails: transport and parsing problems are
/// reported as [`TranslationOutcome`] variants.
pub async fn translate(
    client: &reqwest::Client,
    config: &Config,
    request: &TranslationRequest,
) -> TranslationOutcome {
    if request.text.trim().is_empty() {
        return TranslationOutcome::InvalidInput {
            detail: EMPTY_INPUT_DETAIL.to_string(),
        };
    }

    let pair = request.language_pair();
    if request.is_same_language() {
        debug!("Same-language translation requested ({})", pair);
    }

    let url = match build_request_url(&config.api_url, request) {
        Ok(url) => url,
        Err(e) => {
            warn!("Could not build translation request for {}: {:#}", pair, e);
            return TranslationOutcome::NetworkFailure {
                detail: format!("{:#}", e),
            };
        }
    };

    debug!("Requesting translation {} ({} chars)", pair, request.text.chars().count());

    let body = match fetch_body(client, url).await {
        Ok(body) => body,
        Err(detail) => {
            warn!("Translation request for {} failed: {}", pair, detail);
            return TranslationOutcome::NetworkFailure { detail };
        }
    };

    let outcome = classify_response(&request.text, &body);
    if !outcome.is_success() {
        warn!("Translation {} resolved as {}", pair, outcome.kind());
    }
    outcome
}

/// Send the GET and read the body. The error is the detail for `NetworkFailure`.
async fn fetch_body(client: &reqwest::Client, url: reqwest::Url) -> Result<String, String> {
    let response = client.get(url).send().await.map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!(
            "{} (HTTP {})",
            CONNECT_FAILURE_DETAIL,
            status.as_u16()
        ));
    }

    response.text().await.map_err(|e| e.to_string())
}

/// Classify a 2xx upstream body into an outcome.
///
/// `input_text` is the text that was sent; a case-insensitive echo of it
/// means the service declined to translate.
pub fn classify_response(input_text: &str, body: &str) -> TranslationOutcome {
    let data: Value = match serde_json::from_str(body) {
        Ok(data) => data,
        Err(e) => {
            debug!("Translation response is not JSON: {}", e);
            return malformed();
        }
    };

    let status = match response_status(&data) {
        Some(status) => status,
        None => return malformed(),
    };

    if status == QUOTA_STATUS {
        return TranslationOutcome::QuotaExceeded;
    }

    let translated = data
        .pointer("/responseData/translatedText")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty());

    if let (SUCCESS_STATUS, Some(translated)) = (status, translated) {
        if translated.to_lowercase() == input_text.to_lowercase() {
            return TranslationOutcome::NoTranslationAvailable;
        }
        return TranslationOutcome::Success {
            translated_text: translated.to_string(),
        };
    }

    warn!("Unexpected translation response: {}", data);

    let detail = data
        .get("responseDetails")
        .and_then(Value::as_str)
        .filter(|details| !details.is_empty())
        .unwrap_or(GENERIC_UPSTREAM_DETAIL);

    TranslationOutcome::UpstreamError {
        detail: detail.to_string(),
    }
}

/// `responseStatus` as a number; the service sends either `403` or `"403"`.
fn response_status(data: &Value) -> Option<i64> {
    match data.get("responseStatus")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn malformed() -> TranslationOutcome {
    TranslationOutcome::UpstreamError {
        detail: MALFORMED_DETAIL.to_string(),
    }
}
