//! HTTP front end: exposes the language table and the translation adapter as JSON.
//!
//! Every translation attempt answers `200 OK`; the outcome in the body carries
//! the classification, so a browser page renders one result channel.

use crate::config::Config;
use crate::i18n::{LanguageConfig, LanguageRegistry};
use crate::translation::{self, TranslationOutcome, TranslationRequest};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TranslateBody {
    pub source: String,
    pub target: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub outcome: TranslationOutcome,
    pub message: String,
}

impl From<TranslationOutcome> for TranslateResponse {
    fn from(outcome: TranslationOutcome) -> Self {
        let message = outcome.message();
        Self { outcome, message }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(languages))
        .route("/api/translate", post(translate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn languages() -> Json<&'static [LanguageConfig]> {
    Json(LanguageRegistry::get().list_all())
}

async fn translate(
    State(state): State<AppState>,
    Json(body): Json<TranslateBody>,
) -> Json<TranslateResponse> {
    let request = match TranslationRequest::from_codes(&body.source, &body.target, body.text) {
        Ok(request) => request,
        Err(e) => {
            info!("Rejected translation request: {}", e);
            return Json(
                TranslationOutcome::InvalidInput {
                    detail: e.to_string(),
                }
                .into(),
            );
        }
    };

    let outcome = translation::translate(&state.client, &state.config, &request).await;
    Json(outcome.into())
}
