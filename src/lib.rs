//! Text translator library.
//!
//! Translates text through the free MyMemory API and classifies every reply
//! into a [`translation::TranslationOutcome`].

pub mod clipboard;
pub mod config;
pub mod i18n;
pub mod server;
pub mod session;
pub mod translation;
