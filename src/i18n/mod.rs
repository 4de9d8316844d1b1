//! Supported languages.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their labels
//! - `language`: Type-safe `Language` handle validated against the registry
//!
//! # Example
//!
//! ```
//! use text_translator::i18n::{Language, LanguageRegistry};
//!
//! let spanish = Language::from_code("es").unwrap();
//! assert_eq!(spanish.name(), "Spanish");
//!
//! let languages = LanguageRegistry::get().list_all();
//! assert!(languages.iter().any(|l| l.code == "te"));
//! ```

mod language;
mod registry;

pub use language::{Language, LanguageError};
pub use registry::{LanguageConfig, LanguageRegistry};
