// src/i18n/mod.rs
pub mod catalog;
pub mod error;
pub mod resolver;

pub use catalog::TranslationCatalog;
pub use error::CatalogError;
pub use resolver::{resolve_language, LanguageResolver, LanguageSignals};

/// Message lookup used by the presentation layer. Total: always yields text.
pub trait Translate: Send + Sync {
    fn translate(&self, lang: &str, key: &str) -> String;
}

impl<T: Translate + ?Sized> Translate for std::sync::Arc<T> {
    fn translate(&self, lang: &str, key: &str) -> String {
        (**self).translate(lang, key)
    }
}
