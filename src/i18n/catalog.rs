// src/i18n/catalog.rs
use super::error::CatalogError;
use super::Translate;
use crate::core::constants::MESSAGES_FILE;
use std::collections::HashMap;
use std::path::Path;

type Messages = HashMap<String, String>;

/// Per-language message tables, built once at startup and read-only afterwards.
///
/// Each subdirectory of the locales root is a language code holding an optional
/// `messages.json` with a flat `key -> text` object. Share it behind an `Arc`
/// once constructed; no locking is needed for reads.
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    languages: HashMap<String, Messages>,
    default_language: String,
}

impl TranslationCatalog {
    pub fn load<P: AsRef<Path>>(locales_dir: P, default_language: &str) -> Result<Self, CatalogError> {
        let root = locales_dir.as_ref();
        let entries = std::fs::read_dir(root).map_err(|e| CatalogError::ReadDir {
            path: root.display().to_string(),
            message: e.to_string(),
        })?;

        let mut languages = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::ReadDir {
                path: root.display().to_string(),
                message: e.to_string(),
            })?;
            if !entry.path().is_dir() {
                continue;
            }

            let lang = entry.file_name().to_string_lossy().into_owned();
            let messages = Self::load_messages(&entry.path().join(MESSAGES_FILE))?;
            log::debug!("Loaded {} messages for '{}'", messages.len(), lang);
            languages.insert(lang, messages);
        }

        let catalog = Self::from_maps(languages, default_language);
        log::info!(
            "Translation catalog ready: [{}] (default '{}')",
            catalog.languages().join(", "),
            catalog.default_language
        );
        if !catalog.has_language(default_language) {
            log::warn!(
                "Default language '{}' has no locale directory in {}",
                default_language,
                root.display()
            );
        }
        Ok(catalog)
    }

    pub fn from_maps(languages: HashMap<String, Messages>, default_language: &str) -> Self {
        Self {
            languages,
            default_language: default_language.to_string(),
        }
    }

    fn load_messages(path: &Path) -> Result<Messages, CatalogError> {
        if !path.is_file() {
            log::debug!("No {} at {}, language has no keys", MESSAGES_FILE, path.display());
            return Ok(Messages::new());
        }

        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Loaded language codes, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.languages.keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.languages.contains_key(lang)
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&str> {
        self.languages
            .get(lang)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }
}

impl Translate for TranslationCatalog {
    fn translate(&self, lang: &str, key: &str) -> String {
        self.lookup(lang, key)
            .or_else(|| self.lookup(&self.default_language, key))
            .unwrap_or(key)
            .to_string()
    }
}
