// tests/i18n_catalog.rs - shipped locale files and fallback rules
use rush_movie_server::i18n::{resolve_language, CatalogError, Translate, TranslationCatalog};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn shipped() -> TranslationCatalog {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("locales");
    TranslationCatalog::load(dir, "es").unwrap()
}

#[test]
fn test_shipped_locales_load() {
    let catalog = shipped();
    assert_eq!(catalog.languages(), vec!["en".to_string(), "es".to_string()]);
    assert_eq!(catalog.translate("es", "app_title"), "Buscador de Películas");
    assert_eq!(catalog.translate("en", "app_title"), "Movie Finder");
}

#[test]
fn test_handler_keys_exist_in_default_language() {
    let catalog = shipped();
    for key in [
        "app_title",
        "no_results",
        "error_search",
        "error_movie",
        "error_require_id_title",
        "from_cache",
        "from_api",
    ] {
        assert_ne!(catalog.translate("es", key), key, "missing '{}'", key);
        assert_ne!(catalog.translate("en", key), key, "missing '{}' in en", key);
    }
}

#[test]
fn test_missing_key_falls_back_to_default() {
    let catalog = shipped();
    // Only the Spanish table carries this key.
    assert_eq!(catalog.translate("en", "change_language"), "Cambiar idioma");
    assert_eq!(catalog.translate("fr", "search"), "Buscar");
    assert_eq!(catalog.translate("en", "does_not_exist"), "does_not_exist");
}

#[test]
fn test_greeting_fallback_chain() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("es")).unwrap();
    fs::write(dir.path().join("es/messages.json"), r#"{"greeting":"Hola"}"#).unwrap();
    fs::create_dir(dir.path().join("en")).unwrap();
    fs::write(dir.path().join("en/messages.json"), "{}").unwrap();

    let catalog = TranslationCatalog::load(dir.path(), "es").unwrap();
    assert_eq!(catalog.translate("en", "greeting"), "Hola");
    assert_eq!(catalog.translate("fr", "greeting"), "Hola");
    assert_eq!(catalog.translate("en", "unknown_key"), "unknown_key");
}

#[test]
fn test_malformed_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("es")).unwrap();
    fs::write(dir.path().join("es/messages.json"), "{\"greeting\": ").unwrap();

    let err = TranslationCatalog::load(dir.path(), "es").unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }), "{:?}", err);
}

#[test]
fn test_missing_root_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = TranslationCatalog::load(dir.path().join("nope"), "es").unwrap_err();
    assert!(matches!(err, CatalogError::ReadDir { .. }), "{:?}", err);
}

#[test]
fn test_resolution_examples() {
    let supported = vec!["es".to_string(), "en".to_string()];

    assert_eq!(resolve_language(Some("en"), Some("es"), None, &supported, "es"), "en");
    assert_eq!(resolve_language(None, Some("en"), Some("es-ES"), &supported, "es"), "en");
    assert_eq!(resolve_language(None, None, Some("en-US,en;q=0.9"), &supported, "es"), "en");
    assert_eq!(resolve_language(None, None, Some("de-DE"), &supported, "es"), "es");
    assert_eq!(resolve_language(Some(""), None, None, &supported, "es"), "es");
    assert_eq!(resolve_language(None, None, None, &supported, "es"), "es");
}
