// tests/server_routes.rs - HTTP surface against an in-memory provider
use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use rush_movie_server::i18n::{LanguageResolver, Translate, TranslationCatalog};
use rush_movie_server::omdb::{Movie, ProviderError, SearchResult, StubProvider};
use rush_movie_server::server::{routes, AppState, LanguageMiddleware};
use rush_movie_server::MovieDirectory;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

fn movie(title: &str, imdb_id: &str) -> Movie {
    Movie {
        title: title.into(),
        year: "1999".into(),
        imdb_id: imdb_id.into(),
        kind: "movie".into(),
        response: "True".into(),
        ..Default::default()
    }
}

fn catalog() -> TranslationCatalog {
    let messages = |pairs: &[(&str, &str)]| -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    };

    let mut languages = HashMap::new();
    languages.insert(
        "es".to_string(),
        messages(&[
            ("app_title", "Buscador de Películas"),
            ("no_results", "No se encontraron películas"),
            ("error_search", "Error al buscar películas"),
            ("error_movie", "Error al obtener la película"),
            ("error_require_id_title", "Se requiere un ID o un título de película"),
            ("from_cache", "Servido desde caché"),
            ("from_api", "Obtenido de la API"),
        ]),
    );
    languages.insert(
        "en".to_string(),
        messages(&[
            ("app_title", "Movie Finder"),
            ("error_search", "Error searching movies"),
            ("from_api", "Fetched from API"),
        ]),
    );
    TranslationCatalog::from_maps(languages, "es")
}

/// Answers every lookup with the key itself.
struct KeyEcho;

impl Translate for KeyEcho {
    fn translate(&self, _lang: &str, key: &str) -> String {
        key.to_string()
    }
}

fn state_with(provider: Arc<StubProvider>, translator: Arc<dyn Translate>) -> web::Data<AppState> {
    let resolver = LanguageResolver::new(vec!["es".into(), "en".into()], "es");
    web::Data::new(AppState::new(
        MovieDirectory::new(provider),
        translator,
        resolver,
    ))
}

fn state(provider: Arc<StubProvider>) -> web::Data<AppState> {
    state_with(provider, Arc::new(catalog()))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .wrap(LanguageMiddleware)
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_info_uses_default_language() {
    let app = app!(state(Arc::new(StubProvider::new())));

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["lang"], "es");
    assert_eq!(body["name"], "Buscador de Películas");
    assert_eq!(body["default_language"], "es");
}

#[actix_web::test]
async fn test_language_precedence() {
    let app = app!(state(Arc::new(StubProvider::new())));

    // Query beats cookie and header, and is taken verbatim.
    let req = test::TestRequest::get()
        .uri("/?lang=fr")
        .cookie(Cookie::new("lang", "en"))
        .insert_header((header::ACCEPT_LANGUAGE, "en-US"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["lang"], "fr");
    // Unknown language falls back to default catalog text.
    assert_eq!(body["name"], "Buscador de Películas");

    // Cookie beats header.
    let req = test::TestRequest::get()
        .uri("/")
        .cookie(Cookie::new("lang", "en"))
        .insert_header((header::ACCEPT_LANGUAGE, "es-ES"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["lang"], "en");
    assert_eq!(body["name"], "Movie Finder");

    // Header primary subtag when supported.
    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((header::ACCEPT_LANGUAGE, "en-US,en;q=0.9"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["lang"], "en");

    // Unsupported header falls through to the default.
    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((header::ACCEPT_LANGUAGE, "de-DE"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["lang"], "es");
}

#[actix_web::test]
async fn test_repeated_lang_param_uses_first() {
    let app = app!(state(Arc::new(StubProvider::new())));

    let req = test::TestRequest::get()
        .uri("/?lang=en&lang=fr")
        .cookie(Cookie::new("lang", "es"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["lang"], "en");
    assert_eq!(body["name"], "Movie Finder");
}

#[actix_web::test]
async fn test_health() {
    let app = app!(state(Arc::new(StubProvider::new())));

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_movie_miss_then_hit() {
    let provider = Arc::new(StubProvider::new().with_movie(movie("The Matrix", "tt0133093")));
    let app = app!(state(provider.clone()));

    let req = test::TestRequest::get()
        .uri("/api/movie?t=The%20Matrix")
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first["from_cache"], false);
    assert_eq!(first["source"], "Obtenido de la API");
    assert_eq!(first["movie"]["Title"], "The Matrix");
    assert_eq!(first["movie"]["imdbID"], "tt0133093");
    assert_eq!(first["cache_misses"], 1);
    assert_eq!(first["cache_hits"], 0);

    let req = test::TestRequest::get()
        .uri("/api/movie?t=The%20Matrix")
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(second["from_cache"], true);
    assert_eq!(second["source"], "Servido desde caché");
    assert_eq!(second["cached_at"], first["cached_at"]);
    assert_eq!(second["cache_hits"], 1);
    assert_eq!(second["cache_misses"], 1);

    assert_eq!(provider.fetch_calls("The Matrix"), 1);

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["entries"], 1);
}

#[actix_web::test]
async fn test_movie_localized_source() {
    let provider = Arc::new(StubProvider::new().with_movie(movie("Heat", "tt0113277")));
    let app = app!(state(provider));

    let req = test::TestRequest::get()
        .uri("/api/movie?t=Heat&lang=en")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["lang"], "en");
    assert_eq!(body["source"], "Fetched from API");
}

#[actix_web::test]
async fn test_movie_id_redirects_to_imdb() {
    let provider = Arc::new(StubProvider::new());
    let app = app!(state(provider.clone()));

    let req = test::TestRequest::get()
        .uri("/api/movie?id=tt0133093&t=Ignored")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "https://www.imdb.com/title/tt0133093"
    );
    assert_eq!(provider.total_fetch_calls(), 0);
}

#[actix_web::test]
async fn test_movie_requires_id_or_title() {
    let app = app!(state(Arc::new(StubProvider::new())));

    let req = test::TestRequest::get().uri("/api/movie").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Se requiere un ID o un título de película");
}

#[actix_web::test]
async fn test_messages_go_through_translator() {
    let app = app!(state_with(Arc::new(StubProvider::new()), Arc::new(KeyEcho)));

    let req = test::TestRequest::get().uri("/api/movie?t=").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "error_require_id_title");
}

#[actix_web::test]
async fn test_movie_not_found() {
    let provider = Arc::new(StubProvider::new());
    let app = app!(state(provider));

    let req = test::TestRequest::get().uri("/api/movie?t=Nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Error al obtener la película: "), "{}", error);
}

#[actix_web::test]
async fn test_movie_upstream_failure() {
    let provider = Arc::new(StubProvider::new().with_movie(movie("Ronin", "tt0122690")));
    provider.fail_next("Ronin", ProviderError::Status(503));
    let app = app!(state(provider));

    let req = test::TestRequest::get().uri("/api/movie?t=Ronin").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    // Nothing cached, so the retry is another miss and succeeds.
    let req = test::TestRequest::get().uri("/api/movie?t=Ronin").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["from_cache"], false);
    assert_eq!(body["cache_misses"], 2);
}

#[actix_web::test]
async fn test_search_lists_results() {
    let result = SearchResult {
        search: vec![movie("The Matrix", "tt0133093"), movie("The Matrix Reloaded", "tt0234215")],
        total_results: "2".into(),
        response: "True".into(),
        error: None,
    };
    let provider = Arc::new(StubProvider::new().with_search("matrix", result));
    let app = app!(state(provider.clone()));

    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri("/api/search?query=matrix")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total_results"], 2);
        assert_eq!(body["movies"][1]["Title"], "The Matrix Reloaded");
    }

    // Searches bypass the title cache.
    assert_eq!(provider.search_calls("matrix"), 2);
    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["total"], 0);
}

#[actix_web::test]
async fn test_search_empty_query() {
    let provider = Arc::new(StubProvider::new());
    let app = app!(state(provider.clone()));

    let req = test::TestRequest::get().uri("/api/search").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["movies"].as_array().unwrap().len(), 0);
    assert_eq!(provider.search_calls(""), 0);
}

#[actix_web::test]
async fn test_search_no_results() {
    let app = app!(state(Arc::new(StubProvider::new())));

    let req = test::TestRequest::get()
        .uri("/api/search?query=zzzz")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["movies"].as_array().unwrap().len(), 0);
    assert_eq!(body["message"], "No se encontraron películas");
}

#[actix_web::test]
async fn test_search_upstream_failure() {
    let provider = Arc::new(StubProvider::new());
    provider.fail_next("matrix", ProviderError::Transport("connection refused".into()));
    let app = app!(state(provider));

    let req = test::TestRequest::get()
        .uri("/api/search?query=matrix")
        .insert_header((header::ACCEPT_LANGUAGE, "en-GB"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Error searching movies: "), "{}", error);
}

#[actix_web::test]
async fn test_change_lang_sets_cookie_and_redirects() {
    let app = app!(state(Arc::new(StubProvider::new())));

    let req = test::TestRequest::get()
        .uri("/change-lang?lang=en")
        .insert_header((header::REFERER, "http://localhost:8080/api/movie?t=Heat"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "http://localhost:8080/api/movie?t=Heat"
    );
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "lang")
        .unwrap();
    assert_eq!(cookie.value(), "en");
    assert_eq!(cookie.path(), Some("/"));
}

#[actix_web::test]
async fn test_change_lang_rejects_unsupported() {
    let app = app!(state(Arc::new(StubProvider::new())));

    let req = test::TestRequest::get()
        .uri("/change-lang?lang=fr")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "lang")
        .unwrap();
    assert_eq!(cookie.value(), "es");
}

#[actix_web::test]
async fn test_change_lang_repeated_param_uses_first() {
    let app = app!(state(Arc::new(StubProvider::new())));

    let req = test::TestRequest::get()
        .uri("/change-lang?lang=en&lang=es")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "lang")
        .unwrap();
    assert_eq!(cookie.value(), "en");
}
