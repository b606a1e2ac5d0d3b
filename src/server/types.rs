// =====================================================
// FILE: src/server/types.rs - APP STATE & REQUEST LANGUAGE
// =====================================================

use crate::core::constants::LANG_PARAM;
use crate::core::prelude::*;
use crate::i18n::{LanguageResolver, LanguageSignals, Translate};
use crate::movies::MovieDirectory;
use actix_web::{http::header, web, HttpRequest};
use chrono::{DateTime, Utc};

/// Per-request language, computed once by the language middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLanguage(pub String);

impl ResolvedLanguage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResolvedLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct LanguageCookie {
    pub name: String,
    pub max_age_days: i64,
}

impl Default for LanguageCookie {
    fn default() -> Self {
        Self {
            name: crate::core::constants::LANG_COOKIE.into(),
            max_age_days: 365,
        }
    }
}

/// Value of the first `key` pair in a raw query string. Repeated keys are
/// ignored after the first.
pub fn first_query_value(query_string: &str, key: &str) -> Option<String> {
    web::Query::<Vec<(String, String)>>::from_query(query_string)
        .ok()?
        .into_inner()
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value)
}

/// Shared state handed to every handler through `web::Data`.
pub struct AppState {
    pub movies: MovieDirectory,
    pub translator: Arc<dyn Translate>,
    pub resolver: LanguageResolver,
    pub cookie: LanguageCookie,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        movies: MovieDirectory,
        translator: Arc<dyn Translate>,
        resolver: LanguageResolver,
    ) -> Self {
        Self {
            movies,
            translator,
            resolver,
            cookie: LanguageCookie::default(),
            started_at: Utc::now(),
        }
    }

    pub fn with_cookie(mut self, cookie: LanguageCookie) -> Self {
        self.cookie = cookie;
        self
    }

    pub fn t(&self, lang: &ResolvedLanguage, key: &str) -> String {
        self.translator.translate(lang.as_str(), key)
    }

    pub fn resolve_request(&self, req: &HttpRequest) -> ResolvedLanguage {
        let query = first_query_value(req.query_string(), LANG_PARAM);
        let cookie = req.cookie(&self.cookie.name);
        let accept_language = req
            .headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());

        ResolvedLanguage(self.resolver.resolve(LanguageSignals {
            query: query.as_deref(),
            cookie: cookie.as_ref().map(|c| c.value()),
            accept_language,
        }))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("movies", &self.movies)
            .field("resolver", &self.resolver)
            .field("cookie", &self.cookie)
            .field("started_at", &self.started_at)
            .finish()
    }
}
