// =====================================================
// FILE: src/server/handlers/api.rs - JSON API HANDLERS
// =====================================================

use crate::core::constants::{IMDB_TITLE_URL, LANG_PARAM, SERVER_NAME, VERSION};
use crate::core::error::AppError;
use crate::server::types::{first_query_value, AppState, ResolvedLanguage};
use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct MovieParams {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub t: String,
}

fn error_status(err: &AppError) -> StatusCode {
    if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.is_empty_input() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::BAD_GATEWAY
    }
}

pub async fn info_handler(
    state: web::Data<AppState>,
    lang: ResolvedLanguage,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "name": state.t(&lang, "app_title"),
        "server": SERVER_NAME,
        "version": VERSION,
        "lang": lang.as_str(),
        "default_language": state.resolver.default_language(),
        "supported_languages": state.resolver.supported(),
        "endpoints": [
            { "path": "/", "method": "GET", "description": "Service information" },
            { "path": "/api/health", "method": "GET", "description": "Health check" },
            { "path": "/api/search?query=", "method": "GET", "description": "Search titles (not cached)" },
            { "path": "/api/movie?t=|id=", "method": "GET", "description": "Title details (cached) or IMDb redirect" },
            { "path": "/api/stats", "method": "GET", "description": "Title cache hits and misses" },
            { "path": "/change-lang?lang=", "method": "GET", "description": "Persist language choice in a cookie" },
            { "path": "/static/*", "method": "GET", "description": "Static files" }
        ]
    })))
}

pub async fn health_handler(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let now = Utc::now();
    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": now.timestamp(),
        "uptime_seconds": (now - state.started_at).num_seconds().max(0),
    })))
}

pub async fn search_handler(
    state: web::Data<AppState>,
    lang: ResolvedLanguage,
    params: web::Query<SearchParams>,
) -> ActixResult<HttpResponse> {
    let query = params.into_inner().query;

    if query.is_empty() {
        return Ok(HttpResponse::Ok().json(json!({
            "lang": lang.as_str(),
            "query": query,
            "movies": [],
            "total_results": 0,
        })));
    }

    match state.movies.search(&query).await {
        Ok(result) => Ok(HttpResponse::Ok().json(json!({
            "lang": lang.as_str(),
            "query": query,
            "total_results": result.search.len(),
            "movies": result.search,
        }))),
        Err(err) if err.is_not_found() => Ok(HttpResponse::Ok().json(json!({
            "lang": lang.as_str(),
            "query": query,
            "movies": [],
            "total_results": 0,
            "message": state.t(&lang, "no_results"),
        }))),
        Err(err) => Ok(HttpResponse::build(error_status(&err)).json(json!({
            "lang": lang.as_str(),
            "query": query,
            "movies": [],
            "error": format!("{}: {}", state.t(&lang, "error_search"), err),
        }))),
    }
}

pub async fn movie_handler(
    state: web::Data<AppState>,
    lang: ResolvedLanguage,
    params: web::Query<MovieParams>,
) -> ActixResult<HttpResponse> {
    let MovieParams { id, t: title } = params.into_inner();

    if !id.is_empty() {
        return Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, format!("{}{}", IMDB_TITLE_URL, id)))
            .finish());
    }

    if title.is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "lang": lang.as_str(),
            "error": state.t(&lang, "error_require_id_title"),
        })));
    }

    match state.movies.lookup_by_title(&title).await {
        Ok(cached) => {
            let stats = state.movies.stats();
            let source_key = if cached.from_cache {
                "from_cache"
            } else {
                "from_api"
            };
            Ok(HttpResponse::Ok().json(json!({
                "lang": lang.as_str(),
                "movie": &*cached.movie,
                "from_cache": cached.from_cache,
                "cached_at": cached.cached_at.to_rfc3339(),
                "source": state.t(&lang, source_key),
                "cache_hits": stats.hits,
                "cache_misses": stats.misses,
            })))
        }
        Err(err) => Ok(HttpResponse::build(error_status(&err)).json(json!({
            "lang": lang.as_str(),
            "error": format!("{}: {}", state.t(&lang, "error_movie"), err),
        }))),
    }
}

pub async fn stats_handler(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let stats = state.movies.stats();
    Ok(HttpResponse::Ok().json(json!({
        "hits": stats.hits,
        "misses": stats.misses,
        "total": stats.total(),
        "hit_rate": stats.hit_rate(),
        "entries": state.movies.len(),
    })))
}

pub async fn change_lang_handler(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let requested = first_query_value(req.query_string(), LANG_PARAM);
    let lang = state.resolver.sanitize(requested.as_deref());

    let cookie = Cookie::build(state.cookie.name.clone(), lang.clone())
        .path("/")
        .max_age(CookieDuration::days(state.cookie.max_age_days))
        .finish();

    let referer = req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or("/")
        .to_string();

    log::debug!("Language set to '{}', redirecting to {}", lang, referer);

    Ok(HttpResponse::SeeOther()
        .cookie(cookie)
        .insert_header((header::LOCATION, referer))
        .finish())
}
