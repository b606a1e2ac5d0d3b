// =====================================================
// FILE: src/server/mod.rs - ACTIX-WEB SERVER MODULE
// =====================================================

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use middleware::LanguageMiddleware;
pub use types::{AppState, LanguageCookie, ResolvedLanguage};

use crate::core::prelude::*;
use crate::i18n::{LanguageResolver, Translate, TranslationCatalog};
use crate::movies::MovieDirectory;
use crate::omdb::{MetadataProvider, OmdbClient};
use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::{Condition, Logger};
use actix_web::{web, App, HttpServer};

/// Wires provider, catalog and resolver from the loaded configuration.
pub fn build_state(config: &Config) -> Result<AppState> {
    let client = OmdbClient::new(&config.omdb)?;
    log::info!("Metadata provider: {}", client.base_url());
    let provider: Arc<dyn MetadataProvider> = Arc::new(client);
    let catalog =
        TranslationCatalog::load(&config.language.locales_dir, &config.language.default)?;
    let translator: Arc<dyn Translate> = Arc::new(catalog);
    Ok(state_with(config, provider, translator))
}

pub fn state_with(
    config: &Config,
    provider: Arc<dyn MetadataProvider>,
    translator: Arc<dyn Translate>,
) -> AppState {
    let movies = MovieDirectory::with_coalescing(provider, config.cache.coalesce_fetches);
    let resolver = LanguageResolver::new(
        config.language.supported.clone(),
        config.language.default.clone(),
    );

    AppState::new(movies, translator, resolver).with_cookie(LanguageCookie {
        name: config.language.cookie_name.clone(),
        max_age_days: config.language.cookie_max_age_days,
    })
}

pub async fn run(config: Config) -> Result<()> {
    let state = web::Data::new(build_state(&config)?);

    let static_dir = config.server.static_dir.clone();
    let serve_static = static_dir.is_dir();
    if !serve_static {
        log::warn!(
            "Static directory {} not found, /static disabled",
            static_dir.display()
        );
    }
    let enable_cors = config.server.enable_cors;

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .wrap(LanguageMiddleware)
            .wrap(Condition::new(enable_cors, Cors::permissive()))
            .wrap(Logger::default())
            .configure(routes::configure);

        if serve_static {
            app.service(Files::new("/static", static_dir.clone()))
        } else {
            app
        }
    })
    .workers(config.server.workers)
    .shutdown_timeout(config.server.shutdown_timeout)
    .bind((config.server.host.as_str(), config.server.port))
    .map_err(|e| AppError::Server(format!("bind {} failed: {}", config.bind_address(), e)))?;

    log::info!("Server ready on http://{}", config.bind_address());
    server.run().await.map_err(AppError::Io)
}
