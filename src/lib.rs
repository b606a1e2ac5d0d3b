// Module definitions
pub mod core;
pub mod i18n;
pub mod movies;
pub mod omdb;
pub mod server;
pub mod setup;

// Essential re-exports
pub use core::config::Config;
pub use core::error::{AppError, Result};
pub use i18n::{LanguageResolver, Translate, TranslationCatalog};
pub use movies::{CacheStats, CachedMovie, MovieDirectory};
pub use omdb::{MetadataProvider, Movie, OmdbClient, SearchResult};

// Main entry point
pub async fn run() -> Result<()> {
    let config = Config::load().await?;
    run_with_config(config).await
}

pub async fn run_with_config(config: Config) -> Result<()> {
    config.validate()?;
    server::run(config).await
}

pub async fn load_config() -> Result<Config> {
    Config::load().await
}
