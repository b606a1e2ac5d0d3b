// src/omdb/mod.rs - remote metadata capability
pub mod client;
pub mod error;
pub mod stub;
pub mod types;

pub use client::OmdbClient;
pub use error::ProviderError;
pub use stub::StubProvider;
pub use types::{Movie, SearchResult};

use async_trait::async_trait;

/// Remote source of movie metadata. No retry or caching at this level.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResult, ProviderError>;

    async fn fetch_by_title(&self, title: &str) -> Result<Movie, ProviderError>;
}
