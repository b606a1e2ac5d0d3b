// src/omdb/client.rs
use super::{MetadataProvider, Movie, ProviderError, SearchResult};
use crate::core::api_key::ApiKey;
use crate::core::config::OmdbConfig;
use crate::core::error::AppError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// HTTP client for `https://www.omdbapi.com/`.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    api_key: ApiKey,
    base_url: String,
    http: reqwest::Client,
}

impl OmdbClient {
    pub fn new(config: &OmdbConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, param: &str, value: &str) -> Result<T, ProviderError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.expose()), (param, value)])
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MetadataProvider for OmdbClient {
    async fn search(&self, query: &str) -> Result<SearchResult, ProviderError> {
        let result: SearchResult = self.get("s", query).await?;
        if result.is_negative() {
            return Err(ProviderError::NotFound(
                result.error.unwrap_or_else(|| "no results".into()),
            ));
        }
        Ok(result)
    }

    async fn fetch_by_title(&self, title: &str) -> Result<Movie, ProviderError> {
        let movie: Movie = self.get("t", title).await?;
        if movie.is_negative() {
            return Err(ProviderError::NotFound(
                movie.error.unwrap_or_else(|| "movie not found".into()),
            ));
        }
        Ok(movie)
    }
}
