// src/movies/directory.rs
use super::flight::SingleFlight;
use super::types::{CacheStats, CachedMovie, StoredMovie};
use crate::core::prelude::*;
use crate::omdb::{MetadataProvider, SearchResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

/// Title-keyed memo of provider detail lookups with hit/miss accounting.
///
/// Keys are the titles exactly as received (case-sensitive, untrimmed). A key
/// is inserted at most once and never evicted; failed fetches insert nothing.
/// Every call to [`MovieDirectory::lookup_by_title`] that passes input
/// validation counts exactly one hit or one miss.
///
/// With fetch coalescing on, concurrent misses on the same cold title share a
/// single provider call: the first caller fetches, the rest wait and are then
/// served from the cache as hits. If that fetch fails, the next waiter tries
/// again as a fresh miss.
pub struct MovieDirectory {
    provider: Arc<dyn MetadataProvider>,
    entries: RwLock<HashMap<String, Arc<StoredMovie>>>,
    hits: AtomicU64,
    misses: AtomicU64,
    flights: Option<SingleFlight>,
}

impl std::fmt::Debug for MovieDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieDirectory")
            .field("entries", &self.len())
            .field("stats", &self.stats())
            .field("coalesce_fetches", &self.flights.is_some())
            .finish()
    }
}

impl MovieDirectory {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self::with_coalescing(provider, true)
    }

    pub fn with_coalescing(provider: Arc<dyn MetadataProvider>, coalesce_fetches: bool) -> Self {
        Self {
            provider,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            flights: coalesce_fetches.then(SingleFlight::default),
        }
    }

    pub async fn lookup_by_title(&self, title: &str) -> Result<CachedMovie> {
        if title.trim().is_empty() {
            return Err(AppError::EmptyTitle);
        }

        if let Some(hit) = self.cached(title) {
            return Ok(hit);
        }

        let Some(flights) = &self.flights else {
            return self.fetch_and_store(title).await;
        };

        let _permit = flights.enter(title).await;
        // Another caller may have filled the entry while we waited.
        if let Some(hit) = self.cached(title) {
            return Ok(hit);
        }
        self.fetch_and_store(title).await
    }

    /// Uncached passthrough to the provider.
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        if query.trim().is_empty() {
            return Err(AppError::EmptyQuery);
        }

        log::info!("Searching provider for '{}'", query);
        self.provider.search(query).await.map_err(|e| {
            log::warn!("Search for '{}' failed: {}", query, e);
            AppError::RemoteSearch(e)
        })
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::SeqCst),
            misses: self.misses.load(Ordering::SeqCst),
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, title: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(title)
    }

    fn cached(&self, title: &str) -> Option<CachedMovie> {
        let stored = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(title)
            .cloned()?;

        self.hits.fetch_add(1, Ordering::SeqCst);
        log::info!("Cache hit for '{}'", title);
        Some(stored.view(true))
    }

    async fn fetch_and_store(&self, title: &str) -> Result<CachedMovie> {
        log::info!("Cache miss for '{}', fetching from provider", title);

        let fetched = self.provider.fetch_by_title(title).await;
        // Counted only once the call completes; a dropped lookup records nothing.
        self.misses.fetch_add(1, Ordering::SeqCst);
        let movie = fetched.map_err(|e| {
            log::warn!("Fetch for '{}' failed: {}", title, e);
            AppError::RemoteFetch(e)
        })?;

        let fresh = Arc::new(StoredMovie::new(movie));
        // First insert wins so every caller sees the same record.
        let stored = Arc::clone(
            self.entries
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .entry(title.to_string())
                .or_insert(fresh),
        );
        Ok(stored.view(false))
    }
}
