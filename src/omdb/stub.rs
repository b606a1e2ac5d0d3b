// src/omdb/stub.rs
use super::{MetadataProvider, Movie, ProviderError, SearchResult};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// In-memory provider for tests and offline runs.
///
/// Titles resolve to canned records; unknown titles answer `NotFound`.
/// Failures queued with [`StubProvider::fail_next`] are consumed one per call,
/// before the canned record is considered.
#[derive(Debug, Default)]
pub struct StubProvider {
    movies: Mutex<HashMap<String, Movie>>,
    searches: Mutex<HashMap<String, SearchResult>>,
    failures: Mutex<HashMap<String, VecDeque<ProviderError>>>,
    fetch_calls: Mutex<HashMap<String, usize>>,
    search_calls: Mutex<HashMap<String, usize>>,
    latency: Option<Duration>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `movie` under its own title.
    pub fn with_movie(self, movie: Movie) -> Self {
        self.insert_movie(movie);
        self
    }

    pub fn with_search(self, query: &str, result: SearchResult) -> Self {
        lock(&self.searches).insert(query.to_string(), result);
        self
    }

    /// Delay applied to every call, to widen race windows in concurrent tests.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn insert_movie(&self, movie: Movie) {
        lock(&self.movies).insert(movie.title.clone(), movie);
    }

    /// Next call for `key` (title or query) fails with `err`.
    pub fn fail_next(&self, key: &str, err: ProviderError) {
        lock(&self.failures)
            .entry(key.to_string())
            .or_default()
            .push_back(err);
    }

    pub fn fetch_calls(&self, title: &str) -> usize {
        lock(&self.fetch_calls).get(title).copied().unwrap_or(0)
    }

    pub fn total_fetch_calls(&self) -> usize {
        lock(&self.fetch_calls).values().sum()
    }

    pub fn search_calls(&self, query: &str) -> usize {
        lock(&self.search_calls).get(query).copied().unwrap_or(0)
    }

    fn take_failure(&self, key: &str) -> Option<ProviderError> {
        lock(&self.failures).get_mut(key).and_then(VecDeque::pop_front)
    }

    async fn pause(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl MetadataProvider for StubProvider {
    async fn search(&self, query: &str) -> Result<SearchResult, ProviderError> {
        *lock(&self.search_calls).entry(query.to_string()).or_insert(0) += 1;
        self.pause().await;

        if let Some(err) = self.take_failure(query) {
            return Err(err);
        }

        lock(&self.searches)
            .get(query)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound("Movie not found!".into()))
    }

    async fn fetch_by_title(&self, title: &str) -> Result<Movie, ProviderError> {
        *lock(&self.fetch_calls).entry(title.to_string()).or_insert(0) += 1;
        self.pause().await;

        if let Some(err) = self.take_failure(title) {
            return Err(err);
        }

        lock(&self.movies)
            .get(title)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound("Movie not found!".into()))
    }
}
