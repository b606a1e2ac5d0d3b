// src/movies/types.rs
use crate::omdb::Movie;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Entry as stored in the directory. Never mutated after insertion.
#[derive(Debug)]
pub(crate) struct StoredMovie {
    pub movie: Arc<Movie>,
    pub cached_at: DateTime<Utc>,
}

impl StoredMovie {
    pub fn new(movie: Movie) -> Self {
        Self {
            movie: Arc::new(movie),
            cached_at: Utc::now(),
        }
    }

    pub fn view(&self, from_cache: bool) -> CachedMovie {
        CachedMovie {
            movie: Arc::clone(&self.movie),
            from_cache,
            cached_at: self.cached_at,
        }
    }
}

/// One resolved title lookup.
///
/// `movie` and `cached_at` are shared with every other reader of the same
/// title; `from_cache` belongs to this read only.
#[derive(Debug, Clone)]
pub struct CachedMovie {
    pub movie: Arc<Movie>,
    pub from_cache: bool,
    pub cached_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn hit_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }
}
