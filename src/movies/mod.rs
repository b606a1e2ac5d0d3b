// src/movies/mod.rs
pub mod directory;
mod flight;
pub mod types;

pub use directory::MovieDirectory;
pub use types::{CacheStats, CachedMovie};
