use crate::i18n::CatalogError;
use crate::omdb::ProviderError;
use std::io;

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Validation(String),
    Config(String),
    Server(String),
    EmptyTitle,
    EmptyQuery,
    RemoteFetch(ProviderError),
    RemoteSearch(ProviderError),
    Catalog(CatalogError),
}

impl AppError {
    /// Provider reported a negative response for a fetch or search.
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::RemoteFetch(err) | AppError::RemoteSearch(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Caller supplied blank input.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, AppError::EmptyTitle | AppError::EmptyQuery)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::Catalog(err)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "IO Error: {}", err),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Config(msg) => write!(f, "Config Error: {}", msg),
            AppError::Server(msg) => write!(f, "Server Error: {}", msg),
            AppError::EmptyTitle => write!(f, "empty title"),
            AppError::EmptyQuery => write!(f, "empty query"),
            AppError::RemoteFetch(err) => write!(f, "fetch failed: {}", err),
            AppError::RemoteSearch(err) => write!(f, "search failed: {}", err),
            AppError::Catalog(err) => write!(f, "Translation catalog error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::RemoteFetch(err) | AppError::RemoteSearch(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
