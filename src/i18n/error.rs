// src/i18n/error.rs

/// Startup-only failures while building the translation catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    ReadDir { path: String, message: String },
    ReadFile { path: String, message: String },
    Parse { path: String, message: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadDir { path, message } => {
                write!(f, "cannot read locales directory {}: {}", path, message)
            }
            Self::ReadFile { path, message } => write!(f, "cannot read {}: {}", path, message),
            Self::Parse { path, message } => write!(f, "malformed {}: {}", path, message),
        }
    }
}

impl std::error::Error for CatalogError {}
