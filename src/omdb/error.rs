// src/omdb/error.rs

/// Failure reported by a metadata provider.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Provider answered with `Response: "False"`.
    NotFound(String),
    Transport(String),
    Status(u16),
    Decode(String),
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "not found: {}", msg),
            Self::Transport(msg) => write!(f, "HTTP request failed: {}", msg),
            Self::Status(code) => write!(f, "unexpected status code: {}", code),
            Self::Decode(msg) => write!(f, "cannot decode response: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}
