// src/core/api_key.rs - Opaque OMDb credential that never prints in full

use std::fmt;

#[derive(Clone)]
enum ApiKeySource {
    Empty,
    Toml(String),
    EnvVar(String),
}

#[derive(Clone)]
pub struct ApiKey {
    source: ApiKeySource,
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl ApiKey {
    pub fn empty() -> Self {
        Self {
            source: ApiKeySource::Empty,
        }
    }

    /// Value read from the `[omdb]` table of the config file.
    pub fn from_toml(value: &str) -> Self {
        if value.trim().is_empty() {
            return Self::empty();
        }
        Self {
            source: ApiKeySource::Toml(value.trim().to_string()),
        }
    }

    /// Value read from `OMDB_API_KEY`; takes precedence over the file.
    pub fn from_env(value: &str) -> Self {
        if value.trim().is_empty() {
            return Self::empty();
        }
        Self {
            source: ApiKeySource::EnvVar(value.trim().to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.source, ApiKeySource::Empty)
    }

    pub fn origin(&self) -> &'static str {
        match self.source {
            ApiKeySource::Empty => "none",
            ApiKeySource::Toml(_) => "config file",
            ApiKeySource::EnvVar(_) => "environment",
        }
    }

    /// Raw key for the outgoing provider request.
    pub fn expose(&self) -> &str {
        match &self.source {
            ApiKeySource::Empty => "",
            ApiKeySource::Toml(v) | ApiKeySource::EnvVar(v) => v,
        }
    }

    /// Log-safe form: short keys are fully hidden, longer ones keep 4 chars on each end.
    pub fn masked(&self) -> String {
        let key = self.expose();
        if key.chars().count() <= 8 {
            return "*****".to_string();
        }
        let head: String = key.chars().take(4).collect();
        let tail: String = key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("{}...{}", head, tail)
    }
}
