// src/core/config.rs
use crate::core::api_key::ApiKey;
use crate::core::constants::{
    API_KEY_ENV_VAR, CONFIG_ENV_VAR, DEFAULT_LANGUAGE, DEFAULT_LOCALES_DIR, LANG_COOKIE,
    OMDB_BASE_URL,
};
use crate::core::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Serialize, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    general: Option<GeneralConfig>,
    #[serde(default)]
    server: Option<ServerConfigToml>,
    #[serde(default)]
    omdb: Option<OmdbConfigToml>,
    #[serde(default)]
    language: Option<LanguageConfigToml>,
    #[serde(default)]
    cache: Option<CacheConfigToml>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ServerConfigToml {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_workers")]
    workers: usize,
    #[serde(default = "default_shutdown_timeout")]
    shutdown_timeout: u64,
    #[serde(default = "default_static_dir")]
    static_dir: String,
    #[serde(default = "default_enable_cors")]
    enable_cors: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct OmdbConfigToml {
    #[serde(default)]
    api_key: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_request_timeout")]
    request_timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct LanguageConfigToml {
    #[serde(default = "default_language")]
    default: String,
    #[serde(default = "default_supported")]
    supported: Vec<String>,
    #[serde(default = "default_locales_dir")]
    locales_dir: String,
    #[serde(default = "default_cookie_name")]
    cookie_name: String,
    #[serde(default = "default_cookie_max_age_days")]
    cookie_max_age_days: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct CacheConfigToml {
    #[serde(default = "default_coalesce_fetches")]
    coalesce_fetches: bool,
}

// Default Functions
fn default_log_level() -> String {
    "info".into()
}

// Server Defaults
fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    8080
}
fn default_workers() -> usize {
    2
}
fn default_shutdown_timeout() -> u64 {
    5
}
fn default_static_dir() -> String {
    "./static".into()
}
fn default_enable_cors() -> bool {
    true
}

// OMDb Defaults
fn default_base_url() -> String {
    OMDB_BASE_URL.into()
}
fn default_request_timeout() -> u64 {
    10
}

// Language Defaults
fn default_language() -> String {
    DEFAULT_LANGUAGE.into()
}
fn default_supported() -> Vec<String> {
    vec!["es".into(), "en".into()]
}
fn default_locales_dir() -> String {
    DEFAULT_LOCALES_DIR.into()
}
fn default_cookie_name() -> String {
    LANG_COOKIE.into()
}
fn default_cookie_max_age_days() -> i64 {
    365
}

// Cache Defaults
fn default_coalesce_fetches() -> bool {
    true
}

// Main Configuration Structures
#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<String>,
    pub log_level: String,
    pub server: ServerConfig,
    pub omdb: OmdbConfig,
    pub language: LanguageConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub shutdown_timeout: u64,
    pub static_dir: PathBuf,
    pub enable_cors: bool,
}

#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub api_key: ApiKey,
    pub base_url: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub default: String,
    pub supported: Vec<String>,
    pub locales_dir: PathBuf,
    pub cookie_name: String,
    pub cookie_max_age_days: i64,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub coalesce_fetches: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            shutdown_timeout: default_shutdown_timeout(),
            static_dir: PathBuf::from(default_static_dir()),
            enable_cors: default_enable_cors(),
        }
    }
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: ApiKey::empty(),
            base_url: default_base_url(),
            request_timeout: Duration::from_secs(default_request_timeout()),
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default: default_language(),
            supported: default_supported(),
            locales_dir: PathBuf::from(default_locales_dir()),
            cookie_name: default_cookie_name(),
            cookie_max_age_days: default_cookie_max_age_days(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            coalesce_fetches: default_coalesce_fetches(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: default_log_level(),
            server: ServerConfig::default(),
            omdb: OmdbConfig::default(),
            language: LanguageConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl Config {
    /// Resolves the config file (env var, known paths, first-run default) and
    /// applies environment overrides.
    pub async fn load() -> Result<Self> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
            if !explicit.trim().is_empty() {
                return Self::from_file(explicit.trim()).await;
            }
        }

        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => return Ok(config),
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        let path = crate::setup::setup_toml::ensure_config_exists().await?;
        Self::from_file(&path).await
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.as_ref().to_string_lossy().into_owned());
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parses and normalizes a TOML document without touching the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;

        let log_level = file
            .general
            .map(|g| g.log_level)
            .unwrap_or_else(default_log_level);

        let server = file
            .server
            .map_or_else(ServerConfig::default, |s| ServerConfig {
                host: s.host,
                port: s.port,
                workers: Self::clamp(s.workers, 1, 64, default_workers()),
                shutdown_timeout: s.shutdown_timeout,
                static_dir: PathBuf::from(s.static_dir),
                enable_cors: s.enable_cors,
            });

        let omdb = file.omdb.map_or_else(OmdbConfig::default, |o| OmdbConfig {
            api_key: ApiKey::from_toml(&o.api_key),
            base_url: o.base_url,
            request_timeout: Duration::from_secs(Self::clamp(
                o.request_timeout_secs as usize,
                1,
                300,
                default_request_timeout() as usize,
            ) as u64),
        });

        let language = match file.language {
            Some(l) => Self::normalize_language(LanguageConfig {
                default: l.default.trim().to_string(),
                supported: l
                    .supported
                    .into_iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                locales_dir: PathBuf::from(l.locales_dir),
                cookie_name: l.cookie_name,
                cookie_max_age_days: l.cookie_max_age_days.max(0),
            })?,
            None => LanguageConfig::default(),
        };

        let cache = file.cache.map_or_else(CacheConfig::default, |c| CacheConfig {
            coalesce_fetches: c.coalesce_fetches,
        });

        Ok(Self {
            config_path: None,
            log_level,
            server,
            omdb,
            language,
            cache,
        })
    }

    /// `OMDB_API_KEY` wins over the file value.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var(API_KEY_ENV_VAR) {
            let key = ApiKey::from_env(&value);
            if !key.is_empty() {
                self.omdb.api_key = key;
            }
        }
    }

    /// Startup requires a usable provider credential.
    pub fn validate(&self) -> Result<()> {
        if self.omdb.api_key.is_empty() {
            return Err(AppError::Config(format!(
                "OMDb API key not provided. Set [omdb].api_key or the {} environment variable",
                API_KEY_ENV_VAR
            )));
        }
        if self.language.cookie_name.trim().is_empty() {
            return Err(AppError::Validation("language.cookie_name is empty".into()));
        }
        Ok(())
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_startup(&self) {
        log::info!("{} v{}", crate::core::constants::APP_TITLE, crate::core::constants::VERSION);
        if let Some(path) = self.config_path() {
            log::info!("Config file: {}", path);
        }
        log::info!("Listening on {}", self.bind_address());
        log::info!(
            "OMDb API key: {} (from {})",
            self.omdb.api_key.masked(),
            self.omdb.api_key.origin()
        );
        log::info!("Static directory: {}", self.server.static_dir.display());
        log::info!("Locales directory: {}", self.language.locales_dir.display());
        log::info!(
            "Default language: {} (supported: {})",
            self.language.default,
            self.language.supported.join(", ")
        );
    }

    // Helper methods
    fn clamp(value: usize, min: usize, max: usize, default: usize) -> usize {
        if value < min || value > max {
            default
        } else {
            value
        }
    }

    fn normalize_language(mut language: LanguageConfig) -> Result<LanguageConfig> {
        if language.default.is_empty() {
            return Err(AppError::Validation("language.default is empty".into()));
        }
        if !language.supported.contains(&language.default) {
            log::warn!(
                "Default language '{}' missing from supported list, adding it",
                language.default
            );
            language.supported.push(language.default.clone());
        }
        Ok(language)
    }
}
