// =====================================================
// FILE: src/setup/setup_toml.rs - FIRST-RUN DEFAULTS
// =====================================================

use crate::core::prelude::*;
use std::path::PathBuf;
use tokio::fs;

pub const CONFIG_FILE_NAME: &str = "movies.toml";

const DEFAULT_CONFIG: &str = r#"[general]
log_level = "info"

[server]
host = "127.0.0.1"
port = 8080
workers = 2
shutdown_timeout = 5
static_dir = "./static"
enable_cors = true

[omdb]
# Leave empty and export OMDB_API_KEY instead to keep the key out of this file
api_key = ""
base_url = "https://www.omdbapi.com/"
request_timeout_secs = 10

[language]
default = "es"
supported = ["es", "en"]
locales_dir = "./locales"
cookie_name = "lang"
cookie_max_age_days = 365

[cache]
# One provider call per cold title, even under concurrent requests
coalesce_fetches = true
"#;

pub fn default_config() -> &'static str {
    DEFAULT_CONFIG
}

pub async fn ensure_config_exists() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().map_err(AppError::Io)?;
    let base_dir = exe_path
        .parent()
        .ok_or_else(|| AppError::Validation("Cannot determine executable directory".into()))?;

    let config_dir = base_dir.join(".rss");
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .await
            .map_err(AppError::Io)?;
        log::debug!("Created config directory {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)
            .await
            .map_err(AppError::Io)?;
        log::info!("Created default config at {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(".rss").join(CONFIG_FILE_NAME));
            paths.push(base_dir.join(CONFIG_FILE_NAME));
            paths.push(base_dir.join("config").join(CONFIG_FILE_NAME));
        }
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
    }
    paths
}
