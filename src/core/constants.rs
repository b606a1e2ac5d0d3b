pub const APP_TITLE: &str = "RUSH MOVIE SERVER";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVER_NAME: &str = env!("CARGO_PKG_NAME");

pub const CONFIG_ENV_VAR: &str = "RUSH_MOVIES_CONFIG";
pub const API_KEY_ENV_VAR: &str = "OMDB_API_KEY";

pub const DEFAULT_LANGUAGE: &str = "es";
pub const DEFAULT_LOCALES_DIR: &str = "./locales";
pub const MESSAGES_FILE: &str = "messages.json";
pub const LANG_PARAM: &str = "lang";
pub const LANG_COOKIE: &str = "lang";

pub const OMDB_BASE_URL: &str = "https://www.omdbapi.com/";
pub const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";
