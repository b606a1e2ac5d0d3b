pub mod api_key;
pub mod config;
pub mod constants;
pub mod error;
pub mod prelude;
