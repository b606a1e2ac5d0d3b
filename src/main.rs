// src/main.rs
use rush_movie_server::core::config::Config;
use rush_movie_server::Result;

#[actix_web::main]
async fn main() -> Result<()> {
    let config = Config::load().await?;

    init_logger(&config.log_level);
    config.log_startup();

    if let Err(e) = rush_movie_server::run_with_config(config).await {
        log::error!("Server stopped: {}", e);
        return Err(e);
    }

    log::info!("Server shut down");
    Ok(())
}

fn init_logger(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}
