// =====================================================
// FILE: src/server/routes.rs - ROUTE TABLE
// =====================================================

use crate::server::handlers::{
    change_lang_handler, health_handler, info_handler, movie_handler, search_handler,
    stats_handler,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(info_handler))
        // API
        .route("/api/health", web::get().to(health_handler))
        .route("/api/search", web::get().to(search_handler))
        .route("/api/movie", web::get().to(movie_handler))
        .route("/api/stats", web::get().to(stats_handler))
        // Language
        .route("/change-lang", web::get().to(change_lang_handler));
}
