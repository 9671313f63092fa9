//! HTTP endpoints.

pub mod albums;
pub mod cover;
pub mod health;
pub mod lyrics;
pub mod music;
pub mod player;

use actix_web::web;

/// Configure every route. Static assets are registered last so API routes win.
pub fn configure(cfg: &mut web::ServiceConfig, static_folder: &std::path::Path) {
    cfg.configure(health::configure)
        .configure(albums::configure)
        .configure(music::configure)
        .configure(cover::configure)
        .configure(lyrics::configure)
        .configure(|cfg| player::configure(cfg, static_folder));
}
