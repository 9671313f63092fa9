//! Melodeon - a minimal personal music streaming server.
//!
//! Serves album folders of local audio files, with optional lyric files and
//! cover images, to a browser-based player.

mod api;
mod catalog;
mod config;
mod error;
mod models;

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Library;
use crate::config::LogFormat;
use crate::models::AppState;

/// Initialize the tracing/logging subsystem.
fn init_tracing(config: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.log_format {
        LogFormat::Json => {
            subscriber
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            subscriber
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}

/// Configure CORS based on application config.
fn configure_cors(config: &config::Config) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "HEAD", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::RANGE])
        .max_age(3600);

    if config.cors_origins.len() == 1 && config.cors_origins[0] == "*" {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.cors_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

/// Graceful shutdown handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = config::load().map_err(|e| {
        eprintln!("error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging
    init_tracing(&config);

    // Create folders and check the music root is readable
    if let Err(e) = config.prepare() {
        tracing::error!(error = %e, "Configuration validation failed");
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }

    let app_state = AppState {
        library: Library::from_config(&config),
        index_page: config.index_page(),
    };

    let bind_address = config.bind_address();

    tracing::info!(
        address = %bind_address,
        music_folder = %config.music_folder().display(),
        lyrics_folder = %config.lyrics_folder().display(),
        "Starting Melodeon server"
    );

    let server_config = config.clone();
    let server = HttpServer::new(move || {
        let static_folder = server_config.static_folder.clone();
        App::new()
            // Middleware (order matters - outermost first)
            .wrap(TracingLogger::default())
            .wrap(configure_cors(&server_config))
            // Shared state
            .app_data(web::Data::new(app_state.clone()))
            .configure(|cfg| api::configure(cfg, &static_folder))
    })
    .bind(&bind_address)?
    .shutdown_timeout(30)
    .run();

    // Run server with graceful shutdown
    tokio::select! {
        result = server => {
            result
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown complete");
            Ok(())
        }
    }
}
