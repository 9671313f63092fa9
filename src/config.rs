//! Application configuration management.
//!
//! Loads configuration from environment variables with sensible defaults.
//! The resulting `Config` is built once in `main` and passed down; there is
//! no global instance.

use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Folder holding `music/`, `lyrics/` and `default-cover.jpg`.
    pub static_folder: PathBuf,
    /// Folder holding the player page `index.html`.
    pub template_folder: PathBuf,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json or pretty).
    pub log_format: LogFormat,
    /// Allowed CORS origins (comma-separated, or * for all).
    pub cors_origins: Vec<String>,
}

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable colored output.
    Pretty,
    /// JSON structured logging for production.
    Json,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_var = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
        let port = port_var
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_var))?;

        let static_folder = PathBuf::from(
            std::env::var("STATIC_FOLDER").unwrap_or_else(|_| "./static".to_string()),
        );

        let template_folder = PathBuf::from(
            std::env::var("TEMPLATE_FOLDER").unwrap_or_else(|_| "./templates".to_string()),
        );

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            static_folder,
            template_folder,
            log_level,
            log_format,
            cors_origins,
        })
    }

    /// Album directories live here.
    pub fn music_folder(&self) -> PathBuf {
        self.static_folder.join("music")
    }

    /// Flat directory of `<song>.lrc` files.
    pub fn lyrics_folder(&self) -> PathBuf {
        self.static_folder.join("lyrics")
    }

    pub fn default_cover(&self) -> PathBuf {
        self.static_folder.join("default-cover.jpg")
    }

    pub fn index_page(&self) -> PathBuf {
        self.template_folder.join("index.html")
    }

    /// Create the music and lyrics folders if needed and check the music
    /// folder can be listed.
    ///
    /// # Errors
    /// Returns an error if a folder cannot be created or read.
    pub fn prepare(&self) -> Result<(), ConfigError> {
        let music_folder = self.music_folder();

        for folder in [&music_folder, &self.lyrics_folder()] {
            ensure_dir(folder)?;
        }

        std::fs::read_dir(&music_folder).map_err(|e| {
            ConfigError::MusicFolderUnreadable(music_folder.display().to_string(), e)
        })?;

        if !self.default_cover().is_file() {
            tracing::warn!(
                path = %self.default_cover().display(),
                "Default cover is missing; albums without images will have no cover"
            );
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn ensure_dir(folder: &Path) -> Result<(), ConfigError> {
    if folder.exists() {
        if !folder.is_dir() {
            return Err(ConfigError::NotDirectory(folder.display().to_string()));
        }
        return Ok(());
    }

    std::fs::create_dir_all(folder)
        .map_err(|e| ConfigError::DirectoryCreationFailed(folder.display().to_string(), e))?;
    tracing::info!(path = %folder.display(), "Created missing folder");
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid u16, got '{0}'")]
    InvalidPort(String),

    #[error("Not a directory: {0}")]
    NotDirectory(String),

    #[error("Failed to create directory '{0}': {1}")]
    DirectoryCreationFailed(String, std::io::Error),

    #[error("Music folder '{0}' is not readable: {1}")]
    MusicFolderUnreadable(String, std::io::Error),
}

/// Load `.env` if present, then read the environment.
pub fn load() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    Config::from_env()
}
