//! Application error types and handling.
//!
//! Each endpoint family answers failures in the format its clients expect:
//! file endpoints reply in plain text, the album API replies in JSON.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

use crate::catalog::CatalogError;

/// JSON error body, `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body format of a 500 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Text,
    Json,
}

/// Application error types.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested music or cover file is absent.
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("Lyrics not found")]
    LyricsNotFound,

    #[error("Album not found")]
    AlbumNotFound,

    /// Any other failure, reported with the endpoint's context prefix.
    #[error("{context}: {message}")]
    Internal {
        context: &'static str,
        format: BodyFormat,
        message: String,
    },
}

impl AppError {
    pub fn internal(context: &'static str, format: BodyFormat, err: impl ToString) -> Self {
        Self::Internal {
            context,
            format,
            message: err.to_string(),
        }
    }

    /// Map a catalog failure on a file endpoint.
    ///
    /// Missing files and rejected paths both read as "file does not exist".
    pub fn from_file_lookup(err: CatalogError, raw: &str, context: &'static str) -> Self {
        match err {
            CatalogError::NotFound(_) | CatalogError::InvalidPath(_) => {
                Self::FileNotFound(raw.to_string())
            }
            CatalogError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::FileNotFound(raw.to_string())
            }
            other => Self::internal(context, BodyFormat::Text, other),
        }
    }

    /// Map a catalog failure on the album API.
    pub fn from_album_lookup(err: CatalogError) -> Self {
        match err {
            CatalogError::AlbumNotFound(_)
            | CatalogError::NotFound(_)
            | CatalogError::InvalidPath(_) => Self::AlbumNotFound,
            other => Self::internal(ALBUM_CONTEXT, BodyFormat::Json, other),
        }
    }

    /// Map a catalog failure on the lyrics endpoint.
    pub fn from_lyrics_lookup(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) | CatalogError::InvalidPath(_) => Self::LyricsNotFound,
            other => Self::internal(LYRICS_CONTEXT, BodyFormat::Text, other),
        }
    }
}

pub const FILE_CONTEXT: &str = "处理文件时出错";
pub const COVER_CONTEXT: &str = "处理封面时出错";
pub const LYRICS_CONTEXT: &str = "处理歌词时出错";
pub const ALBUM_CONTEXT: &str = "处理专辑时出错";

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::FileNotFound(_) | Self::LyricsNotFound | Self::AlbumNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status.as_u16(), message = %message, "Request failed");
        } else {
            tracing::debug!(status = %status.as_u16(), message = %message, "Not found");
        }

        let mut response = HttpResponse::build(status);
        match self {
            Self::FileNotFound(_)
            | Self::Internal {
                format: BodyFormat::Text,
                ..
            } => response
                .content_type("text/plain; charset=utf-8")
                .body(message),
            Self::LyricsNotFound
            | Self::AlbumNotFound
            | Self::Internal {
                format: BodyFormat::Json,
                ..
            } => response.json(ErrorResponse::new(message)),
        }
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
