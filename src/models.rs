use serde::Serialize;
use std::path::PathBuf;

use crate::catalog::Library;

#[derive(Clone)]
pub struct AppState {
    pub library: Library,
    pub index_page: PathBuf,
}

/// An album entry in `/api/albums`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
    pub name: String,
    pub song_count: usize,
}

/// A song entry in `/api/albums/{album}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
    /// File name without extension.
    pub name: String,
    /// `<album>/<filename>`, always with forward slashes.
    pub file: String,
    pub album: String,
    pub has_lyrics: bool,
}
