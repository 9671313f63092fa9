//! Filesystem-backed music catalog.
//!
//! Albums are the immediate subdirectories of the music root; songs are the
//! audio files directly inside them. Nothing is cached: every call reads the
//! directories again.

pub mod cover;
pub mod format;
pub mod path;
pub mod scanner;
pub mod songs;

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::models::{Album, Song};

/// Name of the virtual album that aggregates every song.
pub const ALL_SONGS: &str = "全部歌曲";

/// Catalog errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Album not found: {0}")]
    AlbumNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The three locations the catalog reads from.
#[derive(Debug, Clone)]
pub struct Library {
    music_root: PathBuf,
    lyrics_root: PathBuf,
    default_cover: PathBuf,
}

impl Library {
    pub fn new(
        music_root: impl Into<PathBuf>,
        lyrics_root: impl Into<PathBuf>,
        default_cover: impl Into<PathBuf>,
    ) -> Self {
        Self {
            music_root: music_root.into(),
            lyrics_root: lyrics_root.into(),
            default_cover: default_cover.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.music_folder(),
            config.lyrics_folder(),
            config.default_cover(),
        )
    }

    pub fn music_root(&self) -> &Path {
        &self.music_root
    }

    pub fn lyrics_root(&self) -> &Path {
        &self.lyrics_root
    }

    pub fn default_cover(&self) -> &Path {
        &self.default_cover
    }

    /// All albums with at least one song, led by the virtual "all songs" album.
    pub fn albums(&self) -> CatalogResult<Vec<Album>> {
        scanner::list_albums(&self.music_root)
    }

    /// Songs of the album named by a raw URL segment.
    pub fn songs(&self, raw_album: &str) -> CatalogResult<Vec<Song>> {
        let album = path::single_name(raw_album)
            .map_err(|_| CatalogError::AlbumNotFound(raw_album.to_string()))?;

        if album == ALL_SONGS {
            songs::list_all_songs(&self.music_root, &self.lyrics_root)
        } else {
            songs::list_songs(&album, &self.music_root, &self.lyrics_root)
        }
    }

    /// Location of a song file addressed as `<album>/<filename>`.
    pub fn song_file(&self, raw_path: &str) -> CatalogResult<PathBuf> {
        path::resolve(raw_path, &self.music_root)
    }

    /// Cover image for an album, or the default cover.
    pub fn cover(&self, raw_album: &str) -> CatalogResult<PathBuf> {
        match path::single_name(raw_album) {
            Ok(album) => cover::find_cover(&album, &self.music_root, &self.default_cover),
            Err(_) => Ok(self.default_cover.clone()),
        }
    }

    /// Lyric file for the song addressed by a raw URL segment.
    pub fn lyrics_file(&self, raw_song: &str) -> CatalogResult<PathBuf> {
        songs::find_lyrics(raw_song, &self.lyrics_root)
    }
}
