//! Song listing and lyric lookup.
//!
//! Lyrics live in a flat directory keyed by song name, so two albums with a
//! `track1.mp3` share `track1.lrc`.

use std::path::{Path, PathBuf};

use super::format::LYRICS_EXTENSION;
use super::scanner::{album_dirs, audio_files, Entry};
use super::{path, CatalogError, CatalogResult};
use crate::models::Song;

/// Path of the lyric file for a song name.
pub fn lyrics_path(lyrics_root: &Path, song_name: &str) -> PathBuf {
    lyrics_root.join(format!("{}.{}", song_name, LYRICS_EXTENSION))
}

/// Check whether a lyric file exists for a song name.
pub fn has_lyrics(lyrics_root: &Path, song_name: &str) -> bool {
    lyrics_path(lyrics_root, song_name).is_file()
}

/// File name without its extension.
fn song_name(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename)
}

fn song_record(album: &str, entry: &Entry, lyrics_root: &Path) -> Song {
    let name = song_name(&entry.name);
    Song {
        name: name.to_string(),
        file: format!("{}/{}", album, entry.name),
        album: album.to_string(),
        has_lyrics: has_lyrics(lyrics_root, name),
    }
}

/// Songs of one real album.
///
/// `album` is a decoded, single-component directory name.
pub fn list_songs(album: &str, root: &Path, lyrics_root: &Path) -> CatalogResult<Vec<Song>> {
    let album_dir = root.join(album);
    if !album_dir.is_dir() {
        return Err(CatalogError::AlbumNotFound(album.to_string()));
    }

    let songs = audio_files(&album_dir)?
        .iter()
        .map(|entry| song_record(album, entry, lyrics_root))
        .collect();
    Ok(songs)
}

/// Songs of every album, album by album.
pub fn list_all_songs(root: &Path, lyrics_root: &Path) -> CatalogResult<Vec<Song>> {
    let mut songs = Vec::new();

    for album in album_dirs(root)? {
        match audio_files(&album.path) {
            Ok(files) => songs.extend(
                files
                    .iter()
                    .map(|entry| song_record(&album.name, entry, lyrics_root)),
            ),
            Err(e) => {
                tracing::warn!(album = %album.name, error = %e, "Skipping unreadable album");
            }
        }
    }

    Ok(songs)
}

/// Locate the lyric file for a song addressed by a raw URL segment.
///
/// The segment is usually a song's `file` field (`<album>/<filename>`); only
/// the song name of its last component selects the lyric file.
pub fn find_lyrics(raw: &str, lyrics_root: &Path) -> CatalogResult<PathBuf> {
    let relative = path::relative_path(raw)?;
    let name = relative
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| CatalogError::InvalidPath(raw.to_string()))?;

    let lyrics = lyrics_path(lyrics_root, name);
    if !lyrics.is_file() {
        return Err(CatalogError::NotFound(lyrics));
    }

    Ok(lyrics)
}
