//! One-level directory scanning of the music root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::format::is_audio;
use super::{CatalogResult, ALL_SONGS};
use crate::models::Album;

/// A directory entry whose name is valid UTF-8.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
}

/// Read a directory, sorted by entry name.
///
/// Entries that cannot be read, or whose names are not UTF-8, are skipped.
pub fn read_sorted(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Cannot read directory entry");
                None
            }
        })
        .filter_map(|entry| {
            let path = entry.path();
            match entry.file_name().into_string() {
                Ok(name) => Some(Entry { name, path }),
                Err(raw) => {
                    tracing::warn!(name = ?raw, "Skipping entry with non UTF-8 name");
                    None
                }
            }
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Album directories directly under the music root.
pub fn album_dirs(root: &Path) -> CatalogResult<Vec<Entry>> {
    let albums = read_sorted(root)?
        .into_iter()
        .filter(|entry| entry.path.is_dir())
        .collect();
    Ok(albums)
}

/// Audio files directly inside an album directory.
pub fn audio_files(album_dir: &Path) -> CatalogResult<Vec<Entry>> {
    let files = read_sorted(album_dir)?
        .into_iter()
        .filter(|entry| is_audio(&entry.name) && entry.path.is_file())
        .collect();
    Ok(files)
}

/// Number of audio files directly inside an album directory.
pub fn count_songs(album_dir: &Path) -> CatalogResult<usize> {
    Ok(audio_files(album_dir)?.len())
}

/// List albums under `root`.
///
/// Albums without songs are left out. The virtual "all songs" album comes
/// first and counts every listed song. An unreadable root is an error; an
/// unreadable album is skipped.
pub fn list_albums(root: &Path) -> CatalogResult<Vec<Album>> {
    let mut albums = Vec::new();

    for dir in album_dirs(root)? {
        let song_count = match count_songs(&dir.path) {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(album = %dir.name, error = %e, "Skipping unreadable album");
                continue;
            }
        };

        if song_count > 0 {
            albums.push(Album {
                name: dir.name,
                song_count,
            });
        }
    }

    let total = albums.iter().map(|album| album.song_count).sum();
    albums.insert(
        0,
        Album {
            name: ALL_SONGS.to_string(),
            song_count: total,
        },
    );

    tracing::debug!(albums = albums.len() - 1, songs = total, "Scanned music root");
    Ok(albums)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"data").unwrap();
    }

    #[test]
    fn test_list_albums_example() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("Album1")).unwrap();
        fs::create_dir(root.join("Album2")).unwrap();
        touch(&root.join("Album1").join("song1.mp3"));
        touch(&root.join("Album1").join("cover.jpg"));

        let albums = list_albums(root).unwrap();

        assert_eq!(
            albums,
            vec![
                Album { name: ALL_SONGS.to_string(), song_count: 1 },
                Album { name: "Album1".to_string(), song_count: 1 },
            ]
        );
    }

    #[test]
    fn test_counts_and_total() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        for album in ["B", "A", "C"] {
            fs::create_dir(root.join(album)).unwrap();
        }
        touch(&root.join("A").join("1.mp3"));
        touch(&root.join("A").join("2.FLAC"));
        touch(&root.join("A").join("notes.txt"));
        touch(&root.join("B").join("x.ogg"));
        touch(&root.join("C").join("lyrics.lrc"));
        touch(&root.join("loose.mp3"));

        let albums = list_albums(root).unwrap();
        let names: Vec<&str> = albums.iter().map(|a| a.name.as_str()).collect();

        assert_eq!(names, vec![ALL_SONGS, "A", "B"]);
        assert_eq!(albums[0].song_count, 3);
        assert_eq!(albums[1].song_count, 2);
        assert_eq!(albums[2].song_count, 1);
    }

    #[test]
    fn test_directory_named_like_audio_is_not_a_song() {
        let dir = tempdir().unwrap();
        let album = dir.path().join("Album1");
        fs::create_dir_all(album.join("bonus.mp3")).unwrap();
        touch(&album.join("track.wav"));

        assert_eq!(count_songs(&album).unwrap(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let album = dir.path().join("Album1");
        fs::create_dir(&album).unwrap();
        touch(&album.join("ok.mp3"));

        // Some filesystems refuse non UTF-8 names; nothing to check there.
        if fs::write(album.join(OsStr::from_bytes(b"\xff.mp3")), b"data").is_err() {
            return;
        }

        assert_eq!(count_songs(&album).unwrap(), 1);
        let names: Vec<String> = read_sorted(&album).unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["ok.mp3".to_string()]);
    }

    #[test]
    fn test_suffix_only_name_is_a_song() {
        let dir = tempdir().unwrap();
        let album = dir.path().join("Album1");
        fs::create_dir(&album).unwrap();
        touch(&album.join(".mp3"));
        touch(&album.join("song1.mp3"));

        assert_eq!(count_songs(&album).unwrap(), 2);
    }

    #[test]
    fn test_empty_root() {
        let dir = tempdir().unwrap();
        let albums = list_albums(dir.path()).unwrap();

        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].name, ALL_SONGS);
        assert_eq!(albums[0].song_count, 0);
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = tempdir().unwrap();
        assert!(list_albums(&dir.path().join("missing")).is_err());
    }
}
