//! Album cover lookup.

use std::io;
use std::path::{Path, PathBuf};

use super::format::is_image;
use super::scanner::read_sorted;
use super::CatalogResult;

/// First image inside the album directory, or `default_cover`.
///
/// `album` is a decoded, single-component directory name.
pub fn find_cover(album: &str, root: &Path, default_cover: &Path) -> CatalogResult<PathBuf> {
    let album_dir = root.join(album);
    if !album_dir.is_dir() {
        return Ok(default_cover.to_path_buf());
    }

    Ok(first_image(&album_dir)?.unwrap_or_else(|| default_cover.to_path_buf()))
}

/// First image file in `album_dir`.
///
/// A directory that no longer exists has no image; the album can be removed
/// between the existence check and the listing.
fn first_image(album_dir: &Path) -> CatalogResult<Option<PathBuf>> {
    let entries = match read_sorted(album_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(entries
        .into_iter()
        .find(|entry| is_image(&entry.name) && entry.path.is_file())
        .map(|entry| entry.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_first_image_wins() {
        let dir = tempdir().unwrap();
        let album = dir.path().join("Album1");
        fs::create_dir(&album).unwrap();
        fs::write(album.join("song1.mp3"), b"a").unwrap();
        fs::write(album.join("front.PNG"), b"b").unwrap();
        fs::write(album.join("zback.jpg"), b"c").unwrap();

        let cover = find_cover("Album1", dir.path(), Path::new("default.jpg")).unwrap();
        assert_eq!(cover, album.join("front.PNG"));
    }

    #[test]
    fn test_default_cover() {
        let dir = tempdir().unwrap();
        let default = dir.path().join("default-cover.jpg");
        fs::create_dir(dir.path().join("NoImages")).unwrap();
        fs::write(dir.path().join("NoImages").join("song.mp3"), b"a").unwrap();

        assert_eq!(find_cover("NoImages", dir.path(), &default).unwrap(), default);
        assert_eq!(find_cover("Missing", dir.path(), &default).unwrap(), default);
    }

    #[test]
    fn test_album_removed_before_listing() {
        let dir = tempdir().unwrap();
        let album = dir.path().join("Gone");
        fs::create_dir(&album).unwrap();
        fs::remove_dir(&album).unwrap();

        assert_eq!(first_image(&album).unwrap(), None);
    }
}
