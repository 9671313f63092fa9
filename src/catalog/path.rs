//! Mapping untrusted URL path segments onto the filesystem.
//!
//! Segments arrive as the router left them: most characters decoded, but
//! `%2F`, `%25` and `%2B` still escaped. A single percent-decode here
//! completes the job, after which every component is checked so the
//! result can never leave its root.

use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

use super::{CatalogError, CatalogResult};

/// Percent-decode a raw segment into UTF-8 text.
pub fn decode(raw: &str) -> CatalogResult<String> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| CatalogError::InvalidPath(raw.to_string()))?;

    if decoded.contains('\0') {
        return Err(CatalogError::InvalidPath(raw.to_string()));
    }

    Ok(decoded.into_owned())
}

/// Turn a raw segment into a relative path made only of normal components.
///
/// Forward slashes become the host separator, `.` components are dropped,
/// and anything that could climb out of a root (`..`, absolute paths,
/// drive prefixes) is rejected.
pub fn relative_path(raw: &str) -> CatalogResult<PathBuf> {
    let decoded = decode(raw)?;
    let native = decoded.replace('/', MAIN_SEPARATOR_STR);

    let mut relative = PathBuf::new();
    for component in Path::new(&native).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                tracing::warn!(segment = %decoded, "Path traversal attempt blocked");
                return Err(CatalogError::InvalidPath(decoded));
            }
        }
    }

    if relative.as_os_str().is_empty() {
        return Err(CatalogError::InvalidPath(decoded));
    }

    Ok(relative)
}

/// Decode a segment that must name exactly one entry, such as an album.
pub fn single_name(raw: &str) -> CatalogResult<String> {
    let relative = relative_path(raw)?;
    let mut components = relative.components();

    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => name
            .to_str()
            .map(str::to_string)
            .ok_or_else(|| CatalogError::InvalidPath(raw.to_string())),
        _ => Err(CatalogError::InvalidPath(raw.to_string())),
    }
}

/// Resolve a raw segment against `root`.
///
/// The joined path is lexically contained in `root`; it must also exist.
pub fn resolve(raw: &str, root: &Path) -> CatalogResult<PathBuf> {
    let full_path = root.join(relative_path(raw)?);

    if !full_path.exists() {
        return Err(CatalogError::NotFound(full_path));
    }

    Ok(full_path)
}
