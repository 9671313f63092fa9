//! Album cover endpoint.

use actix_files::NamedFile;
use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::error::{AppError, AppResult, BodyFormat, COVER_CONTEXT};
use crate::models::AppState;

/// Get the cover image of an album.
///
/// GET /album-cover/{album_name}
///
/// Falls back to the default cover when the album is unknown or has no image.
#[get("/album-cover/{album_name}")]
pub async fn album_cover(req: HttpRequest, data: web::Data<AppState>) -> AppResult<HttpResponse> {
    let raw = req.match_info().query("album_name");

    let cover = data
        .library
        .cover(raw)
        .map_err(|e| AppError::internal(COVER_CONTEXT, BodyFormat::Text, e))?;

    if !cover.is_file() {
        tracing::warn!(path = %cover.display(), "Cover file is missing");
        return Err(AppError::FileNotFound(
            cover
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        ));
    }

    let file = NamedFile::open(&cover)
        .map_err(|e| AppError::internal(COVER_CONTEXT, BodyFormat::Text, e))?;
    Ok(file.into_response(&req))
}

/// Configure cover routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(album_cover);
}
