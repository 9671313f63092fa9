//! Album listing API.

use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::error::{AppError, AppResult, BodyFormat, ALBUM_CONTEXT};
use crate::models::AppState;

/// List albums that contain songs, the virtual "all songs" album first.
///
/// GET /api/albums
#[get("/api/albums")]
pub async fn list_albums(data: web::Data<AppState>) -> AppResult<HttpResponse> {
    let albums = data
        .library
        .albums()
        .map_err(|e| AppError::internal(ALBUM_CONTEXT, BodyFormat::Json, e))?;

    Ok(HttpResponse::Ok().json(albums))
}

/// List the songs of one album.
///
/// GET /api/albums/{album_name}
#[get("/api/albums/{album_name}")]
pub async fn list_album_songs(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let raw = req.match_info().query("album_name");

    let songs = data
        .library
        .songs(raw)
        .map_err(AppError::from_album_lookup)?;

    Ok(HttpResponse::Ok().json(songs))
}

/// Configure album routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_albums).service(list_album_songs);
}
