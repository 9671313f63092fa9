//! Lyric file endpoint.

use actix_files::NamedFile;
use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::error::{AppError, AppResult};
use crate::models::AppState;

/// Get the `.lrc` file for a song.
///
/// GET /lyrics/{filename}
///
/// `filename` is normally the song's `file` field; its song name picks the
/// lyric file, matching how `has_lyrics` is computed.
#[get("/lyrics/{filename:.*}")]
pub async fn get_lyrics(req: HttpRequest, data: web::Data<AppState>) -> AppResult<HttpResponse> {
    let raw = req.match_info().query("filename");

    let lyrics = data
        .library
        .lyrics_file(raw)
        .map_err(AppError::from_lyrics_lookup)?;

    let file = NamedFile::open(&lyrics).map_err(|e| AppError::from_lyrics_lookup(e.into()))?;
    Ok(file.into_response(&req))
}

/// Configure lyrics routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_lyrics);
}
