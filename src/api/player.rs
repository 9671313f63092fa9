//! The browser player: its page and static assets.

use actix_files::{Files, NamedFile};
use actix_web::{get, web, HttpRequest, HttpResponse};
use std::path::Path;

use crate::error::{AppError, AppResult, BodyFormat, FILE_CONTEXT};
use crate::models::AppState;

/// Serve the player page.
///
/// GET /
#[get("/")]
pub async fn index(req: HttpRequest, data: web::Data<AppState>) -> AppResult<HttpResponse> {
    if !data.index_page.is_file() {
        tracing::warn!(path = %data.index_page.display(), "Player page is missing");
        return Err(AppError::FileNotFound("index.html".to_string()));
    }

    let page = NamedFile::open(&data.index_page)
        .map_err(|e| AppError::internal(FILE_CONTEXT, BodyFormat::Text, e))?;
    Ok(page.into_response(&req))
}

/// Configure the page route and `/static` assets.
pub fn configure(cfg: &mut web::ServiceConfig, static_folder: &Path) {
    cfg.service(index)
        .service(Files::new("/static", static_folder).use_last_modified(true));
}
