//! Song file streaming.

use actix_files::NamedFile;
use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::catalog::{path, CatalogError};
use crate::error::{AppError, AppResult, FILE_CONTEXT};
use crate::models::AppState;

/// Stream a song file.
///
/// GET /music/{path}
///
/// `path` is a song's `file` field, with the slash literal or encoded as
/// `%2F`. Supports range requests for seeking.
#[get("/music/{path:.*}")]
pub async fn stream_music(req: HttpRequest, data: web::Data<AppState>) -> AppResult<HttpResponse> {
    let raw = req.match_info().query("path");
    let shown = path::decode(raw).unwrap_or_else(|_| raw.to_string());
    let not_found = |e: CatalogError| AppError::from_file_lookup(e, &shown, FILE_CONTEXT);

    let full_path = data.library.song_file(raw).map_err(not_found)?;
    if !full_path.is_file() {
        return Err(AppError::FileNotFound(shown.clone()));
    }

    // The file may vanish between the check above and the open.
    let file = NamedFile::open(&full_path).map_err(|e| not_found(e.into()))?;
    tracing::debug!(file = %shown, "Streaming song");
    Ok(file.into_response(&req))
}

/// Configure music routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(stream_music);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{fixture, SONG1};
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_stream_encoded_slash() {
        let f = fixture();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(f.state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/music/Album1%2Fsong1.mp3")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await.as_ref(), SONG1);
    }

    #[actix_web::test]
    async fn test_stream_literal_slash_and_unicode() {
        let f = fixture();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(f.state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/music/%E4%B8%93%E8%BE%91/%E6%AD%8C.flac")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await.as_ref(), b"flac");
    }

    #[actix_web::test]
    async fn test_missing_file() {
        let f = fixture();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(f.state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/music/Album1%2Fnope.mp3")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = test::read_body(resp).await;
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            "文件不存在: Album1/nope.mp3"
        );
    }

    #[actix_web::test]
    async fn test_traversal_and_directories_are_not_found() {
        let f = fixture();
        std::fs::write(f.static_folder().join("secret.txt"), b"secret").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(f.state()))
                .configure(configure),
        )
        .await;

        for uri in ["/music/..%2Fsecret.txt", "/music/Album1"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }
}
