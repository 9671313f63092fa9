//! Health check endpoints.

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::models::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Service name.
    pub service: &'static str,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Service status.
    pub status: &'static str,
    /// Music folder accessible.
    pub music_folder: bool,
    /// Lyrics folder accessible.
    pub lyrics_folder: bool,
    /// Default cover present. Informational only.
    pub default_cover: bool,
}

/// Health check endpoint.
///
/// GET /health
///
/// Returns 200 if the service is running.
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: env!("CARGO_PKG_NAME"),
    })
}

/// Readiness check endpoint.
///
/// GET /ready
///
/// Returns 200 when the music and lyrics folders are directories.
#[get("/ready")]
pub async fn ready(data: web::Data<AppState>) -> HttpResponse {
    let library = &data.library;

    let music_folder_ok = library.music_root().is_dir();
    let lyrics_folder_ok = library.lyrics_root().is_dir();
    let all_ok = music_folder_ok && lyrics_folder_ok;

    let response = ReadyResponse {
        status: if all_ok { "ready" } else { "not_ready" },
        music_folder: music_folder_ok,
        lyrics_folder: lyrics_folder_ok,
        default_cover: library.default_cover().is_file(),
    };

    if all_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(ready);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::fixture;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(configure)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_ready_tracks_folders() {
        let f = fixture();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(f.state()))
                .configure(configure),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        std::fs::remove_dir_all(f.lyrics()).unwrap();
        let resp = test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["lyrics_folder"], false);
    }
}
