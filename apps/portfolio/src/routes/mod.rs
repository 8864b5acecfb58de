pub mod api;
pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::CV_PATH;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page and browser actions
        .route("/", get(page::handle_page))
        .route(CV_PATH, get(page::handle_download_cv))
        .route("/contact", get(page::handle_contact))
        .route("/assets/:name", get(page::handle_asset))
        // JSON API
        .route("/api/v1/content", get(api::handle_get_content))
        .route("/api/v1/sections", get(api::handle_list_sections))
        .route("/api/v1/scroll/active", post(api::handle_active_section))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::assets::AssetStore;
    use crate::content::portfolio;
    use crate::render::render_page;

    fn test_state(assets_dir: &std::path::Path) -> AppState {
        let portfolio = portfolio();
        let page_html: Arc<str> = render_page(&portfolio, 2026).into();
        AppState {
            portfolio: Arc::new(portfolio),
            page_html,
            assets: AssetStore::new(assets_dir),
        }
    }

    async fn get_uri(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> Response {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.oneshot(req).await.unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let dir = tempfile::tempdir().unwrap();
        let resp = get_uri(build_router(test_state(dir.path())), "/health").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn index_serves_rendered_page() {
        let dir = tempfile::tempdir().unwrap();
        let resp = get_uri(build_router(test_state(dir.path())), "/").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains(r#"<section id="tech-stack">"#));
    }

    #[tokio::test]
    async fn cv_download_sets_attachment_headers() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Joshua_Owuonda_CV.pdf"), b"%PDF-1.7").unwrap();
        let resp = get_uri(build_router(test_state(dir.path())), "/cv").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Joshua_Owuonda_CV.pdf\""
        );
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.7");
    }

    #[tokio::test]
    async fn cv_download_missing_file_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let resp = get_uri(build_router(test_state(dir.path())), "/cv").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn contact_redirects_to_mailto() {
        let dir = tempfile::tempdir().unwrap();
        let resp = get_uri(build_router(test_state(dir.path())), "/contact").await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers()[header::LOCATION],
            "mailto:joshuaowuonda41@gmail.com"
        );
    }

    #[tokio::test]
    async fn asset_served_with_content_type() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("profileImage.png"), [0x89, b'P', b'N', b'G']).unwrap();
        let resp = get_uri(
            build_router(test_state(dir.path())),
            "/assets/profileImage.png",
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/png");
    }

    #[tokio::test]
    async fn unreferenced_asset_is_404_even_if_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("private.txt"), b"secret").unwrap();
        let resp = get_uri(build_router(test_state(dir.path())), "/assets/private.txt").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn sections_listed_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let resp = get_uri(build_router(test_state(dir.path())), "/api/v1/sections").await;
        let json = body_json(resp).await;
        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec!["header", "profile", "experience", "achievements", "blogs", "projects", "tech-stack"]
        );
        assert_eq!(json[6]["kind"], "tech_stack");
    }

    #[tokio::test]
    async fn content_exposes_projects() {
        let dir = tempfile::tempdir().unwrap();
        let resp = get_uri(build_router(test_state(dir.path())), "/api/v1/content").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["sections"][5]["content"]["kind"], "projects");
        assert_eq!(
            json["sections"][5]["content"]["projects"][2]["title"],
            "Mpesa Gateway"
        );
        assert_eq!(json["contact"]["email"], "joshuaowuonda41@gmail.com");
    }

    #[tokio::test]
    async fn active_section_replays_offsets() {
        let dir = tempfile::tempdir().unwrap();
        let body = r#"{
            "sections": [
                {"id": "header", "top": 0},
                {"id": "profile", "top": 800},
                {"id": "experience", "top": 1600}
            ],
            "offsets": [0, 750, 1499]
        }"#;
        let resp = post_json(
            build_router(test_state(dir.path())),
            "/api/v1/scroll/active",
            body,
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["active"], "profile");
        assert_eq!(
            json["trail"],
            serde_json::json!(["header", "profile", "profile"])
        );
    }

    #[tokio::test]
    async fn active_section_empty_layout_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let resp = post_json(
            build_router(test_state(dir.path())),
            "/api/v1/scroll/active",
            r#"{"sections": [], "offsets": [0, 5000]}"#,
        )
        .await;
        let json = body_json(resp).await;
        assert_eq!(json["active"], "");
        assert_eq!(json["trail"], serde_json::json!(["", ""]));
    }

    #[tokio::test]
    async fn active_section_duplicate_ids_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let resp = post_json(
            build_router(test_state(dir.path())),
            "/api/v1/scroll/active",
            r#"{"sections": [{"id": "a", "top": 0}, {"id": "a", "top": 10}], "offsets": [0]}"#,
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"]["code"], "VALIDATION_ERROR");
    }
}
