//! The generate-pdf HTTP service.
//!
//! `POST /generate-pdf` with `{html, fileName?}`:
//! - missing/empty `html` → 400 with an error body
//! - render failure → 500 with error detail
//! - success → `application/pdf` bytes with a download disposition

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;

use modocs_shared::{ModocsError, Result};

use crate::pdf::{PdfRequest, render_with_browser};

/// Server-side rendering settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Headless browser binary.
    pub browser: String,
    /// Upper bound on a single render.
    pub content_timeout: Duration,
}

/// Build the service router.
pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .route("/generate-pdf", post(generate_pdf))
        .with_state(Arc::new(config))
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, config: ServerConfig) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ModocsError::Network(format!("bind {addr}: {e}")))?;
    tracing::info!(%addr, "generate-pdf server listening");

    axum::serve(listener, router(config))
        .await
        .map_err(|e| ModocsError::Network(format!("server error: {e}")))
}

async fn generate_pdf(
    State(config): State<Arc<ServerConfig>>,
    Json(request): Json<PdfRequest>,
) -> Response {
    if request.html.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "HTML content is required" })),
        )
            .into_response();
    }

    match render_with_browser(&request.html, &config.browser, config.content_timeout).await {
        Ok(bytes) => {
            let name = sanitize_file_name(request.file_name.as_deref().unwrap_or("document"));
            (
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{name}.pdf\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "PDF generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to generate PDF",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// Keep the download name header-safe.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '"' | '\\' | '\n' | '\r' | '/'))
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        "document".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn test_router() -> Router {
        router(ServerConfig {
            browser: "definitely-not-a-browser-binary".into(),
            content_timeout: Duration::from_secs(1),
        })
    }

    async fn post_json(body: &str) -> axum::http::Response<Body> {
        test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate-pdf")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn missing_html_is_bad_request() {
        let response = post_json(r#"{"fileName": "doc"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "HTML content is required");
    }

    #[tokio::test]
    async fn empty_html_is_bad_request() {
        let response = post_json(r#"{"html": "   "}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn render_failure_is_internal_error_with_detail() {
        // The configured browser binary does not exist, so a valid request
        // exercises the failure path.
        let response = post_json(r#"{"html": "<html><body>hi</body></html>"}"#).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Failed to generate PDF");
        assert!(body["details"].as_str().unwrap().contains("not found"));
    }

    #[test]
    fn file_names_are_sanitized() {
        assert_eq!(sanitize_file_name("Q4 Invoice"), "Q4 Invoice");
        assert_eq!(sanitize_file_name("bad\"name\r\n"), "badname");
        assert_eq!(sanitize_file_name("  "), "document");
    }
}
