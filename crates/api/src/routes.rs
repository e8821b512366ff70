//! Local HTTP server routes
//!
//! The third binding of the pipeline: a plain axum server for running the
//! endpoint without a serverless host. Only `/` and `/api` are mapped; method
//! handling happens inside the pipeline so that `405` responses carry the
//! same body and CORS headers as on the other hosts.

use axum::{
    extract::State,
    http::{HeaderMap, Method},
    routing::any,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::pipeline::{handle, ApiRequest, ApiResponse};
use crate::state::AppState;

/// Create the local server router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(customizations))
        .route("/api", any(customizations))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn customizations(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> ApiResponse {
    handle(&state.registry, &ApiRequest { method, headers })
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use loginbox_shared::CustomizationRegistry;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let registry = CustomizationRegistry::builder()
            .document("app-1", json!({"themeV2": {"loginBox": {"themeName": "modern"}}}))
            .unwrap()
            .build();
        create_router(AppState::new(registry))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_with_mapped_id() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api")
                    .header("frontegg-requested-application-id", "app-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        let body = body_json(response).await;
        assert_eq!(body["themeV2"]["loginBox"]["themeName"], "modern");
    }

    #[tokio::test]
    async fn test_get_root_without_header() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({}));
    }

    #[tokio::test]
    async fn test_options_preflight() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api")
                    .header("origin", "https://portal.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers().get("access-control-allow-methods").unwrap(),
            "GET, OPTIONS, HEAD"
        );
        assert_eq!(
            response.headers().get("access-control-max-age").unwrap(),
            "86400"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_post_rejected() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api")
                    .header("frontegg-requested-application-id", "app-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        assert_eq!(body_json(response).await, json!({"error": "Method not allowed"}));
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/somewhere-else")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn test_header_precedence_over_http() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api")
                    .header("x-frontegg-requested-application-id", "app-1")
                    .header("frontegg-requested-application-id", "unmapped")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // The un-prefixed header wins even though it does not match anything.
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({}));
    }
}
