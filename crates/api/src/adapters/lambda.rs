//! AWS Lambda (API Gateway proxy) adapter
//!
//! Deserializes the proxy event the gateway hands a Lambda function, runs the
//! shared pipeline, and serializes the proxy result. API Gateway does the
//! routing; the event's path is not inspected.

use std::collections::HashMap;

use axum::http::Method;
use loginbox_shared::CustomizationRegistry;
use serde::{Deserialize, Serialize};

use crate::adapters::{to_header_map, to_string_map};
use crate::error::ApiError;
use crate::pipeline::{handle, ApiRequest, ApiResponse};

/// The subset of the API Gateway proxy event this service reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyEvent {
    pub http_method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyResult {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl From<ApiResponse> for ApiGatewayProxyResult {
    fn from(response: ApiResponse) -> Self {
        Self {
            status_code: response.status.as_u16(),
            headers: to_string_map(&response),
            body: response.body.unwrap_or_default(),
        }
    }
}

/// Lambda entry point: one event in, one result out.
pub fn handle_event(
    registry: &CustomizationRegistry,
    event: &ApiGatewayProxyEvent,
) -> ApiGatewayProxyResult {
    let Ok(method) = Method::from_bytes(event.http_method.as_bytes()) else {
        return ApiResponse::from_error(ApiError::MethodNotAllowed).into();
    };

    let request = ApiRequest {
        method,
        headers: to_header_map(&event.headers),
    };
    handle(registry, &request).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn test_registry() -> CustomizationRegistry {
        CustomizationRegistry::builder()
            .document("app-1", json!({"themeV2": {}}))
            .unwrap()
            .build()
    }

    fn event(method: &str, headers: &[(&str, &str)]) -> ApiGatewayProxyEvent {
        ApiGatewayProxyEvent {
            http_method: method.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_event_deserializes_from_gateway_json() {
        let event: ApiGatewayProxyEvent = serde_json::from_value(json!({
            "httpMethod": "GET",
            "headers": {"frontegg-requested-application-id": "app-1"},
            "path": "/",
            "isBase64Encoded": false
        }))
        .unwrap();

        assert_eq!(event.http_method, "GET");
        assert_eq!(
            event.headers["frontegg-requested-application-id"],
            "app-1"
        );
    }

    #[test]
    fn test_options_preflight() {
        let result = handle_event(&test_registry(), &event("OPTIONS", &[]));

        assert_eq!(result.status_code, 204);
        assert_eq!(result.body, "");
        assert_eq!(result.headers["access-control-allow-origin"], "*");
    }

    #[test]
    fn test_post_rejected() {
        let result = handle_event(&test_registry(), &event("POST", &[]));

        assert_eq!(result.status_code, 405);
        assert_eq!(result.body, r#"{"error":"Method not allowed"}"#);
        assert_eq!(result.headers["access-control-allow-credentials"], "true");
    }

    #[test]
    fn test_capitalized_header_matches() {
        let result = handle_event(
            &test_registry(),
            &event("GET", &[("Frontegg-Requested-Application-Id", "app-1")]),
        );

        assert_eq!(result.status_code, 200);
        let body: Value = serde_json::from_str(&result.body).unwrap();
        assert!(body.get("themeV2").is_some());
    }

    #[test]
    fn test_unmapped_id_returns_empty_object() {
        let result = handle_event(
            &test_registry(),
            &event("GET", &[("frontegg-requested-application-id", "app-123")]),
        );

        assert_eq!(result.status_code, 200);
        assert_eq!(result.body, "{}");
    }

    #[test]
    fn test_result_serializes_with_camel_case_status() {
        let result = handle_event(&test_registry(), &event("GET", &[]));
        let serialized = serde_json::to_value(&result).unwrap();

        assert_eq!(serialized["statusCode"], 200);
        assert_eq!(serialized["body"], "{}");
    }
}
