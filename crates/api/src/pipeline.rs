//! Host-agnostic request pipeline
//!
//! Every adapter (local server, Lambda, platform function) reduces its host
//! request to an [`ApiRequest`] and serves the [`ApiResponse`] produced here.
//! The sequence is identical regardless of host: CORS headers on every
//! response, `204` for preflight, `405` for anything but GET, then a single
//! registry lookup answered with the matched document or `{}`.

use axum::{
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use loginbox_shared::CustomizationRegistry;

use crate::cors::apply_cors_headers;
use crate::error::ApiError;

/// Request header names carrying the application ID, in order of preference.
/// `HeaderMap` lookups are case-insensitive, so the capitalized spellings
/// sent by some SDKs resolve to these canonical names.
pub const APP_ID_HEADERS: [&str; 2] = [
    "frontegg-requested-application-id",
    "x-frontegg-requested-application-id",
];

/// The host-independent parts of an incoming request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub headers: HeaderMap,
}

/// The host-independent response: status, headers (CORS always included),
/// and an optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl ApiResponse {
    fn base(status: StatusCode) -> Self {
        let mut headers = HeaderMap::new();
        apply_cors_headers(&mut headers);
        Self {
            status,
            headers,
            body: None,
        }
    }

    /// Empty `204` preflight response.
    pub fn no_content() -> Self {
        Self::base(StatusCode::NO_CONTENT)
    }

    /// JSON response with the given serialized body.
    pub fn json(status: StatusCode, body: String) -> Self {
        let mut response = Self::base(status);
        response.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        response.body = Some(body);
        response
    }

    pub fn from_error(error: ApiError) -> Self {
        Self::json(error.status(), error.body())
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let mut response = match self.body {
            Some(body) => (self.status, body).into_response(),
            None => self.status.into_response(),
        };
        for (name, value) in self.headers.iter() {
            response.headers_mut().insert(name, value.clone());
        }
        response
    }
}

/// Extract the requested application ID from the headers. An empty value is
/// treated the same as an absent one.
pub fn requested_app_id(headers: &HeaderMap) -> Option<&str> {
    APP_ID_HEADERS.iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|value| value.to_str().ok())
            .filter(|id| !id.is_empty())
    })
}

/// Run one request through the customization lookup.
pub fn handle(registry: &CustomizationRegistry, request: &ApiRequest) -> ApiResponse {
    if request.method == Method::OPTIONS {
        return ApiResponse::no_content();
    }

    if request.method != Method::GET {
        return ApiResponse::from_error(ApiError::MethodNotAllowed);
    }

    let app_id = requested_app_id(&request.headers);
    match registry.resolve(app_id) {
        Some(document) => {
            tracing::info!(
                app_id = app_id.unwrap_or("none"),
                "applying customizations"
            );
            ApiResponse::json(StatusCode::OK, document.to_string())
        }
        None => {
            tracing::info!(
                app_id = app_id.unwrap_or("none"),
                "no customizations found"
            );
            ApiResponse::json(StatusCode::OK, "{}".to_string())
        }
    }
}
