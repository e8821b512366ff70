//! Generic platform-function adapter
//!
//! For serverless hosts that hand functions a plain `{method, headers}`
//! request object and expect `{status, headers, body}` back (Vercel-style).
//! The host routes by path before invoking the function.

use std::collections::HashMap;

use axum::http::Method;
use loginbox_shared::CustomizationRegistry;
use serde::{Deserialize, Serialize};

use crate::adapters::{to_header_map, to_string_map};
use crate::error::ApiError;
use crate::pipeline::{handle, ApiRequest, ApiResponse};

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformRequest {
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl From<ApiResponse> for PlatformResponse {
    fn from(response: ApiResponse) -> Self {
        Self {
            status: response.status.as_u16(),
            headers: to_string_map(&response),
            body: response.body.unwrap_or_default(),
        }
    }
}

/// Platform-function entry point.
pub fn handle_request(
    registry: &CustomizationRegistry,
    request: &PlatformRequest,
) -> PlatformResponse {
    let Ok(method) = Method::from_bytes(request.method.as_bytes()) else {
        return ApiResponse::from_error(ApiError::MethodNotAllowed).into();
    };

    let api_request = ApiRequest {
        method,
        headers: to_header_map(&request.headers),
    };
    handle(registry, &api_request).into()
}
