//! Host adapters
//!
//! Each adapter translates one host's request/response shape into the shared
//! pipeline. The local axum server in [`crate::routes`] is the third binding.

pub mod lambda;
pub mod platform;

use std::collections::HashMap;

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::pipeline::ApiResponse;

/// Fold a host-provided string header map into a `HeaderMap`. Names are
/// normalized to lowercase by `HeaderName`, which makes the capitalized
/// variants some SDKs send equivalent to the canonical spellings. Entries
/// that are not valid HTTP header names or values are dropped.
pub(crate) fn to_header_map(raw: &HashMap<String, String>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in raw {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            headers.append(name, value);
        }
    }
    headers
}

/// Flatten pipeline response headers back into the string map event-style
/// hosts expect.
pub(crate) fn to_string_map(response: &ApiResponse) -> HashMap<String, String> {
    response
        .headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}
