//! Fixed CORS response headers
//!
//! The Frontegg widget fetches the customization endpoint cross-origin, so
//! every response carries this exact header set, error responses included.
//! The wildcard-origin-with-credentials combination is part of the published
//! contract and is applied literally rather than through `CorsLayer`, which
//! rejects that pairing.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

pub const CORS_HEADERS: [(&str, &str); 5] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, OPTIONS, HEAD"),
    (
        "access-control-allow-headers",
        "Content-Type, x-frontegg-framework, X-Frontegg-Framework, x-frontegg-sdk, \
         X-Frontegg-Sdk, frontegg-requested-application-id, Authorization, \
         X-Requested-With, Accept, Origin",
    ),
    ("access-control-allow-credentials", "true"),
    ("access-control-max-age", "86400"),
];

/// Insert the fixed CORS headers, overwriting any existing values.
pub fn apply_cors_headers(headers: &mut HeaderMap) {
    for (name, value) in CORS_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cors_headers_applied() {
        let mut headers = HeaderMap::new();
        apply_cors_headers(&mut headers);

        assert_eq!(headers.len(), CORS_HEADERS.len());
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "GET, OPTIONS, HEAD");
        assert_eq!(headers["access-control-allow-credentials"], "true");
        assert_eq!(headers["access-control-max-age"], "86400");
    }

    #[test]
    fn test_existing_values_overwritten() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "access-control-allow-origin",
            HeaderValue::from_static("https://evil.example"),
        );
        apply_cors_headers(&mut headers);

        assert_eq!(headers["access-control-allow-origin"], "*");
    }
}
