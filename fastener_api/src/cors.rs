//! Cross-origin request middleware
//!
//! Browsers served from the allow-listed front-end origins may call the API.
//! Preflight `OPTIONS` requests are answered here with 204 and never reach a
//! handler.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const DEFAULT_ALLOWED_HEADERS: &str = "content-type";
const PREFLIGHT_MAX_AGE_SECS: &str = "600";

/// CORS allow-list
#[derive(Debug, Clone)]
pub struct CorsConfig {
    allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        CorsConfig { allowed_origins }
    }

    /// `*` in the list allows any origin
    pub fn allows(&self, origin: &str) -> bool {
        self.allow_origin(origin).is_some()
    }

    /// An exact entry wins over `*`; only exact matches get credentials.
    fn allow_origin(&self, origin: &str) -> Option<AllowOrigin> {
        if self
            .allowed_origins
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(origin))
        {
            if let Ok(value) = HeaderValue::from_str(origin) {
                return Some(AllowOrigin::Exact(value));
            }
        }
        self.allowed_origins
            .iter()
            .any(|allowed| allowed == "*")
            .then_some(AllowOrigin::Any)
    }
}

enum AllowOrigin {
    Any,
    Exact(HeaderValue),
}

/// Middleware function adding CORS headers for allowed origins
pub async fn cors(State(config): State<Arc<CorsConfig>>, request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .and_then(|origin| config.allow_origin(origin));

    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        if let Some(origin) = origin {
            let requested_headers = request
                .headers()
                .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
                .cloned()
                .unwrap_or(HeaderValue::from_static(DEFAULT_ALLOWED_HEADERS));

            let headers = response.headers_mut();
            insert_origin(headers, origin);
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOWED_METHODS),
            );
            headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested_headers);
            headers.insert(
                header::ACCESS_CONTROL_MAX_AGE,
                HeaderValue::from_static(PREFLIGHT_MAX_AGE_SECS),
            );
        } else {
            tracing::debug!("preflight from origin not in allow-list");
        }
        return response;
    }

    let mut response = next.run(request).await;
    if let Some(origin) = origin {
        insert_origin(response.headers_mut(), origin);
    }
    response
}

fn insert_origin(headers: &mut HeaderMap, origin: AllowOrigin) {
    match origin {
        AllowOrigin::Any => {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        }
        AllowOrigin::Exact(origin) => {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            );
            headers.insert(header::VARY, HeaderValue::from_static("origin"));
        }
    }
}
