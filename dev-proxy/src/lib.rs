//! Development proxy that forwards `/api` traffic to the real backend.
//!
//! # Design
//! Requests keep their method, path, query, body and end-to-end headers.
//! `Host` is dropped so the HTTP client derives it from the target URL,
//! which makes the upstream see its own origin. Hop-by-hop headers never
//! cross the proxy in either direction.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, uri::PathAndQuery, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use reqwest::redirect::Policy;
use thiserror::Error;
use tower_http::trace::TraceLayer;

/// Origin of the production backend.
pub const DEFAULT_TARGET: &str =
    "https://sheshanbackend-dbe6etbva0bchbhy.canadacentral-01.azurewebsites.net";

pub const DEFAULT_LISTEN: &str = "127.0.0.1:5173";

/// Largest request body forwarded upstream, in bytes.
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("invalid proxy target {0:?}: expected an http(s) origin")]
    InvalidTarget(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub target: String,
    pub body_limit: usize,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

#[derive(Clone)]
struct Upstream {
    client: reqwest::Client,
    target: String,
    body_limit: usize,
}

/// Build the proxy router for `config`.
pub fn app(config: ProxyConfig) -> Result<Router, ProxyError> {
    let target = validate_target(&config.target)?;
    // Redirects go back to the caller unfollowed.
    let client = reqwest::Client::builder().redirect(Policy::none()).build()?;
    let upstream = Upstream {
        client,
        target,
        body_limit: config.body_limit,
    };

    Ok(Router::new()
        .route("/api", any(forward))
        .route("/api/{*rest}", any(forward))
        .layer(TraceLayer::new_for_http())
        .with_state(upstream))
}

/// Accept only absolute http(s) URLs with a host; returns the target without
/// a trailing slash.
fn validate_target(target: &str) -> Result<String, ProxyError> {
    let url = reqwest::Url::parse(target).map_err(|_| ProxyError::InvalidTarget(target.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ProxyError::InvalidTarget(target.to_string()));
    }
    Ok(target.trim_end_matches('/').to_string())
}

/// Remove the fixed hop-by-hop set plus any header `Connection` lists.
fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let listed: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect();
    for name in &listed {
        headers.remove(name.as_str());
    }
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
    headers.remove(header::CONTENT_LENGTH);
}

async fn forward(State(upstream): State<Upstream>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let path = parts
        .uri
        .path_and_query()
        .map(PathAndQuery::as_str)
        .unwrap_or("/");
    let url = format!("{}{path}", upstream.target);

    let body = match axum::body::to_bytes(body, upstream.body_limit).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return (StatusCode::PAYLOAD_TOO_LARGE, format!("request body rejected: {err}"))
                .into_response()
        }
    };

    let mut headers = parts.headers;
    strip_hop_by_hop(&mut headers);
    headers.remove(header::HOST);

    tracing::debug!(method = %parts.method, %url, "forwarding request");
    let response = match upstream
        .client
        .request(parts.method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => return bad_gateway(&url, &err),
    };

    let status = response.status();
    let mut headers = response.headers().clone();
    strip_hop_by_hop(&mut headers);
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => return bad_gateway(&url, &err),
    };

    let mut out = Response::new(Body::from(bytes));
    *out.status_mut() = status;
    *out.headers_mut() = headers;
    out
}

fn bad_gateway(url: &str, err: &reqwest::Error) -> Response {
    tracing::warn!(%url, error = %err, "upstream request failed");
    (StatusCode::BAD_GATEWAY, format!("upstream request failed: {err}")).into_response()
}
