//! Static asset serving module
//!
//! Wiki pages are rendered from templates; the only file served from disk is
//! the favicon.

use crate::handler::router::RequestContext;
use crate::http::{self, cache};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

const FAVICON_PATH: &str = "static/favicon.svg";

/// Serve favicon
pub async fn serve_favicon(ctx: &RequestContext) -> Response<Full<Bytes>> {
    match load_favicon().await {
        Some(data) => build_favicon_response(&data, ctx.if_none_match.as_deref(), ctx.is_head),
        None => http::build_404_response(),
    }
}

/// Load favicon
async fn load_favicon() -> Option<Vec<u8>> {
    fs::read(FAVICON_PATH).await.ok()
}

/// Build favicon response
fn build_favicon_response(
    data: &[u8],
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "image/svg+xml")
        .header("Content-Length", data.len())
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=86400")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build favicon response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}
