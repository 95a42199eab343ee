//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method validation,
//! route matching, and dispatching to page and form handlers.

use crate::config::AppState;
use crate::handler::{assets, entries, forms};
use crate::http;
use crate::logger;
use crate::store;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::header::HeaderValue;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext {
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Parsed target of a `/wiki/...` path
#[derive(Debug, PartialEq, Eq)]
enum WikiTarget {
    View(String),
    Edit(String),
}

/// Main entry point for HTTP request handling
///
/// Generic over the request body so integration tests can drive the router
/// with in-memory bodies while the server feeds it `hyper::body::Incoming`.
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
{
    let started = Instant::now();
    let access_log = state.config.logging.access_log;

    let mut entry = logger::AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method(),
        req.uri(),
        req.version(),
    );
    entry.referer = header_value(&req, "referer");
    entry.user_agent = header_value(&req, "user-agent");

    let mut response = dispatch(req, &state).await;

    if let Ok(server) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert("server", server);
    }

    if access_log {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Run method and size checks, then route; store failures become a logged 500
async fn dispatch<B>(req: Request<B>, state: &Arc<AppState>) -> Response<Full<Bytes>>
where
    B: Body,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(&method, state.config.http.enable_cors) {
        return resp;
    }

    // 2. Check declared body size
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return resp;
    }

    // 3. Log headers if enabled
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // 4. Extract headers for cache revalidation
    let ctx = RequestContext {
        is_head: method == Method::HEAD,
        if_none_match: header_value(&req, "if-none-match"),
    };

    let result = route_request(req, &method, &path, query.as_deref(), &ctx, state).await;

    result.unwrap_or_else(|err| {
        logger::log_error(&format!(
            "Store failure while handling {method} {path}: {err}"
        ));
        http::build_500_response()
    })
}

/// Check HTTP method and return appropriate response for unsupported methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD | &Method::POST => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Route request based on method and path
async fn route_request<B>(
    req: Request<B>,
    method: &Method,
    path: &str,
    query: Option<&str>,
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> store::Result<Response<Full<Bytes>>>
where
    B: Body,
{
    let routes = &state.config.routes;
    let is_post = *method == Method::POST;

    // Health check endpoints (GET-only, always fast)
    if routes.health.enabled
        && (path == routes.health.liveness_path || path == routes.health.readiness_path)
    {
        if is_post {
            return Ok(method_not_allowed(path));
        }
        return Ok(http::build_health_response("ok"));
    }

    // Favicon routes (GET-only)
    if routes.favicon_paths.iter().any(|p| path == p) {
        if is_post {
            return Ok(method_not_allowed(path));
        }
        return Ok(assets::serve_favicon(ctx).await);
    }

    if is_post {
        route_post(req, path, state).await
    } else {
        route_get(path, query, ctx, state)
    }
}

/// 405 for a path that exists but does not accept the request method
fn method_not_allowed(path: &str) -> Response<Full<Bytes>> {
    logger::log_warning(&format!("POST not supported for {path}"));
    http::build_405_response()
}

/// Dispatch GET/HEAD requests to page handlers
fn route_get(
    path: &str,
    query: Option<&str>,
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> store::Result<Response<Full<Bytes>>> {
    match path {
        "/" => entries::index(ctx, state),
        "/search" => entries::search(query, ctx, state),
        "/new" => Ok(forms::new_entry_form(ctx)),
        "/random" => entries::random_page(ctx, state),
        _ => match parse_wiki_path(path) {
            Some(WikiTarget::View(title)) => entries::view(&title, ctx, state),
            Some(WikiTarget::Edit(title)) => forms::edit_entry_form(&title, ctx, state),
            None => Ok(super::not_found_page(
                "The requested page was not found.",
                ctx.is_head,
            )),
        },
    }
}

/// Dispatch POST requests to form handlers, consuming the request body
async fn route_post<B>(
    req: Request<B>,
    path: &str,
    state: &Arc<AppState>,
) -> store::Result<Response<Full<Bytes>>>
where
    B: Body,
{
    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => {
            logger::log_warning(&format!("Failed to read request body for POST {path}"));
            return Ok(http::build_400_response());
        }
    };
    let fields = http::form::parse_form(&body);

    if path == "/new" {
        return forms::create_entry(&fields, state);
    }

    match parse_wiki_path(path) {
        Some(WikiTarget::Edit(title)) => forms::update_entry(&title, &fields, state),
        Some(WikiTarget::View(_)) => Ok(method_not_allowed(path)),
        None => Ok(super::not_found_page(
            "The requested page was not found.",
            false,
        )),
    }
}

/// Split a `/wiki/{title}` or `/wiki/{title}/edit` path into its target
///
/// Titles are percent-decoded. Empty titles and titles spanning multiple
/// segments are rejected.
fn parse_wiki_path(path: &str) -> Option<WikiTarget> {
    let rest = path.strip_prefix("/wiki/")?;
    let (raw, is_edit) = rest
        .strip_suffix("/edit")
        .map_or((rest, false), |r| (r, true));
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    let title = http::form::decode_path_segment(raw);
    Some(if is_edit {
        WikiTarget::Edit(title)
    } else {
        WikiTarget::View(title)
    })
}

/// Extract a header as an owned string, skipping non-UTF-8 values
fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_view_path() {
        assert_eq!(
            parse_wiki_path("/wiki/Python"),
            Some(WikiTarget::View("Python".to_string()))
        );
    }

    #[test]
    fn test_edit_path() {
        assert_eq!(
            parse_wiki_path("/wiki/Python/edit"),
            Some(WikiTarget::Edit("Python".to_string()))
        );
    }

    #[test]
    fn test_percent_encoded_title_is_decoded() {
        assert_eq!(
            parse_wiki_path("/wiki/Category%20Theory"),
            Some(WikiTarget::View("Category Theory".to_string()))
        );
        assert_eq!(
            parse_wiki_path("/wiki/Category%20Theory/edit"),
            Some(WikiTarget::Edit("Category Theory".to_string()))
        );
    }

    #[test]
    fn test_title_named_edit_is_a_view() {
        assert_eq!(
            parse_wiki_path("/wiki/edit"),
            Some(WikiTarget::View("edit".to_string()))
        );
    }

    #[test]
    fn test_empty_and_nested_titles_rejected() {
        assert_eq!(parse_wiki_path("/wiki/"), None);
        assert_eq!(parse_wiki_path("/wiki//edit"), None);
        assert_eq!(parse_wiki_path("/wiki/a/b"), None);
        assert_eq!(parse_wiki_path("/wiki/a/b/edit"), None);
        assert_eq!(parse_wiki_path("/wikipedia"), None);
        assert_eq!(parse_wiki_path("/other"), None);
    }

    #[test]
    fn test_method_check_allows_wiki_methods() {
        assert!(check_http_method(&Method::GET, false).is_none());
        assert!(check_http_method(&Method::HEAD, false).is_none());
        assert!(check_http_method(&Method::POST, false).is_none());
    }

    #[test]
    fn test_method_check_rejects_delete() {
        let resp = check_http_method(&Method::DELETE, false).expect("response");
        assert_eq!(resp.status(), 405);
    }

    #[test]
    fn test_options_gets_preflight_response() {
        let resp = check_http_method(&Method::OPTIONS, false).expect("response");
        assert_eq!(resp.status(), 204);
    }
}
