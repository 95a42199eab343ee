//! Request handler module
//!
//! Responsible for request routing dispatch and business logic processing.
//! Page handlers live in [`entries`], form submissions in [`forms`].

pub mod assets;
pub mod entries;
pub mod forms;
pub mod router;

// Re-export main entry point
pub use router::handle_request;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::http;
use crate::templates;

/// Build a 404 response carrying a full error page in the site chrome
pub(crate) fn not_found_page(message: &str, is_head: bool) -> Response<Full<Bytes>> {
    http::build_page_response(404, templates::error_page(message), is_head)
}
