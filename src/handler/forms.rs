//! Form submission handlers
//!
//! Write-side handlers for creating and editing entries. Creation validates
//! both fields and rejects duplicate titles; editing saves whatever content
//! was submitted for an existing entry, including empty content.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, form};
use crate::store;
use crate::templates;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::collections::HashMap;
use std::sync::Arc;

/// Serve the blank new-entry form
pub fn new_entry_form(ctx: &RequestContext) -> Response<Full<Bytes>> {
    http::build_html_response(templates::new_entry_page(None, "", ""), ctx.is_head)
}

/// Handle a new-entry submission
///
/// Failed validation redisplays the form with the trimmed values intact and
/// persists nothing. Success redirects to the freshly created page.
pub fn create_entry(
    fields: &HashMap<String, String>,
    state: &Arc<AppState>,
) -> store::Result<Response<Full<Bytes>>> {
    let title = fields.get("title").map_or("", String::as_str).trim();
    let content = fields.get("content").map_or("", String::as_str).trim();

    if title.is_empty() || content.is_empty() {
        return Ok(http::build_html_response(
            templates::new_entry_page(Some("Both title and content are required."), title, content),
            false,
        ));
    }

    let titles = state.store.list_entries()?;
    let lowered = title.to_lowercase();
    if titles.iter().any(|t| t.to_lowercase() == lowered) {
        return Ok(http::build_html_response(
            templates::new_entry_page(
                Some("An entry with this title already exists."),
                title,
                content,
            ),
            false,
        ));
    }

    state.store.save_entry(title, content)?;
    Ok(http::build_redirect_response(&form::entry_url(title)))
}

/// Serve the edit form prefilled with the entry's current Markdown
pub fn edit_entry_form(
    title: &str,
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> store::Result<Response<Full<Bytes>>> {
    let Some(content) = state.store.get_entry(title)? else {
        return Ok(missing_entry_page(title, ctx.is_head));
    };

    Ok(http::build_html_response(
        templates::edit_entry_page(title, &content),
        ctx.is_head,
    ))
}

/// Handle an edit submission for an existing entry
///
/// The trimmed content is saved unconditionally, even when empty. Clearing a
/// page is a legitimate edit; only the entry's existence is checked.
pub fn update_entry(
    title: &str,
    fields: &HashMap<String, String>,
    state: &Arc<AppState>,
) -> store::Result<Response<Full<Bytes>>> {
    if state.store.get_entry(title)?.is_none() {
        return Ok(missing_entry_page(title, false));
    }

    let content = fields.get("content").map_or("", String::as_str).trim();
    state.store.save_entry(title, content)?;
    Ok(http::build_redirect_response(&form::entry_url(title)))
}

/// 404 page for edit requests against a title that has no entry
fn missing_entry_page(title: &str, is_head: bool) -> Response<Full<Bytes>> {
    super::not_found_page(&format!("The page '{title}' does not exist."), is_head)
}
