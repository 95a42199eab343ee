//! Wiki page handlers
//!
//! Read-side handlers: the index listing, entry rendering with cache
//! revalidation, search, and the random-entry redirect.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, form};
use crate::markdown;
use crate::search::{self, SearchOutcome};
use crate::store;
use crate::templates;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use rand::Rng;
use std::sync::Arc;

/// Serve the index page listing all entries
pub fn index(ctx: &RequestContext, state: &Arc<AppState>) -> store::Result<Response<Full<Bytes>>> {
    let titles = state.store.list_entries()?;
    Ok(http::build_html_response(
        templates::index_page(&titles),
        ctx.is_head,
    ))
}

/// Serve a single entry rendered from Markdown to HTML
///
/// Unknown titles get a full 404 page naming the title. Rendered pages carry
/// an `ETag` so unchanged entries revalidate with 304.
pub fn view(
    title: &str,
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> store::Result<Response<Full<Bytes>>> {
    let Some(content) = state.store.get_entry(title)? else {
        return Ok(super::not_found_page(
            &format!("The page '{title}' was not found."),
            ctx.is_head,
        ));
    };

    let rendered = markdown::render_markdown(&content);
    let html = templates::entry_page(title, &rendered);
    let etag = cache::generate_etag(html.as_bytes());

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return Ok(http::build_304_response(&etag));
    }

    Ok(http::build_entry_response(html, &etag, ctx.is_head))
}

/// Serve search results, redirecting on an exact title match
///
/// A missing or blank `q` parameter redirects to the index instead of
/// rendering an empty result page.
pub fn search(
    query: Option<&str>,
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> store::Result<Response<Full<Bytes>>> {
    let raw = form::query_param(query, "q").unwrap_or_default();
    let needle = raw.trim();
    if needle.is_empty() {
        return Ok(http::build_redirect_response("/"));
    }

    let titles = state.store.list_entries()?;
    Ok(match search::match_titles(needle, &titles) {
        SearchOutcome::Exact(title) => http::build_redirect_response(&form::entry_url(&title)),
        SearchOutcome::Partial(matches) => {
            http::build_html_response(templates::search_page(needle, &matches), ctx.is_head)
        }
    })
}

/// Redirect to a uniformly random entry
pub fn random_page(
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> store::Result<Response<Full<Bytes>>> {
    let titles = state.store.list_entries()?;
    Ok(match pick_random(&titles) {
        Some(title) => http::build_redirect_response(&form::entry_url(title)),
        None => super::not_found_page("No entries available.", ctx.is_head),
    })
}

/// Pick a uniformly random title, or `None` when the slice is empty
fn pick_random(titles: &[String]) -> Option<&String> {
    if titles.is_empty() {
        return None;
    }
    let index = rand::thread_rng().gen_range(0..titles.len());
    titles.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_random_empty_slice() {
        assert_eq!(pick_random(&[]), None);
    }

    #[test]
    fn test_pick_random_singleton() {
        let titles = vec!["Python".to_string()];
        assert_eq!(pick_random(&titles), Some(&"Python".to_string()));
    }

    #[test]
    fn test_pick_random_returns_a_member() {
        let titles = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        for _ in 0..32 {
            let picked = pick_random(&titles).expect("non-empty slice");
            assert!(titles.contains(picked));
        }
    }
}
