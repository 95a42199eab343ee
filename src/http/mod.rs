//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from wiki
//! business logic: response builders, cache validation, and URL codecs.

pub mod cache;
pub mod form;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_400_response, build_404_response, build_405_response,
    build_413_response, build_500_response, build_entry_response, build_health_response,
    build_html_response, build_options_response, build_page_response, build_redirect_response,
};
