//! A minimal wiki server.
//!
//! Entries are Markdown files on disk, rendered to HTML on request. The
//! library exposes the store, handlers, and HTTP plumbing so integration
//! tests can drive the router without opening a socket.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod markdown;
pub mod search;
pub mod server;
pub mod store;
pub mod templates;
