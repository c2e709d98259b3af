// Briefcast - API Core
//
// Backend for the news-to-podcast briefing pipeline: search the web for
// articles, extract and embed their content, store them in Postgres with
// pgvector, and retrieve them by similarity or category.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
