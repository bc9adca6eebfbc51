//! Codes server - search and download files from a shared `codes` directory
//!
//! The directory is located at request time by probing an ordered list of
//! candidate roots. `/search` lists matching entries, `/download` returns a
//! single file base64-encoded.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod types;
pub mod utils;

use axum::{Router, routing::get};

// Re-export commonly used items
pub use config::Config;
pub use errors::CodesError;
pub use services::{DirectoryResolver, Download, DownloadService, FileService, SearchService};
pub use types::{AppState, SearchOutcome, SearchResultItem};

/// Routes served at the root and again under `/api`
pub fn router(state: AppState) -> Router {
    let endpoints = Router::new()
        .route("/search", get(handlers::handle_search))
        .route("/download", get(handlers::handle_download));

    Router::new()
        .merge(endpoints.clone())
        .nest("/api", endpoints)
        .with_state(state)
}
