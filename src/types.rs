use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::services::DirectoryResolver;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<DirectoryResolver>,
    pub download_route: Arc<str>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            resolver: Arc::new(DirectoryResolver::new(config.roots.clone())),
            download_route: Arc::from(config.download_route.as_str()),
        }
    }
}

/// One matching directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub name: String,
    pub extension: String,
    /// Download link for the entry
    pub path: String,
}

/// Body of a successful search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<SearchResultItem>,
    pub directory: PathBuf,
    pub query: String,
    /// Entries in the directory before filtering
    pub file_count: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DownloadParams {
    pub file: Option<String>,
}
