use log::{debug, info};

use crate::errors::CodesError;
use crate::services::{DirectoryResolver, FileService};
use crate::services::file_service::extension_of;
use crate::types::{SearchOutcome, SearchResultItem};
use crate::utils::encode_component;

/// Service for handling search operations
pub struct SearchService<'a> {
    resolver: &'a DirectoryResolver,
    file_service: FileService,
    download_route: &'a str,
}

impl<'a> SearchService<'a> {
    /// Create a new search service
    pub fn new(resolver: &'a DirectoryResolver, download_route: &'a str) -> Self {
        Self {
            resolver,
            file_service: FileService::new(),
            download_route,
        }
    }

    /// Case-insensitive substring match of `query` against every entry name
    /// in the codes directory. An empty query matches everything.
    pub fn search(&self, query: &str) -> Result<SearchOutcome, CodesError> {
        let query = query.to_lowercase();
        info!("Starting search for query: '{}'", query);

        let directory = self.resolver.resolve()?;
        let names = self.file_service.list_names(&directory).map_err(CodesError::Search)?;
        let file_count = names.len();

        let results: Vec<SearchResultItem> = names
            .into_iter()
            .filter(|name| name.to_lowercase().contains(&query))
            .map(|name| self.to_item(name))
            .collect();

        debug!("{} of {} entries matched '{}'", results.len(), file_count, query);

        Ok(SearchOutcome {
            results,
            directory,
            query,
            file_count,
        })
    }

    fn to_item(&self, name: String) -> SearchResultItem {
        SearchResultItem {
            extension: extension_of(&name),
            path: format!("{}?file={}", self.download_route, encode_component(&name)),
            name,
        }
    }
}
