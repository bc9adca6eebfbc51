use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::errors::CodesError;
use crate::services::{DownloadService, SearchService};
use crate::types::{AppState, DownloadParams, SearchParams};

/// Handle search requests
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, CodesError> {
    let query = params.q.unwrap_or_default();
    log::info!("Search request received for query: '{}'", query);

    let start_time = std::time::Instant::now();
    let search_service = SearchService::new(&state.resolver, &state.download_route);

    let outcome = match search_service.search(&query) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Search failed: {}", e);
            return Err(e);
        }
    };

    log::info!(
        "Search completed in {}ms, {} of {} entries matched",
        start_time.elapsed().as_millis(),
        outcome.results.len(),
        outcome.file_count
    );
    Ok(Json(outcome))
}

/// Handle download requests
pub async fn handle_download(
    State(state): State<AppState>,
    Query(params): Query<DownloadParams>,
) -> Result<impl IntoResponse, CodesError> {
    log::info!("Download request received for file: {:?}", params.file);

    let start_time = std::time::Instant::now();
    let download = DownloadService::new(&state.resolver).download(params.file.as_deref())?;

    log::info!(
        "Download of '{}' completed in {}ms",
        download.file_name,
        start_time.elapsed().as_millis()
    );
    Ok(download)
}
