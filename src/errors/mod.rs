use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Errors produced while serving the codes directory
#[derive(Debug)]
pub enum CodesError {
    /// `file` query parameter absent or empty
    MissingFileName,
    /// None of the candidate roots exists as a directory
    DirectoryNotFound { attempted: Vec<PathBuf> },
    /// The requested name is absent from every candidate root
    FileNotFound { file_name: String, attempted: Vec<PathBuf> },
    /// Listing the resolved directory failed
    Search(io::Error),
    /// Reading the resolved file failed
    Download(io::Error),
    Config(String),
    Io(io::Error),
}

impl CodesError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CodesError::MissingFileName => StatusCode::BAD_REQUEST,
            CodesError::FileNotFound { .. } => StatusCode::NOT_FOUND,
            CodesError::DirectoryNotFound { .. }
            | CodesError::Search(_)
            | CodesError::Download(_)
            | CodesError::Config(_)
            | CodesError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for CodesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodesError::MissingFileName => write!(f, "File name is required"),
            CodesError::DirectoryNotFound { .. } => write!(f, "Codes directory not found"),
            CodesError::FileNotFound { .. } => write!(f, "File not found"),
            CodesError::Search(_) => write!(f, "An error occurred while searching files"),
            CodesError::Download(_) => write!(f, "An error occurred while downloading the file"),
            CodesError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CodesError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl StdError for CodesError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CodesError::Search(e) | CodesError::Download(e) | CodesError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodesError {
    fn from(err: io::Error) -> Self {
        CodesError::Io(err)
    }
}

fn display_paths(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

/// Debug rendering of an error followed by its `source()` chain, one per line
pub fn error_trace(err: &(dyn StdError + 'static)) -> String {
    let mut trace = format!("{:?}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        trace.push_str(&format!("\ncaused by: {:?}", cause));
        source = cause.source();
    }
    trace
}

impl IntoResponse for CodesError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.to_string();
        let body = match &self {
            CodesError::MissingFileName => json!({ "error": error }),
            CodesError::DirectoryNotFound { attempted } => json!({
                "error": error,
                "attempted_paths": display_paths(attempted),
            }),
            CodesError::FileNotFound { file_name, attempted } => json!({
                "error": error,
                "fileName": file_name,
                "attempted_paths": display_paths(attempted),
            }),
            CodesError::Search(e) => json!({
                "error": error,
                "message": e.to_string(),
                "stack": error_trace(e),
            }),
            CodesError::Download(e) | CodesError::Io(e) => json!({
                "error": error,
                "message": e.to_string(),
            }),
            CodesError::Config(msg) => json!({ "error": error, "message": msg }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(CodesError::MissingFileName.status_code(), StatusCode::BAD_REQUEST);
        let missing = CodesError::FileNotFound { file_name: "a.txt".into(), attempted: vec![] };
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        let no_dir = CodesError::DirectoryNotFound { attempted: vec![] };
        assert_eq!(no_dir.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let io = CodesError::Download(io::Error::other("boom"));
        assert_eq!(io.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn trace_includes_source_chain() {
        let err = CodesError::Search(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let trace = error_trace(&err);
        assert!(trace.starts_with("Search("));
        assert!(trace.contains("caused by:"));
        assert!(trace.contains("PermissionDenied"));
    }

    #[tokio::test]
    async fn search_failure_body_carries_message_and_stack() {
        let err = CodesError::Search(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "An error occurred while searching files");
        assert_eq!(body["message"], "denied");
        assert!(body["stack"].as_str().unwrap().contains("PermissionDenied"));
        assert_eq!(body.as_object().unwrap().len(), 3);
    }
}
