use axum::{
    body::Body,
    http::{HeaderValue, Response, StatusCode, header},
    response::IntoResponse,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{debug, info, warn};

use crate::errors::CodesError;
use crate::services::{DirectoryResolver, FileService};
use crate::utils::attachment_disposition;

pub const CONTENT_TRANSFER_ENCODING: &str = "content-transfer-encoding";

/// A file read from the codes directory, ready to send
#[derive(Debug, Clone)]
pub struct Download {
    pub file_name: String,
    pub content_type: &'static str,
    /// Base64 (standard alphabet, padded) of the file bytes
    pub body: String,
}

/// Service for handling file downloads
pub struct DownloadService<'a> {
    resolver: &'a DirectoryResolver,
    file_service: FileService,
}

impl<'a> DownloadService<'a> {
    pub fn new(resolver: &'a DirectoryResolver) -> Self {
        Self { resolver, file_service: FileService::new() }
    }

    /// Locate `file_name` under the candidate roots and encode its contents.
    /// A missing or empty name fails before the filesystem is touched.
    pub fn download(&self, file_name: Option<&str>) -> Result<Download, CodesError> {
        let file_name = match file_name {
            Some(name) if !name.is_empty() => name,
            _ => {
                warn!("Download requested without a file name");
                return Err(CodesError::MissingFileName);
            }
        };

        let path = self.resolver.resolve_file(file_name)?;
        let bytes = self.file_service.read_bytes(&path).map_err(CodesError::Download)?;
        let content_type = self.file_service.content_type_for(file_name);

        debug!("Encoding {} bytes of {:?} as {}", bytes.len(), path, content_type);
        let body = STANDARD.encode(&bytes);
        info!("Prepared download of {:?} ({} bytes)", file_name, bytes.len());

        Ok(Download {
            file_name: file_name.to_string(),
            content_type,
            body,
        })
    }
}

impl IntoResponse for Download {
    fn into_response(self) -> axum::response::Response {
        let disposition = HeaderValue::from_str(&attachment_disposition(&self.file_name))
            .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

        let mut resp = Response::new(Body::from(self.body));
        *resp.status_mut() = StatusCode::OK;
        let headers = resp.headers_mut();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        headers.insert(header::CONTENT_DISPOSITION, disposition);
        headers.insert(CONTENT_TRANSFER_ENCODING, HeaderValue::from_static("base64"));
        resp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn missing_name_fails_without_roots() {
        let resolver = DirectoryResolver::new(vec![]);
        let service = DownloadService::new(&resolver);
        assert!(matches!(service.download(None), Err(CodesError::MissingFileName)));
        assert!(matches!(service.download(Some("")), Err(CodesError::MissingFileName)));
    }

    #[test]
    fn encodes_exact_bytes() {
        let dir = TempDir::new().unwrap();
        let bytes: Vec<u8> = (0u8..=255).collect();
        fs::write(dir.path().join("all.bin"), &bytes).unwrap();
        let resolver = DirectoryResolver::new(vec![dir.path().to_path_buf()]);

        let download = DownloadService::new(&resolver).download(Some("all.bin")).unwrap();
        assert_eq!(download.content_type, "application/octet-stream");
        assert_eq!(STANDARD.decode(download.body).unwrap(), bytes);
    }

    #[test]
    fn not_found_lists_every_pair() {
        let dir = TempDir::new().unwrap();
        let other = PathBuf::from("/no/such/codes");
        let resolver = DirectoryResolver::new(vec![other.clone(), dir.path().to_path_buf()]);

        match DownloadService::new(&resolver).download(Some("ghost.py")) {
            Err(CodesError::FileNotFound { file_name, attempted }) => {
                assert_eq!(file_name, "ghost.py");
                assert_eq!(attempted, vec![other.join("ghost.py"), dir.path().join("ghost.py")]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn directory_entry_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("folder")).unwrap();
        let resolver = DirectoryResolver::new(vec![dir.path().to_path_buf()]);

        let err = DownloadService::new(&resolver).download(Some("folder")).unwrap_err();
        assert!(matches!(err, CodesError::Download(_)));
    }

    #[test]
    fn response_headers() {
        let download = Download {
            file_name: "data.json".to_string(),
            content_type: "application/json",
            body: STANDARD.encode(b"{}"),
        };
        let resp = download.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(resp.headers()[header::CONTENT_DISPOSITION], "attachment; filename=\"data.json\"");
        assert_eq!(resp.headers()[CONTENT_TRANSFER_ENCODING], "base64");
    }
}
