use std::fs;
use std::io;
use std::path::Path;

use log::{debug, error, info, warn};

/// Service for handling file system operations
#[derive(Clone, Default)]
pub struct FileService;

impl FileService {
    /// Create a new file service
    pub fn new() -> Self {
        Self
    }

    /// Names of every entry in `dir`, files and directories alike, in
    /// `read_dir` order. Names that are not valid UTF-8 are skipped, since
    /// they could not be requested back by name.
    pub fn list_names(&self, dir: &Path) -> io::Result<Vec<String>> {
        debug!("Listing directory: {:?}", dir);

        let entries = fs::read_dir(dir).map_err(|e| {
            error!("Failed to read directory {:?}: {}", dir, e);
            e
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                error!("Failed to read directory entry in {:?}: {}", dir, e);
                e
            })?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!("Skipping non UTF-8 entry {:?} in {:?}", raw, dir),
            }
        }

        info!("Listed directory {:?}, found {} entries", dir, names.len());
        Ok(names)
    }

    /// Read the whole file into memory
    pub fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        debug!("Reading file: {:?}", path);

        let content = fs::read(path).map_err(|e| {
            error!("Failed to read file {:?}: {}", path, e);
            e
        })?;

        info!("Read file {:?}, {} bytes", path, content.len());
        Ok(content)
    }

    /// Determine content type for a file name
    pub fn content_type_for(&self, file_name: &str) -> &'static str {
        let extension = extension_of(file_name);
        let content_type = match extension.as_str() {
            "txt" => "text/plain",
            "html" => "text/html",
            "css" => "text/css",
            "js" => "application/javascript",
            "json" => "application/json",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "pdf" => "application/pdf",
            _ => "application/octet-stream",
        };

        debug!("Content type for {:?}: {} (extension: {})", file_name, content_type, extension);
        content_type
    }
}

/// Suffix after the last dot of the final path component, without the dot.
/// Dotfiles such as `.env` have no extension.
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .unwrap_or_default()
}
