pub mod download_service;
pub mod file_service;
pub mod resolver;
pub mod search_service;

pub use download_service::{Download, DownloadService};
pub use file_service::FileService;
pub use resolver::DirectoryResolver;
pub use search_service::SearchService;
