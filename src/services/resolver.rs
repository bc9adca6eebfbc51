use std::path::{Component, Path, PathBuf};

use log::{debug, info, warn};

use crate::errors::CodesError;

/// Locates the codes directory among an ordered list of candidate roots
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    roots: Vec<PathBuf>,
}

impl DirectoryResolver {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        debug!("Creating DirectoryResolver with {} candidate roots", roots.len());
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// First candidate that exists as a directory
    pub fn resolve(&self) -> Result<PathBuf, CodesError> {
        for root in &self.roots {
            if root.is_dir() {
                info!("Found codes directory at: {:?}", root);
                return Ok(root.clone());
            }
            debug!("Candidate root missing: {:?}", root);
        }

        warn!("No codes directory among {} candidates", self.roots.len());
        Err(CodesError::DirectoryNotFound { attempted: self.roots.clone() })
    }

    /// First existing candidate that holds an entry named `file_name`.
    ///
    /// The name always lands under the root, even when it starts with a
    /// separator. `..` segments are kept as given.
    pub fn resolve_file(&self, file_name: &str) -> Result<PathBuf, CodesError> {
        for root in &self.roots {
            if !root.is_dir() {
                debug!("Candidate root missing: {:?}", root);
                continue;
            }
            let candidate = join_under(root, file_name);
            if candidate.exists() {
                info!("Found file at: {:?}", candidate);
                return Ok(candidate);
            }
            debug!("{:?} not present under {:?}", file_name, root);
        }

        warn!("File {:?} not found under any candidate root", file_name);
        Err(CodesError::FileNotFound {
            file_name: file_name.to_string(),
            attempted: self.attempted_paths(file_name),
        })
    }

    /// Every candidate root joined with `file_name`, in probe order
    pub fn attempted_paths(&self, file_name: &str) -> Vec<PathBuf> {
        self.roots.iter().map(|root| join_under(root, file_name)).collect()
    }
}

/// Append `file_name` below `root` component by component, so a leading
/// `/` or drive prefix cannot replace the root the way `Path::join` would.
pub fn join_under(root: &Path, file_name: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for component in Path::new(file_name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::ParentDir => path.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    path
}
