use std::path::{Path, PathBuf};

/// A source directory mirrored as-is into the destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDirectory {
    pub path: String,
}

impl StaticDirectory {
    pub fn new(path: &str) -> Self {
        StaticDirectory {
            path: path.to_string(),
        }
    }

    pub fn source(&self, source_root: &Path) -> PathBuf {
        source_root.join(&self.path)
    }

    pub fn destination(&self, destination_root: &Path) -> PathBuf {
        destination_root.join(crate::utils::path::normalize_url(&self.path))
    }
}
