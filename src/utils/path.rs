use std::path::{Path, PathBuf};

/// Strip a single leading `/` so the URL stays rooted at the destination
pub fn normalize_url(url: &str) -> &str {
    url.strip_prefix('/').unwrap_or(url)
}

/// Convert a site URL to a filesystem path under `root`.
///
/// Only one leading slash is removed; `..` segments are not checked.
pub fn uri_to_path<P: AsRef<Path>>(root: P, uri: &str) -> PathBuf {
    root.as_ref().join(normalize_url(uri))
}

/// Check that a descriptor-supplied name is a relative path
pub fn is_relative_name(name: &str) -> bool {
    !name.is_empty() && Path::new(name).is_relative()
}
