use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use liquid::partials::PartialSource;
use log::{debug, error};

/// Partial templates looked up by name under the source root.
///
/// Files are read when first included during a build; the parser owning
/// this source is rebuilt for every pass, so edits are always seen.
#[derive(Debug, Clone)]
pub struct SourceTreePartials {
    root: PathBuf,
}

impl SourceTreePartials {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        SourceTreePartials {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl PartialSource for SourceTreePartials {
    fn contains(&self, name: &str) -> bool {
        self.root.join(name).is_file()
    }

    fn names(&self) -> Vec<&str> {
        // The tree is not enumerated up front
        Vec::new()
    }

    fn try_get<'a>(&'a self, name: &str) -> Option<Cow<'a, str>> {
        let path = self.root.join(name);
        debug!("Loading partial {}", path.display());
        match fs::read_to_string(&path) {
            Ok(content) => Some(Cow::Owned(content)),
            Err(e) => {
                error!("Failed to read partial {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_is_read_from_source_root() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("partials")).unwrap();
        std::fs::write(tmp.path().join("partials/nav.html"), "<nav></nav>").unwrap();

        let partials = SourceTreePartials::new(tmp.path());
        assert!(partials.contains("partials/nav.html"));
        assert_eq!(partials.try_get("partials/nav.html").as_deref(), Some("<nav></nav>"));
    }

    #[test]
    fn test_unreadable_partial_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("binary.html"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let partials = SourceTreePartials::new(tmp.path());
        assert!(partials.contains("binary.html"));
        assert!(partials.try_get("binary.html").is_none());
        assert!(!partials.contains("partials"));
    }
}
