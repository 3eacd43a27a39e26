use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::Descriptor;
use crate::config::validation;
use crate::content::SiteConfig;
use crate::utils::error::{PixifyError, PixifyResult};
use crate::utils::fs;

/// Descriptor file names looked up in the source root, in order
pub const CONFIG_FILES: [&str; 4] = ["pq.toml", "pq.yml", "pq.yaml", "pq.json"];

/// Anything that can produce a fresh [`SiteConfig`].
///
/// Every call must return a complete configuration; nothing is merged
/// with the result of a previous call.
pub trait ConfigSource: fmt::Debug + Send + Sync {
    fn load(&self) -> PixifyResult<SiteConfig>;
}

/// Structured-data descriptor stored in the source directory
#[derive(Debug, Clone)]
pub struct DescriptorFile {
    source_dir: PathBuf,
    explicit: Option<PathBuf>,
}

impl DescriptorFile {
    /// Look the descriptor up by its conventional names under `source_dir`
    pub fn new<P: AsRef<Path>>(source_dir: P) -> Self {
        DescriptorFile {
            source_dir: source_dir.as_ref().to_path_buf(),
            explicit: None,
        }
    }

    /// Use this file instead of searching for one
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.explicit = Some(path.as_ref().to_path_buf());
        self
    }

    fn locate(&self) -> PixifyResult<PathBuf> {
        if let Some(path) = &self.explicit {
            if path.is_file() {
                return Ok(path.clone());
            }
            return Err(PixifyError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        CONFIG_FILES
            .iter()
            .map(|name| self.source_dir.join(name))
            .find(|path| path.is_file())
            .ok_or_else(|| {
                PixifyError::Config(format!(
                    "No descriptor found in {} (looked for {})",
                    self.source_dir.display(),
                    CONFIG_FILES.join(", ")
                ))
            })
    }
}

impl ConfigSource for DescriptorFile {
    fn load(&self) -> PixifyResult<SiteConfig> {
        validation::validate_source_directory(&self.source_dir)?;

        let path = self.locate()?;
        debug!("Loading configuration from {}", path.display());
        let content = fs::read_file(&path)
            .map_err(|e| PixifyError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        let descriptor = parse_descriptor(&content, &path)?;
        validation::validate_descriptor(&descriptor)?;

        Ok(build_site_config(&self.source_dir, descriptor))
    }
}

/// Load site configuration from `source_dir`, optionally from an explicit file
pub fn load_config<P: AsRef<Path>>(source_dir: P, config_file: Option<PathBuf>) -> PixifyResult<SiteConfig> {
    let mut source = DescriptorFile::new(source_dir);
    if let Some(file) = config_file {
        source = source.with_file(file);
    }
    source.load()
}

/// Parse a descriptor, picking the format from the file extension
fn parse_descriptor(content: &str, path: &Path) -> PixifyResult<Descriptor> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "toml" => toml::from_str(content).map_err(|e| {
            PixifyError::Config(format!("Failed to parse TOML configuration ({}): {}", path.display(), e))
        }),
        "json" => serde_json::from_str(content).map_err(|e| {
            PixifyError::Config(format!("Failed to parse JSON configuration ({}): {}", path.display(), e))
        }),
        "yml" | "yaml" | "" => parse_yaml_descriptor(content, path),
        other => Err(PixifyError::Config(format!(
            "Unsupported configuration file format: {}",
            other
        ))),
    }
}

fn parse_yaml_descriptor(content: &str, path: &Path) -> PixifyResult<Descriptor> {
    // An empty YAML document deserializes to unit, not to a mapping
    if content.trim().is_empty() {
        return Ok(Descriptor::default());
    }
    serde_yaml::from_str(content).map_err(|e| {
        PixifyError::Config(format!("Failed to parse YAML configuration ({}): {}", path.display(), e))
    })
}

fn build_site_config(source_dir: &Path, descriptor: Descriptor) -> SiteConfig {
    let mut site = SiteConfig::new(source_dir);
    site.home_template = descriptor.home_template;
    site.blog_post_template = descriptor.blog_post_template;
    site.posts_per_page = descriptor.blog_posts_per_page;
    site.pagination = descriptor.pagination;

    for entry in &descriptor.blog_posts {
        let (path, title, date) = entry.parts();
        site.add_blog_post(path, title, date);
    }
    for page in &descriptor.pages {
        site.add_page(page.template(), page.url());
    }
    for dir in &descriptor.static_directories {
        site.add_static_directory(dir);
    }

    debug!(
        "Configuration loaded: {} posts, {} pages, {} static directories",
        site.blog_posts.len(),
        site.pages.len(),
        site.static_directories.len()
    );
    site
}
