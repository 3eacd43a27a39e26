use std::path::Path;

use log::info;

use crate::config::types::Descriptor;
use crate::utils::error::{PixifyError, PixifyResult};
use crate::utils::path::{is_relative_name, normalize_url};

/// Validate the source directory
pub fn validate_source_directory(source: &Path) -> PixifyResult<()> {
    if !source.exists() {
        return Err(PixifyError::Config(format!(
            "Source directory does not exist: {}",
            source.display()
        )));
    }

    if !source.is_dir() {
        return Err(PixifyError::Config(format!(
            "Source path is not a directory: {}",
            source.display()
        )));
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

/// Validate the values read from a descriptor
pub fn validate_descriptor(descriptor: &Descriptor) -> PixifyResult<()> {
    if descriptor.blog_posts_per_page == 0 {
        return Err(PixifyError::Config(
            "BLOG_POSTS_PER_PAGE must be at least 1".to_string(),
        ));
    }

    check_name("HOME_TEMPLATE", &descriptor.home_template)?;
    check_name("BLOG_POST_TEMPLATE", &descriptor.blog_post_template)?;

    for page in &descriptor.pages {
        check_name("PAGES", page.template())?;
        check_name("PAGES", normalize_url(page.url()))?;
    }

    for dir in &descriptor.static_directories {
        check_name("STATIC_DIRECTORIES", dir)?;
    }

    for entry in &descriptor.blog_posts {
        let (path, _, _) = entry.parts();
        check_name("BLOG_POSTS", path)?;
    }

    Ok(())
}

fn check_name(field: &str, name: &str) -> PixifyResult<()> {
    if is_relative_name(name) {
        Ok(())
    } else {
        Err(PixifyError::Config(format!(
            "{} entries must be non-empty paths relative to the source directory, got {:?}",
            field, name
        )))
    }
}
