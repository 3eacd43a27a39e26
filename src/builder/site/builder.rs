use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use liquid::model::Value;
use liquid::Object;
use log::{debug, info};

use crate::builder::site::pagination::Paginator;
use crate::builder::site::static_dirs::refresh_static_directory;
use crate::content::{BlogPost, SiteConfig};
use crate::layout::TemplateRenderer;
use crate::utils::error::PixifyResult;
use crate::utils::fs;

/// Counts for one completed build
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub listing_pages: usize,
    pub blog_posts: usize,
    pub pages: usize,
    pub static_files: usize,
    pub duration: Duration,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Listing pages: {}, Posts: {}, Pages: {}, Static files: {} ({:.2?})",
            self.listing_pages, self.blog_posts, self.pages, self.static_files, self.duration
        )
    }
}

/// Runs one full build of a site into a destination directory
#[derive(Debug)]
pub struct Generator {
    config: SiteConfig,
    destination: PathBuf,
}

impl Generator {
    pub fn new<P: AsRef<Path>>(config: SiteConfig, destination: P) -> Self {
        Generator {
            config,
            destination: destination.as_ref().to_path_buf(),
        }
    }

    /// Generate the whole site.
    ///
    /// Posts and listings come first, then pages, then static directories.
    /// The first error aborts the remaining phases; files already written
    /// stay on disk.
    pub fn run(&self) -> PixifyResult<BuildReport> {
        let start_time = Instant::now();
        let mut report = BuildReport::default();

        info!("Output will be generated in: {}", self.destination.display());
        fs::ensure_path_exists(&self.destination)?;

        let renderer = TemplateRenderer::new(&self.config.source, &self.destination, self.config.to_liquid())?;

        info!("Rendering {} blog posts...", self.config.blog_posts.len());
        self.generate_blog_posts(&renderer, &mut report)?;

        info!("Rendering {} pages...", self.config.pages.len());
        self.generate_pages(&renderer, &mut report)?;

        info!("Copying {} static directories...", self.config.static_directories.len());
        self.generate_static_directories(&mut report)?;

        report.duration = start_time.elapsed();
        info!("Site built in {:.2?}", report.duration);
        Ok(report)
    }

    fn generate_blog_posts(&self, renderer: &TemplateRenderer, report: &mut BuildReport) -> PixifyResult<()> {
        let total_pages = self.config.listing_page_count();

        for (index, blog_posts) in self.config.listing_pages().enumerate() {
            let paginator = Paginator::new(index, total_pages, self.config.pagination);
            self.render_blog_post_page(renderer, blog_posts, &paginator)?;
            report.listing_pages += 1;

            for blog_post in blog_posts {
                self.render_blog_post(renderer, blog_post)?;
                report.blog_posts += 1;
            }
        }
        Ok(())
    }

    fn render_blog_post_page(
        &self,
        renderer: &TemplateRenderer,
        blog_posts: &[BlogPost],
        paginator: &Paginator,
    ) -> PixifyResult<()> {
        let posts = blog_posts
            .iter()
            .map(BlogPost::to_liquid)
            .collect::<PixifyResult<Vec<_>>>()?;

        let mut bindings = Object::new();
        bindings.insert("blog_posts".into(), Value::Array(posts));
        bindings.insert("paginator".into(), paginator.to_liquid());

        debug!("Listing page {} of {}", paginator.index + 1, paginator.total_pages);
        renderer.render(&self.config.home_template, &paginator.url(), bindings)?;
        Ok(())
    }

    fn render_blog_post(&self, renderer: &TemplateRenderer, blog_post: &BlogPost) -> PixifyResult<()> {
        let mut bindings = Object::new();
        bindings.insert("blog_post".into(), blog_post.to_liquid()?);

        renderer.render(&self.config.blog_post_template, &blog_post.url(), bindings)?;
        Ok(())
    }

    fn generate_pages(&self, renderer: &TemplateRenderer, report: &mut BuildReport) -> PixifyResult<()> {
        for page in &self.config.pages {
            renderer.render(&page.template, &page.url, Object::new())?;
            report.pages += 1;
        }
        Ok(())
    }

    fn generate_static_directories(&self, report: &mut BuildReport) -> PixifyResult<()> {
        for directory in &self.config.static_directories {
            let copied = refresh_static_directory(directory, &self.config.source, &self.destination)?;
            debug!("Copied {} files from {}", copied, directory.path);
            report.static_files += copied;
        }
        Ok(())
    }
}

/// Build a site once
pub fn build_site<P: AsRef<Path>>(config: SiteConfig, destination: P) -> PixifyResult<BuildReport> {
    Generator::new(config, destination).run()
}
