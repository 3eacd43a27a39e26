use std::path::{Path, PathBuf};

use liquid::model::Value;
use liquid::Object;
use serde::{Deserialize, Serialize};

use super::{BlogPost, Page, StaticDirectory};

/// Default number of posts on one listing page
pub const BLOG_POSTS_PER_PAGE: usize = 5;

/// Template used for listing pages when the descriptor names none
pub const DEFAULT_HOME_TEMPLATE: &str = "index.html";

/// Template used for single posts when the descriptor names none
pub const DEFAULT_BLOG_POST_TEMPLATE: &str = "blog/post.html";

/// Output URL of the first listing page
const HOME_URL: &str = "index.html";

/// How listing pages after the first one are addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationStyle {
    /// `page/2/index.html`, `page/3/index.html`, ...
    #[default]
    Path,
    /// `?page=2`, `?page=3`, ... written literally as file names
    Query,
}

impl PaginationStyle {
    /// Destination URL for the listing page at 0-based `index`
    pub fn listing_url(&self, index: usize) -> String {
        if index == 0 {
            return HOME_URL.to_string();
        }
        match self {
            PaginationStyle::Path => format!("page/{}/index.html", index + 1),
            PaginationStyle::Query => format!("?page={}", index + 1),
        }
    }

    /// Link a browser follows to reach the listing page at `index`
    pub fn listing_link(&self, index: usize) -> String {
        if index == 0 {
            return "/".to_string();
        }
        match self {
            PaginationStyle::Path => format!("/page/{}/", index + 1),
            PaginationStyle::Query => format!("/?page={}", index + 1),
        }
    }
}

/// Everything one build needs to know about a site
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub source: PathBuf,
    pub home_template: String,
    pub blog_post_template: String,
    /// Configuration order is display order.
    pub blog_posts: Vec<BlogPost>,
    pub pages: Vec<Page>,
    pub static_directories: Vec<StaticDirectory>,
    pub posts_per_page: usize,
    pub pagination: PaginationStyle,
}

impl SiteConfig {
    /// An empty site rooted at `source`, with every default applied
    pub fn new<P: AsRef<Path>>(source: P) -> Self {
        SiteConfig {
            source: source.as_ref().to_path_buf(),
            home_template: DEFAULT_HOME_TEMPLATE.to_string(),
            blog_post_template: DEFAULT_BLOG_POST_TEMPLATE.to_string(),
            blog_posts: Vec::new(),
            pages: Vec::new(),
            static_directories: Vec::new(),
            posts_per_page: BLOG_POSTS_PER_PAGE,
            pagination: PaginationStyle::default(),
        }
    }

    pub fn add_blog_post(&mut self, path: &str, title: &str, date: &str) {
        self.blog_posts.push(BlogPost::new(&self.source, path, title, date));
    }

    pub fn add_page(&mut self, template: &str, url: &str) {
        self.pages.push(Page::new(template).with_url(url));
    }

    /// Static directories form a set; repeats are ignored.
    pub fn add_static_directory(&mut self, path: &str) {
        if !self.static_directories.iter().any(|d| d.path == path) {
            self.static_directories.push(StaticDirectory::new(path));
        }
    }

    /// Posts grouped into listing pages, in configuration order
    pub fn listing_pages(&self) -> std::slice::Chunks<'_, BlogPost> {
        self.blog_posts.chunks(self.posts_per_page.max(1))
    }

    pub fn listing_page_count(&self) -> usize {
        self.blog_posts.len().div_ceil(self.posts_per_page.max(1))
    }

    /// The `site` object every template can see
    pub fn to_liquid(&self) -> Object {
        let mut site = Object::new();
        site.insert("home_template".into(), Value::scalar(self.home_template.clone()));
        site.insert("blog_post_template".into(), Value::scalar(self.blog_post_template.clone()));
        site.insert(
            "blog_posts".into(),
            Value::Array(self.blog_posts.iter().map(BlogPost::summary_to_liquid).collect()),
        );
        site.insert(
            "pages".into(),
            Value::Array(self.pages.iter().map(Page::to_liquid).collect()),
        );
        site.insert(
            "static_directories".into(),
            Value::Array(
                self.static_directories
                    .iter()
                    .map(|d| Value::scalar(d.path.clone()))
                    .collect(),
            ),
        );
        site.insert("time".into(), Value::scalar(chrono::Utc::now().to_rfc3339()));
        site
    }
}
