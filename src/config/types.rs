use serde::{Deserialize, Serialize};

use crate::content::{PaginationStyle, BLOG_POSTS_PER_PAGE, DEFAULT_BLOG_POST_TEMPLATE, DEFAULT_HOME_TEMPLATE};

fn default_home_template() -> String {
    DEFAULT_HOME_TEMPLATE.to_string()
}

fn default_blog_post_template() -> String {
    DEFAULT_BLOG_POST_TEMPLATE.to_string()
}

fn default_posts_per_page() -> usize {
    BLOG_POSTS_PER_PAGE
}

/// On-disk shape of the site descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Descriptor {
    #[serde(rename = "HOME_TEMPLATE", default = "default_home_template")]
    pub home_template: String,

    #[serde(rename = "BLOG_POST_TEMPLATE", default = "default_blog_post_template")]
    pub blog_post_template: String,

    #[serde(rename = "STATIC_DIRECTORIES", default)]
    pub static_directories: Vec<String>,

    #[serde(rename = "BLOG_POSTS", default)]
    pub blog_posts: Vec<BlogPostEntry>,

    #[serde(rename = "PAGES", default)]
    pub pages: Vec<PageEntry>,

    #[serde(rename = "BLOG_POSTS_PER_PAGE", default = "default_posts_per_page")]
    pub blog_posts_per_page: usize,

    #[serde(rename = "PAGINATION", default)]
    pub pagination: PaginationStyle,
}

impl Default for Descriptor {
    fn default() -> Self {
        Descriptor {
            home_template: default_home_template(),
            blog_post_template: default_blog_post_template(),
            static_directories: Vec::new(),
            blog_posts: Vec::new(),
            pages: Vec::new(),
            blog_posts_per_page: default_posts_per_page(),
            pagination: PaginationStyle::default(),
        }
    }
}

/// One `BLOG_POSTS` entry: either `[path, title, date]` or a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlogPostEntry {
    Tuple(String, String, String),
    Table { path: String, title: String, date: String },
}

/// One `PAGES` entry: a template name, or a table overriding the output URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageEntry {
    Template(String),
    Table { template: String, url: Option<String> },
}

impl PageEntry {
    pub fn template(&self) -> &str {
        match self {
            PageEntry::Template(template) | PageEntry::Table { template, .. } => template,
        }
    }

    /// Output URL, the template name unless overridden
    pub fn url(&self) -> &str {
        match self {
            PageEntry::Table { url: Some(url), .. } => url,
            _ => self.template(),
        }
    }
}

impl BlogPostEntry {
    pub fn parts(&self) -> (&str, &str, &str) {
        match self {
            BlogPostEntry::Tuple(path, title, date) => (path, title, date),
            BlogPostEntry::Table { path, title, date } => (path, title, date),
        }
    }
}
