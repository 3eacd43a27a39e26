//! In-memory description of one site: standalone pages, blog posts in
//! display order, and static directories mirrored verbatim.

mod blog_post;
mod page;
mod site;
mod static_directory;

pub use blog_post::BlogPost;
pub use page::Page;
pub use site::{PaginationStyle, SiteConfig, BLOG_POSTS_PER_PAGE, DEFAULT_BLOG_POST_TEMPLATE, DEFAULT_HOME_TEMPLATE};
pub use static_directory::StaticDirectory;
