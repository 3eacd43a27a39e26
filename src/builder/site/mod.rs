mod builder;
mod pagination;
mod static_dirs;

pub use builder::{build_site, BuildReport};
