pub mod site;

pub use site::{build_site, BuildReport};
