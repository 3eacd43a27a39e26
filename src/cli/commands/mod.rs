mod build;
mod serve;

pub use build::handle_build_command;
pub use serve::handle_serve_command;
