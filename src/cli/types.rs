use clap::Parser;
use std::path::PathBuf;

use crate::server::config::DEFAULT_ADDRESS;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "pixify")]
#[command(about = "Static site generator for pages, paginated blog posts and static assets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Source directory holding the templates and the pq descriptor
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output directory, created if missing
    #[arg(value_name = "DESTINATION")]
    pub destination: PathBuf,

    /// Serve DESTINATION over HTTP, rebuilding the site on every request
    #[arg(long, default_value_t = false)]
    pub serve: bool,

    /// Address to listen on when serving
    #[arg(long, value_name = "HOST:PORT", default_value = DEFAULT_ADDRESS)]
    pub address: String,

    /// Descriptor file to use instead of SOURCE/pq.{toml,yml,yaml,json}
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,

    /// Only print errors
    #[arg(short, long, default_value_t = false, conflicts_with = "debug")]
    pub quiet: bool,
}
