use log::info;
use std::path::Path;

use crate::builder;
use crate::config;
use crate::utils::error::PixifyResult;

/// Build the site once
pub fn handle_build_command(source: &Path, destination: &Path, config_file: Option<&Path>) -> PixifyResult<()> {
    let config = config::load_config(source, config_file.map(Path::to_path_buf))?;

    info!("Building site...");
    let report = builder::build_site(config, destination)?;

    info!("{}", report);
    info!("Site built successfully at {}", destination.display());
    Ok(())
}
