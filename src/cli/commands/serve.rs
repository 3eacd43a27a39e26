use log::{error, info};
use std::path::Path;
use std::sync::Arc;

use crate::config::{ConfigSource, DescriptorFile};
use crate::server::{self, DevSite, ServerConfig};
use crate::utils::error::PixifyResult;

/// Serve the site, regenerating it before every GET request
pub async fn handle_serve_command(
    source: &Path,
    destination: &Path,
    address: &str,
    config_file: Option<&Path>,
) -> PixifyResult<()> {
    let server_config = ServerConfig::new(address, destination)?;

    let mut descriptor = DescriptorFile::new(source);
    if let Some(path) = config_file {
        descriptor = descriptor.with_file(path);
    }
    let config_source: Arc<dyn ConfigSource> = Arc::new(descriptor);
    let site = Arc::new(DevSite::new(config_source, destination));

    info!("Building site before serving...");
    match site.rebuild().await {
        (Ok(report), _) => info!("{}", report),
        (Err(e), _) => error!("Failed to build site, serving anyway: {}", e),
    }

    server::serve(&server_config, site).await
}
