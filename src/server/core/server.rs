use std::sync::Arc;

use log::{error, info};
use tokio::signal;

use crate::server::app::create_app;
use crate::server::config::ServerConfig;
use crate::server::types::DevSite;
use crate::utils::error::{PixifyError, PixifyResult};
use crate::utils::fs;

/// Serve the destination directory, rebuilding the site on every GET.
///
/// Runs until the server fails or Ctrl+C is received.
pub async fn serve(server_config: &ServerConfig, site: Arc<DevSite>) -> PixifyResult<()> {
    fs::ensure_path_exists(&server_config.destination)?;

    info!("Serving files from {}", server_config.destination.display());
    let app = create_app(site);

    let server = axum_server::bind(server_config.address).serve(app.into_make_service());

    print_server_banner(server_config);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(PixifyError::Server(format!(
                    "could not serve on {}: {}",
                    server_config.address, e
                )));
            }
            info!("Server stopped");
        },
        _ = signal::ctrl_c() => {
            info!("Shutting down server (received Ctrl+C)...");
        },
    }

    Ok(())
}

/// Print a banner with server information
fn print_server_banner(server_config: &ServerConfig) {
    println!("\n{}", "-".repeat(60));
    println!(" Pixify development server");
    println!(" - URL: {}", server_config.url());
    println!(" - Listening on: {}", server_config.address);
    println!(" - Every request rebuilds the site");
    println!(" - Press Ctrl+C to stop");
    println!("{}\n", "-".repeat(60));
}
