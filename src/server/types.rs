use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use tokio::sync::{OwnedRwLockReadGuard, RwLock};

use crate::builder::{build_site, BuildReport};
use crate::config::ConfigSource;
use crate::utils::error::{PixifyError, PixifyResult};

/// State shared by every request of the development server
#[derive(Debug)]
pub struct DevSite {
    config_source: Arc<dyn ConfigSource>,
    destination: PathBuf,
    /// Written by a rebuild, read while a response is served from the tree
    tree_lock: Arc<RwLock<()>>,
}

impl DevSite {
    pub fn new<P: AsRef<Path>>(config_source: Arc<dyn ConfigSource>, destination: P) -> Self {
        DevSite {
            config_source,
            destination: destination.as_ref().to_path_buf(),
            tree_lock: Arc::new(RwLock::new(())),
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Re-read the configuration and regenerate the whole site.
    ///
    /// Waits for in-flight rebuilds and responses to finish. The returned
    /// guard keeps the next rebuild out until it is dropped, so the caller
    /// serves from the tree this rebuild produced.
    pub async fn rebuild(self: &Arc<Self>) -> (PixifyResult<BuildReport>, OwnedRwLockReadGuard<()>) {
        let guard = self.tree_lock.clone().write_owned().await;

        let site = Arc::clone(self);
        let result = match tokio::task::spawn_blocking(move || site.build()).await {
            Ok(result) => result,
            Err(e) => Err(PixifyError::Server(format!("rebuild task did not finish: {}", e))),
        };

        (result, guard.downgrade())
    }

    /// Read access to the destination tree once no rebuild is running
    pub async fn read_tree(&self) -> OwnedRwLockReadGuard<()> {
        self.tree_lock.clone().read_owned().await
    }

    fn build(&self) -> PixifyResult<BuildReport> {
        let config = self.config_source.load()?;
        let report = build_site(config, &self.destination)?;
        debug!("Rebuilt site: {}", report);
        Ok(report)
    }
}
