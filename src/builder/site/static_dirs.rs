use std::path::Path;

use log::debug;

use crate::content::StaticDirectory;
use crate::utils::error::PixifyResult;
use crate::utils::fs;

/// Replace the destination copy of a static directory with the source one.
///
/// The old copy is removed first so files deleted in the source do not
/// survive; the directory is briefly absent while this runs.
pub fn refresh_static_directory(
    directory: &StaticDirectory,
    source_root: &Path,
    destination_root: &Path,
) -> PixifyResult<usize> {
    let src = directory.source(source_root);
    let dst = directory.destination(destination_root);

    if dst.exists() {
        debug!("Removing stale {}", dst.display());
        fs::remove_directory(&dst)?;
    }

    fs::copy_tree(&src, &dst)
}
