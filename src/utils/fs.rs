use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::utils::error::{PixifyError, PixifyResult};

/// Create a directory and any parent directories if they don't exist.
///
/// Calling this repeatedly on the same path is a no-op after the first call.
pub fn ensure_path_exists<P: AsRef<Path>>(path: P) -> PixifyResult<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir_all(path).map_err(|e| PixifyError::io(path, e))?;
    }
    Ok(())
}

/// Make sure the directory that will contain `path` exists
pub fn ensure_dirname_exists<P: AsRef<Path>>(path: P) -> PixifyResult<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_path_exists(parent),
        _ => Ok(()),
    }
}

/// Remove a directory and all its contents, if it is there
pub fn remove_directory<P: AsRef<Path>>(path: P) -> PixifyResult<()> {
    let path = path.as_ref();
    if path.is_dir() {
        fs::remove_dir_all(path).map_err(|e| PixifyError::io(path, e))?;
    } else if path.exists() {
        fs::remove_file(path).map_err(|e| PixifyError::io(path, e))?;
    }
    Ok(())
}

/// Read a file as UTF-8 text
pub fn read_file<P: AsRef<Path>>(path: P) -> PixifyResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| PixifyError::io(path, e))
}

/// Write a string to a file, truncating whatever was there
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> PixifyResult<()> {
    let path = path.as_ref();
    ensure_dirname_exists(path)?;
    fs::write(path, contents.as_bytes()).map_err(|e| PixifyError::io(path, e))
}

/// Mirror a directory tree byte-for-byte. Returns the number of files copied.
pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> PixifyResult<usize> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    if !source.is_dir() {
        return Err(PixifyError::io(
            source,
            std::io::Error::new(std::io::ErrorKind::NotFound, "static directory not found"),
        ));
    }

    let mut copied = 0;
    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            ensure_path_exists(&target)?;
        } else {
            ensure_dirname_exists(&target)?;
            debug!("Copying {} to {}", entry.path().display(), target.display());
            fs::copy(entry.path(), &target).map_err(|e| PixifyError::io(entry.path(), e))?;
            copied += 1;
        }
    }

    Ok(copied)
}
