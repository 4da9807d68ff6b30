//! Temporary file management for extracted video frames.
//!
//! Frame extraction writes through a temporary directory so no derived
//! artifact outlives the request. Cleanup happens via the Drop impl of
//! `TempDir`, including on error paths.

use std::path::{Path, PathBuf};
use tempfile::{Builder as TempFileBuilder, TempDir};

use crate::error::BridgeResult;

/// Creates a temporary directory with prefix. Auto-cleaned when dropped.
pub fn create_temp_dir(prefix: &str) -> BridgeResult<TempDir> {
    Ok(TempFileBuilder::new().prefix(prefix).tempdir()?)
}

/// Returns a temporary file path with random suffix. Does not create the file.
pub fn create_temp_file_path(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    use rand::distributions::Alphanumeric;
    use rand::{Rng, thread_rng};

    let random_suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();

    let filename = format!("{prefix}_{random_suffix}.{extension}");
    dir.join(filename)
}
