pub mod filesystem;

use crate::error::{PylintMdError, Result};
use crate::types::config::DiscoveryConfig;
use filesystem::{has_extension, list_files};
use std::path::{Path, PathBuf};

/// Recursively collects the files under `root` carrying the configured
/// extension. An empty result is not an error.
pub fn discover(root: &Path, config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(PylintMdError::PathNotFound(root.display().to_string()));
    }

    let extension = config.extension.trim_start_matches('.');
    let files: Vec<PathBuf> = list_files(root, config.include_hidden)
        .into_iter()
        .filter(|path| has_extension(path, extension))
        .collect();

    tracing::debug!(
        "discovered {} *.{} file(s) under {}",
        files.len(),
        extension,
        root.display()
    );
    Ok(files)
}
