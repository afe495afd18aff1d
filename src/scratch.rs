use std::path::{Path, PathBuf};

use crate::error::{Result, SplitterError};

/// Fixed-name working directory for pulled and rendered chart output.
pub const SCRATCH_DIR_NAME: &str = "helm_splitter_tmp";

/// Scratch directory that is removed when dropped, unless `keep` is set.
///
/// Dropping happens on success and on every error path, so a failed run
/// still cleans up.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
    keep: bool,
}

impl ScratchDir {
    /// Create the directory, clearing anything left over from a previous run.
    pub fn create(path: impl Into<PathBuf>, keep: bool) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            std::fs::remove_dir_all(&path).map_err(|e| SplitterError::Io {
                context: format!("removing stale scratch directory {}", path.display()),
                source: e,
            })?;
        }
        std::fs::create_dir_all(&path).map_err(|e| SplitterError::Io {
            context: format!("creating scratch directory {}", path.display()),
            source: e,
        })?;
        Ok(Self { path, keep })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if !self.keep {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}
