use crate::ports::outbound::SbomStore;
use crate::shared::error::HarvestError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemSbomStore adapter writing SBOMs below an output directory
///
/// Relative paths use `/` separators; they are joined component by
/// component so the layout is the same on every platform.
pub struct FileSystemSbomStore {
    root: PathBuf,
}

impl FileSystemSbomStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative_path: &str) -> PathBuf {
        relative_path
            .split('/')
            .fold(self.root.clone(), |path, component| path.join(component))
    }

    fn write_error(path: &Path, e: impl std::fmt::Display) -> HarvestError {
        HarvestError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
    }
}

impl SbomStore for FileSystemSbomStore {
    fn ensure_dir(&self, relative_dir: &str) -> Result<()> {
        let dir = self.resolve(relative_dir);
        validate_not_symlink(&dir, "create")?;
        fs::create_dir_all(&dir).map_err(|e| Self::write_error(&dir, e))?;
        Ok(())
    }

    fn store(&self, relative_path: &str, content: &[u8]) -> Result<()> {
        let path = self.resolve(relative_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Self::write_error(&path, e))?;
        }

        validate_not_symlink(&path, "write")?;
        fs::write(&path, content).map_err(|e| Self::write_error(&path, e))?;
        Ok(())
    }
}
