use crate::shared::Result;

/// SbomStore port for persisting downloaded SBOMs
pub trait SbomStore {
    /// Creates `relative_dir` and any missing parents; existing directories
    /// are left as they are
    ///
    /// # Errors
    /// Returns an error if a directory cannot be created
    fn ensure_dir(&self, relative_dir: &str) -> Result<()>;

    /// Writes `content` to `relative_path`, creating intermediate directories
    /// and overwriting any previous file
    ///
    /// # Errors
    /// Returns an error if a directory or the file cannot be written
    fn store(&self, relative_path: &str, content: &[u8]) -> Result<()>;
}
