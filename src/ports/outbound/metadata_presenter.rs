use crate::sbom_harvest::domain::MetadataIndex;
use crate::shared::Result;

/// MetadataPresenter port for emitting the metadata index once a run completes
pub trait MetadataPresenter {
    /// Presents the full index, replacing any previous output
    ///
    /// # Errors
    /// Returns an error if the index cannot be serialized or written
    fn present(&self, index: &MetadataIndex) -> Result<()>;
}
