use crate::sbom_harvest::domain::{MetadataIndex, ReleaseDate, StoredSbom};

/// HarvestResponse - summary of a completed harvest run
#[derive(Debug, Clone)]
pub struct HarvestResponse {
    /// SBOMs written (or, in a dry run, that would have been written), in harvest order
    pub stored_sboms: Vec<StoredSbom>,
    /// Metadata rows paired one-to-one with `stored_sboms`
    pub metadata_index: MetadataIndex,
    /// Releases that passed the cutoff check and had their binaries walked
    pub releases_examined: usize,
    /// Binaries skipped because they advertise no SBOM
    pub binaries_skipped: usize,
    /// Date of the release that ended the walk, if the cutoff was reached
    pub cutoff_stop: Option<ReleaseDate>,
    /// Releases after the stop that were newer than the cutoff (feed out of order)
    pub unprocessed_qualifying: usize,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl HarvestResponse {
    pub fn downloaded_count(&self) -> usize {
        self.stored_sboms.len()
    }
}
