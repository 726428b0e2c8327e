use crate::sbom_harvest::domain::{ReleaseAsset, ReleaseQuery};
use crate::shared::Result;

/// ReleaseFeed port for enumerating published releases
pub trait ReleaseFeed {
    /// Fetches one page of releases, in the order the feed returns them
    ///
    /// The feed is expected to be newest-first; implementations must not reorder.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or returns a non-success status
    /// - The response is not an array of releases with the expected fields
    fn fetch_releases(&self, query: &ReleaseQuery) -> Result<Vec<ReleaseAsset>>;
}

impl<T: ReleaseFeed + ?Sized> ReleaseFeed for &T {
    fn fetch_releases(&self, query: &ReleaseQuery) -> Result<Vec<ReleaseAsset>> {
        (**self).fetch_releases(query)
    }
}
