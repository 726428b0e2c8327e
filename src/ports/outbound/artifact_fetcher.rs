use crate::shared::Result;

/// ArtifactFetcher port for downloading a single artifact body
pub trait ArtifactFetcher {
    /// Performs one GET of `url` and returns the body verbatim
    ///
    /// A single attempt only; retrying is the caller's concern.
    ///
    /// # Errors
    /// Returns an error on connection failure or a non-success status
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

impl<T: ArtifactFetcher + ?Sized> ArtifactFetcher for &T {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        (**self).fetch(url)
    }
}
