use crate::application::dto::{HarvestRequest, HarvestResponse};
use crate::shared::Result;

/// SbomHarvestPort - Inbound port for the harvest use case
///
/// This port is what the CLI drives. One call performs one complete run:
/// a single feed query followed by the sequential walk over its releases.
pub trait SbomHarvestPort {
    /// Harvests every eligible SBOM described by the release feed
    ///
    /// # Errors
    /// Returns an error if:
    /// - The release feed cannot be queried or returns malformed data
    /// - A release timestamp cannot be parsed
    /// - An artifact download fails on every attempt
    /// - A downloaded SBOM cannot be written
    fn harvest(&self, request: HarvestRequest) -> Result<HarvestResponse>;
}
