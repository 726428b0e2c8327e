use crate::sbom_harvest::domain::ReleaseQuery;
use crate::sbom_harvest::policies::RetryPolicy;

/// HarvestRequest - resolved configuration for one harvest run
///
/// Built once at process entry from flags, environment and config file,
/// then handed to the use case by value.
#[derive(Debug, Clone)]
pub struct HarvestRequest {
    /// Parameters for the release feed query
    pub query: ReleaseQuery,
    /// First label of every project name (e.g. "Eclipse Temurin")
    pub project_root: String,
    /// Second label of every project name (e.g. "JDK 21")
    pub java_version: String,
    /// Retry behaviour for artifact downloads
    pub retry_policy: RetryPolicy,
    /// Enumerate only; fetch no artifacts and write no files
    pub dry_run: bool,
}

impl HarvestRequest {
    pub fn new(
        query: ReleaseQuery,
        project_root: String,
        java_version: String,
        retry_policy: RetryPolicy,
        dry_run: bool,
    ) -> Self {
        Self {
            query,
            project_root,
            java_version,
            retry_policy,
            dry_run,
        }
    }
}
