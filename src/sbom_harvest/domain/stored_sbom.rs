use super::Platform;

/// An SBOM persisted under the deterministic storage layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSbom {
    platform: Platform,
    version: String,
    relative_path: String,
}

impl StoredSbom {
    pub fn new(platform: Platform, version: String, relative_path: String) -> Self {
        Self {
            platform,
            version,
            relative_path,
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Path relative to the output directory, always `/`-separated
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }
}
