use super::Platform;

/// One platform-specific artifact bundle within a release
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    platform: Platform,
    package_link: Option<String>,
}

impl Binary {
    pub fn new(platform: Platform, package_link: Option<String>) -> Self {
        Self {
            platform,
            package_link,
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Link to the SBOM artifact, if this binary advertises one.
    ///
    /// An empty link counts as absent.
    pub fn sbom_link(&self) -> Option<&str> {
        self.package_link.as_deref().filter(|link| !link.is_empty())
    }
}

/// One published release of the tracked feature line, as disclosed by the feed
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseAsset {
    timestamp: String,
    version: String,
    binaries: Vec<Binary>,
}

impl ReleaseAsset {
    pub fn new(timestamp: String, version: String, binaries: Vec<Binary>) -> Self {
        Self {
            timestamp,
            version,
            binaries,
        }
    }

    /// Raw publish instant as sent by the feed; parsed lazily by the cutoff check
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn binaries(&self) -> &[Binary] {
        &self.binaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_sbom_link_present() {
        let binary = Binary::new(
            Platform::new("linux", "x64"),
            Some("https://example.test/sbom.json".to_string()),
        );
        assert_eq!(binary.sbom_link(), Some("https://example.test/sbom.json"));
    }

    #[test]
    fn test_binary_sbom_link_absent_or_empty() {
        let missing = Binary::new(Platform::new("linux", "x64"), None);
        assert_eq!(missing.sbom_link(), None);

        let empty = Binary::new(Platform::new("linux", "x64"), Some(String::new()));
        assert_eq!(empty.sbom_link(), None);
    }

    #[test]
    fn test_release_asset_accessors() {
        let asset = ReleaseAsset::new(
            "2024-01-16T12:00:00Z".to_string(),
            "21.0.2+13".to_string(),
            vec![Binary::new(Platform::new("mac", "x64"), None)],
        );
        assert_eq!(asset.timestamp(), "2024-01-16T12:00:00Z");
        assert_eq!(asset.version(), "21.0.2+13");
        assert_eq!(asset.binaries().len(), 1);
    }
}
