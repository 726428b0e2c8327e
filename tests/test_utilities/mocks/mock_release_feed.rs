use temurin_sbom_harvester::prelude::*;

/// Mock ReleaseFeed returning a fixed page of releases
pub struct MockReleaseFeed {
    pub releases: Vec<ReleaseAsset>,
    pub should_fail: bool,
}

impl MockReleaseFeed {
    pub fn new(releases: Vec<ReleaseAsset>) -> Self {
        Self {
            releases,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            releases: vec![],
            should_fail: true,
        }
    }
}

impl ReleaseFeed for MockReleaseFeed {
    fn fetch_releases(&self, _query: &ReleaseQuery) -> Result<Vec<ReleaseAsset>> {
        if self.should_fail {
            return Err(HarvestError::FeedRequestFailed {
                url: "https://api.example.test/v3".to_string(),
                details: "HTTP status 503 Service Unavailable".to_string(),
            }
            .into());
        }
        Ok(self.releases.clone())
    }
}
