use crate::ports::outbound::{ArtifactFetcher, ReleaseFeed};
use crate::sbom_harvest::domain::{Binary, Platform, ReleaseAsset, ReleaseQuery};
use crate::shared::error::HarvestError;
use crate::shared::Result;
use reqwest::blocking::Client;
use serde::Deserialize;

/// Default feature-release feed for JDK 21 GA builds
pub const DEFAULT_API_URL_BASE: &str =
    "https://api.adoptium.net/v3/assets/feature_releases/21/ga";

#[derive(Debug, Deserialize)]
struct FeedRelease {
    timestamp: String,
    version_data: FeedVersionData,
    #[serde(default)]
    binaries: Vec<FeedBinary>,
}

#[derive(Debug, Deserialize)]
struct FeedVersionData {
    semver: String,
}

#[derive(Debug, Deserialize)]
struct FeedBinary {
    os: String,
    architecture: String,
    #[serde(default)]
    package: Option<FeedPackage>,
}

#[derive(Debug, Deserialize)]
struct FeedPackage {
    #[serde(default)]
    link: Option<String>,
}

impl From<FeedRelease> for ReleaseAsset {
    fn from(release: FeedRelease) -> Self {
        let binaries = release
            .binaries
            .into_iter()
            .map(|binary| {
                Binary::new(
                    Platform::new(binary.os, binary.architecture),
                    binary.package.and_then(|package| package.link),
                )
            })
            .collect();
        ReleaseAsset::new(release.timestamp, release.version_data.semver, binaries)
    }
}

/// AdoptiumClient adapter for the Adoptium v3 assets API
///
/// Implements both the ReleaseFeed port (one page of feature releases) and
/// the ArtifactFetcher port (single-attempt SBOM download). One blocking
/// client is shared by every request of a run; requests use reqwest's
/// default timeout.
pub struct AdoptiumClient {
    client: Client,
    api_url: String,
}

impl AdoptiumClient {
    /// Creates a client for the given feed endpoint
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("temurin-sbom-harvester/{}", version);
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn parse_releases(body: &[u8]) -> Result<Vec<ReleaseAsset>> {
        let releases: Vec<FeedRelease> =
            serde_json::from_slice(body).map_err(|e| HarvestError::MalformedFeed {
                details: e.to_string(),
            })?;
        Ok(releases.into_iter().map(ReleaseAsset::from).collect())
    }
}

impl ReleaseFeed for AdoptiumClient {
    fn fetch_releases(&self, query: &ReleaseQuery) -> Result<Vec<ReleaseAsset>> {
        let feed_error = |details: String| HarvestError::FeedRequestFailed {
            url: self.api_url.clone(),
            details,
        };

        let response = self
            .client
            .get(&self.api_url)
            .query(&query.as_params())
            .send()
            .map_err(|e| feed_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(feed_error(format!("HTTP status {}", response.status())).into());
        }

        let body = response.bytes().map_err(|e| feed_error(e.to_string()))?;
        Self::parse_releases(&body)
    }
}

impl ArtifactFetcher for AdoptiumClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP status {} for {}", response.status(), url);
        }

        Ok(response.bytes()?.to_vec())
    }
}
