use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use temurin_sbom_harvester::prelude::*;

/// Mock ArtifactFetcher serving canned bodies, optionally failing first
#[derive(Clone, Default)]
pub struct MockArtifactFetcher {
    bodies: HashMap<String, Vec<u8>>,
    failures: HashMap<String, u32>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockArtifactFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: &[u8]) -> Self {
        self.bodies.insert(url.to_string(), body.to_vec());
        self
    }

    /// Fails the first `count` requests for `url`
    pub fn with_failures(mut self, url: &str, count: u32) -> Self {
        self.failures.insert(url.to_string(), count);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls().iter().filter(|u| u.as_str() == url).count()
    }
}

impl ArtifactFetcher for MockArtifactFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(url.to_string());
        let attempt = self.call_count(url) as u32;
        if attempt <= self.failures.get(url).copied().unwrap_or(0) {
            anyhow::bail!("HTTP status 500 Internal Server Error for {}", url);
        }
        match self.bodies.get(url) {
            Some(body) => Ok(body.clone()),
            None => anyhow::bail!("HTTP status 404 Not Found for {}", url),
        }
    }
}
