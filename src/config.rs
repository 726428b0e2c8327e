//! Configuration resolution for temurin-sbom-harvester.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags and their environment variables, an optional YAML config file
//! (`sbom-harvester.config.yml`), and built-in defaults. Everything is
//! resolved once into a [`HarvestSettings`] value at process entry.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::DEFAULT_API_URL_BASE;
use crate::application::dto::HarvestRequest;
use crate::sbom_harvest::domain::ReleaseQuery;
use crate::sbom_harvest::policies::RetryPolicy;
use crate::shared::error::HarvestError;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-harvester.config.yml";

pub const DEFAULT_IMAGE_TYPE: &str = "sbom";
pub const DEFAULT_VENDOR: &str = "eclipse";
pub const DEFAULT_HEAP_SIZE: &str = "normal";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_PROJECT_ROOT: &str = "Eclipse Temurin";
pub const DEFAULT_JAVA_VERSION: &str = "JDK 21";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url_base: Option<String>,
    pub image_type: Option<String>,
    pub vendor: Option<String>,
    pub heap_size: Option<String>,
    pub page_size: Option<u32>,
    pub project_root: Option<String>,
    pub java_version: Option<String>,
    pub retries: Option<u32>,
    pub retry_delay_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values supplied on the command line or through environment variables.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub api_url_base: Option<String>,
    pub image_type: Option<String>,
    pub vendor: Option<String>,
    pub heap_size: Option<String>,
    pub page_size: Option<u32>,
    pub project_root: Option<String>,
    pub java_version: Option<String>,
    pub retries: Option<u32>,
    pub retry_delay_secs: Option<u64>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct HarvestSettings {
    pub api_url_base: String,
    pub request: HarvestRequest,
}

impl HarvestSettings {
    /// Merges the layers: overrides, then config file, then defaults.
    ///
    /// # Errors
    /// Returns an error if the resolved retry count is zero
    pub fn resolve(
        overrides: &SettingsOverrides,
        config: Option<&ConfigFile>,
        dry_run: bool,
    ) -> Result<Self> {
        let empty = ConfigFile::default();
        let config = config.unwrap_or(&empty);

        let pick = |cli: &Option<String>, file: &Option<String>, default: &str| {
            cli.clone()
                .or_else(|| file.clone())
                .unwrap_or_else(|| default.to_string())
        };

        let query = ReleaseQuery::new(
            pick(&overrides.image_type, &config.image_type, DEFAULT_IMAGE_TYPE),
            pick(&overrides.vendor, &config.vendor, DEFAULT_VENDOR),
            pick(&overrides.heap_size, &config.heap_size, DEFAULT_HEAP_SIZE),
            overrides
                .page_size
                .or(config.page_size)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        );

        let retries = overrides
            .retries
            .or(config.retries)
            .unwrap_or(RetryPolicy::DEFAULT_MAX_ATTEMPTS);
        let delay = overrides
            .retry_delay_secs
            .or(config.retry_delay_secs)
            .map(Duration::from_secs)
            .unwrap_or(RetryPolicy::DEFAULT_DELAY);
        let retry_policy = RetryPolicy::new(retries, delay)?;

        let request = HarvestRequest::new(
            query,
            pick(
                &overrides.project_root,
                &config.project_root,
                DEFAULT_PROJECT_ROOT,
            ),
            pick(
                &overrides.java_version,
                &config.java_version,
                DEFAULT_JAVA_VERSION,
            ),
            retry_policy,
            dry_run,
        );

        Ok(Self {
            api_url_base: pick(
                &overrides.api_url_base,
                &config.api_url_base,
                DEFAULT_API_URL_BASE,
            ),
            request,
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| HarvestError::InvalidConfig {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Names of config keys that will be ignored, sorted for stable output.
pub fn unknown_field_names(config: &ConfigFile) -> Vec<&str> {
    let mut names: Vec<&str> = config.unknown_fields.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}
