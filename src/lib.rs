//! temurin-sbom-harvester - harvest Eclipse Temurin SBOMs from the Adoptium API
//!
//! This library queries the Adoptium release feed for the JDK 21 line, downloads
//! every per-platform SBOM published since 2023-01-01, stores them under
//! `sboms/<os>-<arch>/jdk-<version>/sbom.json` and writes a `metadata.json`
//! index that ties each file to its catalogue project.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_harvest`): release model, cutoff and retry policies,
//!   path and project-identity services
//! - **Application Layer** (`application`): the harvest use case and its DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): Adoptium client, filesystem output, stderr progress
//! - **Shared** (`shared`): error types and safety checks
//!
//! # Example
//!
//! ```no_run
//! use temurin_sbom_harvester::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! let settings = HarvestSettings::resolve(&SettingsOverrides::default(), None, false)?;
//! let client = AdoptiumClient::new(settings.api_url_base)?;
//!
//! let use_case = HarvestSbomsUseCase::new(
//!     &client,
//!     &client,
//!     FileSystemSbomStore::new(PathBuf::from(".")),
//!     MetadataFileWriter::in_dir(Path::new(".")),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(settings.request)?;
//! println!("{} SBOM(s) harvested", response.downloaded_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_harvest;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemSbomStore, MetadataFileWriter};
    pub use crate::adapters::outbound::formatters::MetadataJsonFormatter;
    pub use crate::adapters::outbound::network::AdoptiumClient;
    pub use crate::application::dto::{HarvestRequest, HarvestResponse};
    pub use crate::application::use_cases::HarvestSbomsUseCase;
    pub use crate::config::{HarvestSettings, SettingsOverrides};
    pub use crate::ports::inbound::SbomHarvestPort;
    pub use crate::ports::outbound::{
        ArtifactFetcher, MetadataPresenter, ProgressReporter, ReleaseFeed, SbomStore,
    };
    pub use crate::sbom_harvest::domain::{
        Binary, MetadataEntry, MetadataIndex, Platform, ReleaseAsset, ReleaseDate, ReleaseQuery,
        StoredSbom,
    };
    pub use crate::sbom_harvest::policies::{CutoffDecision, CutoffPolicy, RetryPolicy};
    pub use crate::sbom_harvest::services::{
        ParentProjectResolver, ProjectNameBuilder, SbomPathBuilder,
    };
    pub use crate::shared::error::HarvestError;
    pub use crate::shared::Result;
}
