/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (release API, file system, console).
pub mod artifact_fetcher;
pub mod metadata_presenter;
pub mod progress_reporter;
pub mod release_feed;
pub mod sbom_store;

pub use artifact_fetcher::ArtifactFetcher;
pub use metadata_presenter::MetadataPresenter;
pub use progress_reporter::ProgressReporter;
pub use release_feed::ReleaseFeed;
pub use sbom_store::SbomStore;
