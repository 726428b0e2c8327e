/// Mock implementations for testing
mod mock_artifact_fetcher;
mod mock_progress_reporter;
mod mock_release_feed;

pub use mock_artifact_fetcher::MockArtifactFetcher;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_release_feed::MockReleaseFeed;
