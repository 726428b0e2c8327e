use crate::application::dto::{HarvestRequest, HarvestResponse};
use crate::ports::inbound::SbomHarvestPort;
use crate::ports::outbound::{
    ArtifactFetcher, MetadataPresenter, ProgressReporter, ReleaseFeed, SbomStore,
};
use crate::sbom_harvest::domain::{
    Binary, MetadataEntry, MetadataIndex, ReleaseAsset, ReleaseDate, StoredSbom,
};
use crate::sbom_harvest::policies::{CutoffDecision, CutoffPolicy, RetryPolicy};
use crate::sbom_harvest::services::{
    ParentProjectResolver, ProjectNameBuilder, SbomPathBuilder, SBOM_ROOT_DIR,
};
use crate::shared::Result;


/// HarvestSbomsUseCase - Core use case for harvesting release SBOMs
///
/// One run is a single pass: query the feed once, walk its releases
/// newest-first until the cutoff, download every advertised SBOM with
/// bounded retry and record one metadata row per stored file. The index
/// is presented only after the walk completes; a failure mid-run leaves
/// already-downloaded files (and the folder of the failed download) on disk
/// without an index.
///
/// # Type Parameters
/// * `RF` - ReleaseFeed implementation
/// * `AF` - ArtifactFetcher implementation
/// * `SS` - SbomStore implementation
/// * `MP` - MetadataPresenter implementation
/// * `PR` - ProgressReporter implementation
pub struct HarvestSbomsUseCase<RF, AF, SS, MP, PR> {
    release_feed: RF,
    artifact_fetcher: AF,
    sbom_store: SS,
    metadata_presenter: MP,
    progress_reporter: PR,
    cutoff_policy: CutoffPolicy,
}

/// Mutable state of one walk over the feed
#[derive(Default)]
struct HarvestProgress {
    stored_sboms: Vec<StoredSbom>,
    metadata_index: MetadataIndex,
    releases_examined: usize,
    binaries_skipped: usize,
}

impl<RF, AF, SS, MP, PR> HarvestSbomsUseCase<RF, AF, SS, MP, PR>
where
    RF: ReleaseFeed,
    AF: ArtifactFetcher,
    SS: SbomStore,
    MP: MetadataPresenter,
    PR: ProgressReporter,
{
    /// Creates a new HarvestSbomsUseCase with injected dependencies
    pub fn new(
        release_feed: RF,
        artifact_fetcher: AF,
        sbom_store: SS,
        metadata_presenter: MP,
        progress_reporter: PR,
    ) -> Self {
        Self {
            release_feed,
            artifact_fetcher,
            sbom_store,
            metadata_presenter,
            progress_reporter,
            cutoff_policy: CutoffPolicy::default(),
        }
    }

    /// Executes the harvest
    ///
    /// # Arguments
    /// * `request` - resolved configuration for this run
    ///
    /// # Returns
    /// HarvestResponse summarising what was stored
    pub fn execute(&self, request: HarvestRequest) -> Result<HarvestResponse> {
        // Step 1: Prepare the storage root, then query the feed once
        if !request.dry_run {
            self.sbom_store.ensure_dir(SBOM_ROOT_DIR)?;
        }
        let releases = self.fetch_releases(&request)?;

        // Step 2: Walk newest-first until the cutoff
        let names = ProjectNameBuilder::new(
            request.project_root.clone(),
            request.java_version.clone(),
        );
        let mut progress = HarvestProgress::default();
        let mut cutoff_stop = None;
        let mut unprocessed_qualifying = 0;

        for (idx, release) in releases.iter().enumerate() {
            let date = match self.cutoff_policy.evaluate(release)? {
                CutoffDecision::Harvest(date) => date,
                CutoffDecision::Stop(date) => {
                    cutoff_stop = Some(date);
                    unprocessed_qualifying =
                        self.report_cutoff_stop(release, date, &releases[idx + 1..]);
                    break;
                }
            };

            self.progress_reporter.report_progress(
                idx + 1,
                releases.len(),
                Some(&format!("jdk-{} ({})", release.version(), date)),
            );
            self.harvest_release(release, &request, &names, &mut progress)?;
            progress.releases_examined += 1;
        }

        // Step 3: Emit the index only once the walk has completed
        self.finish(&request, &progress)?;

        Ok(HarvestResponse {
            stored_sboms: progress.stored_sboms,
            metadata_index: progress.metadata_index,
            releases_examined: progress.releases_examined,
            binaries_skipped: progress.binaries_skipped,
            cutoff_stop,
            unprocessed_qualifying,
            dry_run: request.dry_run,
        })
    }

    fn fetch_releases(&self, request: &HarvestRequest) -> Result<Vec<ReleaseAsset>> {
        let query = &request.query;
        self.progress_reporter.report(&format!(
            "🔎 Querying release feed (image_type={}, vendor={}, heap_size={}, page_size={})",
            query.image_type, query.vendor, query.heap_size, query.page_size
        ));

        let releases = self.release_feed.fetch_releases(query)?;

        self.progress_reporter
            .report(&format!("✅ Feed returned {} release(s)", releases.len()));
        Ok(releases)
    }

    /// Reports the stop and checks the untouched tail for releases the
    /// newest-first assumption made us skip. Returns how many there were.
    fn report_cutoff_stop(
        &self,
        release: &ReleaseAsset,
        date: ReleaseDate,
        remaining: &[ReleaseAsset],
    ) -> usize {
        self.progress_reporter.report(&format!(
            "⏹️  Reached jdk-{} published {}, before the {} cutoff; stopping",
            release.version(),
            date,
            self.cutoff_policy.cutoff()
        ));

        let qualifying = self.cutoff_policy.count_qualifying(remaining);
        if qualifying > 0 {
            self.progress_reporter.report_warning(&format!(
                "Release feed is not newest-first: {} release(s) after the cutoff stop are newer than {} and were not harvested",
                qualifying,
                self.cutoff_policy.cutoff()
            ));
        }
        qualifying
    }

    fn harvest_release(
        &self,
        release: &ReleaseAsset,
        request: &HarvestRequest,
        names: &ProjectNameBuilder,
        progress: &mut HarvestProgress,
    ) -> Result<()> {
        for binary in release.binaries() {
            let platform = binary.platform();
            let Some(link) = binary.sbom_link() else {
                self.progress_reporter.report(&format!(
                    "Skipping {} ({} {}) - no SBOM",
                    release.version(),
                    platform.os(),
                    platform.architecture()
                ));
                progress.binaries_skipped += 1;
                continue;
            };

            let stored = self.harvest_binary(binary, link, release.version(), request)?;
            progress.metadata_index.push(Self::build_entry(&stored, names));
            progress.stored_sboms.push(stored);
        }
        Ok(())
    }

    /// Downloads and stores one SBOM; in a dry run only the path is computed
    fn harvest_binary(
        &self,
        binary: &Binary,
        link: &str,
        version: &str,
        request: &HarvestRequest,
    ) -> Result<StoredSbom> {
        let platform = binary.platform();
        let relative_dir = SbomPathBuilder::relative_dir(platform, version)?;
        let relative_path = SbomPathBuilder::relative_path(platform, version)?;

        if request.dry_run {
            self.progress_reporter.report(&format!(
                "Would download SBOM for {} {} {} -> {}",
                platform.os(),
                platform.architecture(),
                version,
                relative_path
            ));
        } else {
            // The release folder exists before the download starts, even if it then fails
            self.sbom_store.ensure_dir(&relative_dir)?;
            self.progress_reporter.report(&format!(
                "Downloading SBOM for {} {} {}",
                platform.os(),
                platform.architecture(),
                version
            ));
            let body = self.fetch_with_retry(link, &request.retry_policy)?;
            self.sbom_store.store(&relative_path, &body)?;
        }

        Ok(StoredSbom::new(
            platform.clone(),
            version.to_string(),
            relative_path,
        ))
    }

    fn fetch_with_retry(&self, url: &str, policy: &RetryPolicy) -> Result<Vec<u8>> {
        policy.run(
            url,
            || self.artifact_fetcher.fetch(url),
            |attempt, e| {
                self.progress_reporter
                    .report_error(&format!("Attempt {} failed: {}", attempt, e));
            },
        )
    }

    fn build_entry(stored: &StoredSbom, names: &ProjectNameBuilder) -> MetadataEntry {
        MetadataEntry::new(
            stored.relative_path().to_string(),
            names.build(stored.platform(), stored.version()),
            stored.version().to_string(),
            ParentProjectResolver::resolve_for_metadata(stored.platform()),
        )
    }

    fn finish(&self, request: &HarvestRequest, progress: &HarvestProgress) -> Result<()> {
        if request.dry_run {
            self.progress_reporter.report_completion(&format!(
                "Dry run complete: {} SBOM(s) would be downloaded. No files were written.",
                progress.stored_sboms.len()
            ));
            return Ok(());
        }

        self.metadata_presenter.present(&progress.metadata_index)?;
        self.progress_reporter.report_completion(&format!(
            "Done. Wrote {} SBOM(s) and metadata.json.",
            progress.stored_sboms.len()
        ));
        Ok(())
    }
}

impl<RF, AF, SS, MP, PR> SbomHarvestPort for HarvestSbomsUseCase<RF, AF, SS, MP, PR>
where
    RF: ReleaseFeed,
    AF: ArtifactFetcher,
    SS: SbomStore,
    MP: MetadataPresenter,
    PR: ProgressReporter,
{
    fn harvest(&self, request: HarvestRequest) -> Result<HarvestResponse> {
        self.execute(request)
    }
}
