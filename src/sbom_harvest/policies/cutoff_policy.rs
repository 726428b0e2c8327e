use crate::sbom_harvest::domain::{ReleaseAsset, ReleaseDate};
use crate::shared::Result;
use chrono::NaiveDate;

/// Outcome of checking one release against the cutoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoffDecision {
    /// Release is on or after the cutoff and should be harvested
    Harvest(ReleaseDate),
    /// Release predates the cutoff; the walk over the feed ends here
    Stop(ReleaseDate),
}

/// CutoffPolicy encodes the "we've gone far enough back" rule.
///
/// The feed is read newest-first, so the first release dated before the
/// cutoff ends the walk. Releases after that point are never harvested,
/// even if they are individually newer than the cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutoffPolicy {
    cutoff: NaiveDate,
}

impl CutoffPolicy {
    /// Earliest publish date still harvested (2023-01-01)
    pub const DEFAULT_CUTOFF: (i32, u32, u32) = (2023, 1, 1);

    pub fn new(cutoff: NaiveDate) -> Self {
        Self { cutoff }
    }

    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    /// Parses the release timestamp and decides whether to harvest or stop.
    ///
    /// # Errors
    /// Returns an error if the timestamp is not ISO-8601
    pub fn evaluate(&self, asset: &ReleaseAsset) -> Result<CutoffDecision> {
        let date = ReleaseDate::parse(asset.timestamp())?;
        if date.date() < self.cutoff {
            Ok(CutoffDecision::Stop(date))
        } else {
            Ok(CutoffDecision::Harvest(date))
        }
    }

    /// Counts releases left behind by the stop that would have qualified on their own.
    ///
    /// A non-zero count means the feed was not strictly newest-first. Timestamps
    /// that do not parse are not counted.
    pub fn count_qualifying(&self, remaining: &[ReleaseAsset]) -> usize {
        remaining
            .iter()
            .filter_map(|asset| ReleaseDate::parse(asset.timestamp()).ok())
            .filter(|date| date.date() >= self.cutoff)
            .count()
    }
}

impl Default for CutoffPolicy {
    fn default() -> Self {
        let (year, month, day) = Self::DEFAULT_CUTOFF;
        // 2023-01-01 is always a valid calendar date
        let cutoff = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN);
        Self { cutoff }
    }
}
