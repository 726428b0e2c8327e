use clap::Parser;
use std::path::PathBuf;
use temurin_sbom_harvester::config::SettingsOverrides;

/// Harvest Eclipse Temurin SBOMs from the Adoptium release API
///
/// SBOMs are written to sboms/<os>-<arch>/jdk-<version>/sbom.json under the
/// output directory, together with a metadata.json index describing each one.
#[derive(Parser, Debug)]
#[command(name = "temurin-sbom-harvester")]
#[command(version)]
#[command(about = "Harvest Eclipse Temurin SBOMs from the Adoptium release API", long_about = None)]
pub struct Args {
    /// Release feed endpoint
    #[arg(long, env = "API_URL_BASE", value_name = "URL")]
    pub api_url_base: Option<String>,

    /// Value of the image_type query parameter [default: sbom]
    #[arg(long, env = "IMAGE_TYPE")]
    pub image_type: Option<String>,

    /// Value of the vendor query parameter [default: eclipse]
    #[arg(long, env = "VENDOR")]
    pub vendor: Option<String>,

    /// Value of the heap_size query parameter [default: normal]
    #[arg(long, env = "HEAP_SIZE")]
    pub heap_size: Option<String>,

    /// Number of releases requested from the feed [default: 20]
    #[arg(long, env = "PAGE_SIZE")]
    pub page_size: Option<u32>,

    /// First label of every project name [default: "Eclipse Temurin"]
    #[arg(long, env = "PROJECT_ROOT")]
    pub project_root: Option<String>,

    /// Second label of every project name [default: "JDK 21"]
    #[arg(long, env = "JAVA_VERSION")]
    pub java_version: Option<String>,

    /// Download attempts per SBOM before the run is aborted [default: 3]
    #[arg(long, value_name = "N")]
    pub retries: Option<u32>,

    /// Fixed delay between download attempts, in seconds [default: 2]
    #[arg(long, value_name = "SECONDS")]
    pub retry_delay_secs: Option<u64>,

    /// Directory that receives sboms/ and metadata.json
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Path to a YAML config file (defaults to sbom-harvester.config.yml in the output directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List the SBOMs that would be downloaded without fetching or writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            api_url_base: self.api_url_base.clone(),
            image_type: self.image_type.clone(),
            vendor: self.vendor.clone(),
            heap_size: self.heap_size.clone(),
            page_size: self.page_size,
            project_root: self.project_root.clone(),
            java_version: self.java_version.clone(),
            retries: self.retries,
            retry_delay_secs: self.retry_delay_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_overrides() {
        let args = Args::try_parse_from([
            "temurin-sbom-harvester",
            "--vendor",
            "adoptium",
            "--page-size",
            "5",
            "--retries",
            "1",
            "--output-dir",
            "/tmp/out",
            "--dry-run",
        ])
        .unwrap();

        let overrides = args.overrides();
        assert_eq!(overrides.vendor.as_deref(), Some("adoptium"));
        assert_eq!(overrides.page_size, Some(5));
        assert_eq!(overrides.retries, Some(1));
        assert_eq!(args.output_dir, PathBuf::from("/tmp/out"));
        assert!(args.dry_run);
    }

    #[test]
    fn test_page_size_must_be_integer() {
        let result = Args::try_parse_from(["temurin-sbom-harvester", "--page-size", "twenty"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = Args::try_parse_from(["temurin-sbom-harvester", "--cutoff", "2020-01-01"]);
        assert!(result.is_err());
    }
}
