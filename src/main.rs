mod cli;

use cli::Args;
use std::process;
use temurin_sbom_harvester::adapters::outbound::console::StderrProgressReporter;
use temurin_sbom_harvester::adapters::outbound::filesystem::{
    FileSystemSbomStore, MetadataFileWriter,
};
use temurin_sbom_harvester::adapters::outbound::network::AdoptiumClient;
use temurin_sbom_harvester::application::use_cases::HarvestSbomsUseCase;
use temurin_sbom_harvester::config::{
    discover_config, load_config_from_path, unknown_field_names, ConfigFile, HarvestSettings,
};
use temurin_sbom_harvester::ports::inbound::SbomHarvestPort;
use temurin_sbom_harvester::ports::outbound::ProgressReporter;
use temurin_sbom_harvester::shared::error::ExitCode;
use temurin_sbom_harvester::shared::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();
    let progress_reporter = StderrProgressReporter::new();

    // Resolve configuration once: flags/env > config file > defaults
    let config = load_config(&args)?;
    if let Some(config) = config.as_ref() {
        for key in unknown_field_names(config) {
            progress_reporter.report_warning(&format!(
                "Unknown config field '{}' will be ignored.",
                key
            ));
        }
    }
    let settings = HarvestSettings::resolve(&args.overrides(), config.as_ref(), args.dry_run)?;

    // Create adapters (Dependency Injection)
    // One client serves both the feed query and every SBOM download
    let client = AdoptiumClient::new(settings.api_url_base)?;
    let sbom_store = FileSystemSbomStore::new(args.output_dir.clone());
    let metadata_writer = MetadataFileWriter::in_dir(&args.output_dir);

    let use_case = HarvestSbomsUseCase::new(
        &client,
        &client,
        sbom_store,
        metadata_writer,
        progress_reporter,
    );

    use_case.harvest(settings.request)?;
    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(&args.output_dir),
    }
}
