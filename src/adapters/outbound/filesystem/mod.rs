/// Filesystem adapters for SBOM and metadata output
mod metadata_writer;
mod sbom_store;

pub use metadata_writer::{MetadataFileWriter, METADATA_FILE_NAME};
pub use sbom_store::FileSystemSbomStore;
