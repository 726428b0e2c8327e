use crate::adapters::outbound::formatters::MetadataJsonFormatter;
use crate::ports::outbound::MetadataPresenter;
use crate::sbom_harvest::domain::MetadataIndex;
use crate::shared::error::HarvestError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the metadata index, written next to the `sboms/` tree
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// MetadataFileWriter adapter writing the metadata index to disk
///
/// This adapter implements the MetadataPresenter port. Any previous
/// metadata.json is replaced wholesale.
pub struct MetadataFileWriter {
    output_path: PathBuf,
    formatter: MetadataJsonFormatter,
}

impl MetadataFileWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            formatter: MetadataJsonFormatter::new(),
        }
    }

    /// Writer for `metadata.json` inside `output_dir`
    pub fn in_dir(output_dir: &Path) -> Self {
        Self::new(output_dir.join(METADATA_FILE_NAME))
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(HarvestError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl MetadataPresenter for MetadataFileWriter {
    fn present(&self, index: &MetadataIndex) -> Result<()> {
        self.validate_parent_directory()?;
        validate_not_symlink(&self.output_path, "write")?;

        let content = self.formatter.format(index)?;
        fs::write(&self.output_path, content).map_err(|e| HarvestError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_harvest::domain::MetadataEntry;
    use tempfile::TempDir;

    fn sample_index() -> MetadataIndex {
        let mut index = MetadataIndex::new();
        index.push(MetadataEntry::new(
            "sboms/linux-x64/jdk-21.0.2+13/sbom.json".to_string(),
            "Eclipse Temurin / JDK 21 / 21-linux-x64 / jdk-21.0.2+13".to_string(),
            "21.0.2+13".to_string(),
            "6ca279d5-fb01-4957-9f85-de2ed07d3a69".to_string(),
        ));
        index
    }

    #[test]
    fn test_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let writer = MetadataFileWriter::in_dir(temp_dir.path());

        writer.present(&sample_index()).unwrap();

        let written = fs::read_to_string(temp_dir.path().join("metadata.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["projectVersion"], "21.0.2+13");
    }

    #[test]
    fn test_writer_replaces_previous_output() {
        let temp_dir = TempDir::new().unwrap();
        let writer = MetadataFileWriter::in_dir(temp_dir.path());

        writer.present(&sample_index()).unwrap();
        writer.present(&MetadataIndex::new()).unwrap();

        let written = fs::read_to_string(writer.output_path()).unwrap();
        assert_eq!(written, "[]");
    }

    #[test]
    fn test_writer_is_byte_identical_across_runs() {
        let temp_dir = TempDir::new().unwrap();
        let writer = MetadataFileWriter::in_dir(temp_dir.path());

        writer.present(&sample_index()).unwrap();
        let first = fs::read(writer.output_path()).unwrap();
        writer.present(&sample_index()).unwrap();
        let second = fs::read(writer.output_path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_writer_parent_directory_not_found() {
        let writer = MetadataFileWriter::new(PathBuf::from("/nonexistent/directory/metadata.json"));

        let result = writer.present(&sample_index());
        let err_string = result.unwrap_err().to_string();
        assert!(err_string.contains("Parent directory does not exist"));
    }
}
