use crate::sbom_harvest::domain::Platform;
use crate::shared::security::validate_path_component;
use crate::shared::Result;

/// Root directory of the storage layout, relative to the output directory
pub const SBOM_ROOT_DIR: &str = "sboms";

/// File name every stored SBOM gets
pub const SBOM_FILE_NAME: &str = "sbom.json";

/// SbomPathBuilder computes the storage path `sboms/<os>-<arch>/jdk-<version>/sbom.json`
pub struct SbomPathBuilder;

impl SbomPathBuilder {
    /// Returns the `/`-separated release folder relative to the output
    /// directory, `sboms/<os>-<arch>/jdk-<version>`.
    ///
    /// # Errors
    /// Returns an error if the os, architecture or version could escape the
    /// storage tree
    pub fn relative_dir(platform: &Platform, version: &str) -> Result<String> {
        validate_path_component(platform.os(), "OS")?;
        validate_path_component(platform.architecture(), "Architecture")?;
        validate_path_component(version, "Version")?;

        Ok(format!(
            "{}/{}/jdk-{}",
            SBOM_ROOT_DIR,
            platform.dir_name(),
            version
        ))
    }

    /// Returns the `/`-separated file path relative to the output directory.
    ///
    /// # Errors
    /// Same conditions as [`SbomPathBuilder::relative_dir`]
    pub fn relative_path(platform: &Platform, version: &str) -> Result<String> {
        let dir = Self::relative_dir(platform, version)?;
        Ok(format!("{}/{}", dir, SBOM_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_layout() {
        let path =
            SbomPathBuilder::relative_path(&Platform::new("linux", "aarch64"), "21.0.4+7")
                .unwrap();
        assert_eq!(path, "sboms/linux-aarch64/jdk-21.0.4+7/sbom.json");
    }

    #[test]
    fn test_relative_dir_is_parent_of_path() {
        let platform = Platform::new("windows", "x64");
        let dir = SbomPathBuilder::relative_dir(&platform, "21.0.1+12").unwrap();
        let path = SbomPathBuilder::relative_path(&platform, "21.0.1+12").unwrap();
        assert_eq!(dir, "sboms/windows-x64/jdk-21.0.1+12");
        assert_eq!(path, format!("{}/sbom.json", dir));
    }

    #[test]
    fn test_relative_path_rejects_traversal() {
        let result = SbomPathBuilder::relative_path(&Platform::new("linux", "x64"), "../../etc");
        assert!(result.is_err());
    }

    #[test]
    fn test_relative_path_rejects_empty_os() {
        let result = SbomPathBuilder::relative_path(&Platform::new("", "x64"), "21.0.4+7");
        assert!(result.is_err());
    }
}
