use crate::sbom_harvest::domain::Platform;

/// Feature release line the harvested SBOMs belong to
pub const FEATURE_RELEASE: u32 = 21;

/// ProjectNameBuilder composes the catalogue project name of a stored SBOM
///
/// Format: `<project root> / <java version> / 21-<os>-<arch> / jdk-<version>`
#[derive(Debug, Clone)]
pub struct ProjectNameBuilder {
    project_root: String,
    java_version: String,
}

impl ProjectNameBuilder {
    pub fn new(project_root: String, java_version: String) -> Self {
        Self {
            project_root,
            java_version,
        }
    }

    pub fn build(&self, platform: &Platform, version: &str) -> String {
        format!(
            "{} / {} / {}-{} / jdk-{}",
            self.project_root,
            self.java_version,
            FEATURE_RELEASE,
            platform.dir_name(),
            version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_default_labels() {
        let builder =
            ProjectNameBuilder::new("Eclipse Temurin".to_string(), "JDK 21".to_string());
        let name = builder.build(&Platform::new("linux", "x64"), "21.0.1+12");
        assert_eq!(
            name,
            "Eclipse Temurin / JDK 21 / 21-linux-x64 / jdk-21.0.1+12"
        );
    }

    #[test]
    fn test_build_custom_labels() {
        let builder = ProjectNameBuilder::new("Acme".to_string(), "Java".to_string());
        let name = builder.build(&Platform::new("mac", "aarch64"), "21.0.3+9");
        assert_eq!(name, "Acme / Java / 21-mac-aarch64 / jdk-21.0.3+9");
    }
}
