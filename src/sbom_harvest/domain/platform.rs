/// Platform value object: the (os, architecture) pair a binary is built for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    os: String,
    architecture: String,
}

impl Platform {
    pub fn new(os: impl Into<String>, architecture: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            architecture: architecture.into(),
        }
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    /// Directory name used in the storage layout, e.g. `linux-x64`
    pub fn dir_name(&self) -> String {
        format!("{}-{}", self.os, self.architecture)
    }

    /// Key used by the parent project table, e.g. `linux x64`
    pub fn lookup_key(&self) -> String {
        format!("{} {}", self.os, self.architecture)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.os, self.architecture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_accessors() {
        let platform = Platform::new("mac", "aarch64");
        assert_eq!(platform.os(), "mac");
        assert_eq!(platform.architecture(), "aarch64");
    }

    #[test]
    fn test_platform_dir_name_and_lookup_key() {
        let platform = Platform::new("windows", "x64");
        assert_eq!(platform.dir_name(), "windows-x64");
        assert_eq!(platform.lookup_key(), "windows x64");
        assert_eq!(platform.to_string(), "windows x64");
    }
}
