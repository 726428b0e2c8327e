/// One row of the metadata index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    path: String,
    project_name: String,
    project_version: String,
    parent_project: String,
}

impl MetadataEntry {
    pub fn new(
        path: String,
        project_name: String,
        project_version: String,
        parent_project: String,
    ) -> Self {
        Self {
            path,
            project_name,
            project_version,
            parent_project,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_version(&self) -> &str {
        &self.project_version
    }

    /// Parent project identifier; empty when the platform is not catalogued
    pub fn parent_project(&self) -> &str {
        &self.parent_project
    }
}

/// Ordered metadata rows, one per stored SBOM, in harvest order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataIndex {
    entries: Vec<MetadataEntry>,
}

impl MetadataIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: MetadataEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[MetadataEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
