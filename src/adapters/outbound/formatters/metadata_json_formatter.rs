use crate::sbom_harvest::domain::{MetadataEntry, MetadataIndex};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct MetadataRecord<'a> {
    path: &'a str,
    #[serde(rename = "projectName")]
    project_name: &'a str,
    #[serde(rename = "projectVersion")]
    project_version: &'a str,
    #[serde(rename = "parentProject")]
    parent_project: &'a str,
}

impl<'a> From<&'a MetadataEntry> for MetadataRecord<'a> {
    fn from(entry: &'a MetadataEntry) -> Self {
        Self {
            path: entry.path(),
            project_name: entry.project_name(),
            project_version: entry.project_version(),
            parent_project: entry.parent_project(),
        }
    }
}

/// MetadataJsonFormatter renders the index as the metadata.json array
///
/// Output is a JSON array with 2-space indentation and keys in the order
/// `path`, `projectName`, `projectVersion`, `parentProject`. The same index
/// always renders to the same bytes.
pub struct MetadataJsonFormatter;

impl MetadataJsonFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, index: &MetadataIndex) -> Result<String> {
        let records: Vec<MetadataRecord<'_>> =
            index.entries().iter().map(MetadataRecord::from).collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }
}

impl Default for MetadataJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
