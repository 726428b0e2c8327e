use crate::sbom_harvest::domain::Platform;
use uuid::{uuid, Uuid};

/// Parent project identifiers of the JDK 21 catalogue, keyed by `"<os> <architecture>"`
const PARENT_PROJECTS: &[(&str, Uuid)] = &[
    ("linux aarch64", uuid!("3680ceb0-702f-4ebd-811b-adece3f90a27")),
    ("linux x64", uuid!("6ca279d5-fb01-4957-9f85-de2ed07d3a69")),
    ("mac aarch64", uuid!("05904a4e-460d-4832-a4d5-4394cbec3c69")),
    ("mac x64", uuid!("b7752a97-4fdf-4c38-9557-89791eb11191")),
    ("windows x64", uuid!("14cf7d68-ca5c-4136-91bf-0a7d97ab3980")),
];

/// ParentProjectResolver maps a platform to the catalogue entry its SBOMs belong under.
///
/// Platforms that are not catalogued resolve to `None`; they are written with
/// an empty parent project rather than failing the run.
pub struct ParentProjectResolver;

impl ParentProjectResolver {
    pub fn resolve(platform: &Platform) -> Option<Uuid> {
        Self::resolve_key(&platform.lookup_key())
    }

    pub fn resolve_key(key: &str) -> Option<Uuid> {
        PARENT_PROJECTS
            .iter()
            .find(|(known, _)| *known == key)
            .map(|(_, id)| *id)
    }

    /// Identifier as written to metadata.json (`""` when unknown)
    pub fn resolve_for_metadata(platform: &Platform) -> String {
        Self::resolve(platform)
            .map(|id| id.hyphenated().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linux_aarch64() {
        let platform = Platform::new("linux", "aarch64");
        assert_eq!(
            ParentProjectResolver::resolve_for_metadata(&platform),
            "3680ceb0-702f-4ebd-811b-adece3f90a27"
        );
    }

    #[test]
    fn test_all_catalogued_platforms() {
        let expected = [
            ("linux", "x64", "6ca279d5-fb01-4957-9f85-de2ed07d3a69"),
            ("mac", "aarch64", "05904a4e-460d-4832-a4d5-4394cbec3c69"),
            ("mac", "x64", "b7752a97-4fdf-4c38-9557-89791eb11191"),
            ("windows", "x64", "14cf7d68-ca5c-4136-91bf-0a7d97ab3980"),
        ];
        for (os, arch, id) in expected {
            let platform = Platform::new(os, arch);
            assert_eq!(ParentProjectResolver::resolve_for_metadata(&platform), id);
        }
    }

    #[test]
    fn test_unknown_platform_resolves_to_empty() {
        let platform = Platform::new("linux", "riscv64");
        assert_eq!(ParentProjectResolver::resolve(&platform), None);
        assert_eq!(ParentProjectResolver::resolve_for_metadata(&platform), "");
    }

    #[test]
    fn test_lookup_uses_space_separated_key() {
        assert!(ParentProjectResolver::resolve_key("linux x64").is_some());
        assert!(ParentProjectResolver::resolve_key("linux-x64").is_none());
    }
}
