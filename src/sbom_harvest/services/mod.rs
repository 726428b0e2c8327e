mod parent_project_resolver;
mod project_name_builder;
mod sbom_path_builder;

pub use parent_project_resolver::ParentProjectResolver;
pub use project_name_builder::ProjectNameBuilder;
pub use sbom_path_builder::{SbomPathBuilder, SBOM_FILE_NAME, SBOM_ROOT_DIR};
