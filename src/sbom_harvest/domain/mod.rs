pub mod metadata_entry;
pub mod platform;
pub mod release_asset;
pub mod release_date;
pub mod release_query;
pub mod stored_sbom;

pub use metadata_entry::{MetadataEntry, MetadataIndex};
pub use platform::Platform;
pub use release_asset::{Binary, ReleaseAsset};
pub use release_date::ReleaseDate;
pub use release_query::ReleaseQuery;
pub use stored_sbom::StoredSbom;
