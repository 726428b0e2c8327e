/// Formatters for the metadata index
mod metadata_json_formatter;

pub use metadata_json_formatter::MetadataJsonFormatter;
