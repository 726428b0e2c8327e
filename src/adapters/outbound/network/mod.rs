/// Network adapters for the Adoptium release API
mod adoptium_client;

pub use adoptium_client::{AdoptiumClient, DEFAULT_API_URL_BASE};
