/// Data Transfer Objects for application layer
///
/// DTOs carry the resolved configuration into the use case and the
/// run summary back out, keeping the domain layer isolated.
mod harvest_request;
mod harvest_response;

pub use harvest_request::HarvestRequest;
pub use harvest_response::HarvestResponse;
