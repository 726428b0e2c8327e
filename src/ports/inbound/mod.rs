/// Inbound ports (Driving ports) - Use case interfaces
pub mod sbom_harvest_port;

pub use sbom_harvest_port::SbomHarvestPort;
