/// Harvesting domain - release feed model, cutoff and retry rules, metadata identity
pub mod domain;
pub mod policies;
pub mod services;
