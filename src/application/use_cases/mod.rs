/// Use cases module containing application business logic orchestration
mod harvest_sboms;

pub use harvest_sboms::HarvestSbomsUseCase;
