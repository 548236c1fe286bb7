// Domain layer module exports
// Entities and repository contracts, independent of MongoDB and HTTP

pub mod errors;
pub mod player;
pub mod repositories;
pub mod team;
