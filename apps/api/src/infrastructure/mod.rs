// Infrastructure layer module
// Contains the MongoDB connection and repository adapters

pub mod mongo;
pub mod repositories;
