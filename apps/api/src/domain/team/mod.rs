// Team domain module
// Contains the team aggregate root and its validated creation draft

#![allow(clippy::module_inception)]

pub mod team;

// Re-export main types for convenience
pub use team::{NewTeam, Team};
