// Player domain module
// Contains the persisted player entity and its validated creation draft

#![allow(clippy::module_inception)]

pub mod player;

pub use player::{NewPlayer, Player};
