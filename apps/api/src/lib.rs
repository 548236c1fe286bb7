//! Soccer API Library
//!
//! This library provides the core functionality for the Soccer API:
//! team and player entities, their MongoDB repositories, and the HTTP
//! handlers that expose them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
