//! Persistence repositories for the engine.
//!
//! # Responsibility
//! - Keep storage details (SQL, serialization format) behind stable
//!   repository contracts.

pub mod state_repo;
