//! Use-case services for the engine.
//!
//! # Responsibility
//! - Expose the tier-list store mutation surface consumed by UI layers.
//! - Translate raw gesture drop references into move targets.

pub mod drag;
pub mod tier_list_store;
