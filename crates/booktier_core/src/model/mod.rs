//! Domain model for multi-year tier-list collections.
//!
//! # Responsibility
//! - Define the canonical data shapes: books, tiers, year collections, and
//!   the whole-store state.
//! - Own the pure placement operations (move, delete, tier dissolve) that
//!   keep the partition invariant intact.
//!
//! # Invariants
//! - A book id appears in at most one list (palette or one tier) within its
//!   year collection.
//! - Year collections are fully independent of one another.

pub mod book;
pub mod collection;
pub mod color;
pub mod state;
pub mod theme;
pub mod tier;
pub mod year;
