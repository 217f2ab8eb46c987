//! Whole-store persistent state.
//!
//! # Responsibility
//! - Define the single record shape that is serialized to storage and
//!   restored verbatim on next load.
//!
//! # Invariants
//! - `current_year` always has an entry in `tier_lists_by_year`; the store
//!   self-heals the entry on first reference.

use crate::model::collection::YearCollection;
use crate::model::theme::Theme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The entire engine state: every year's collection, the selected year and
/// the active theme.
///
/// Year keys map in a `BTreeMap` so serialization order and year listing
/// stay deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    /// One collection per seen year, keyed by four-digit year string.
    pub tier_lists_by_year: BTreeMap<String, YearCollection>,
    /// The year the user is currently looking at.
    pub current_year: String,
    /// Active visual theme. Last write wins.
    pub active_theme: Theme,
}

impl StoreState {
    /// Creates the default first-launch state: one seeded collection for
    /// `initial_year`, selected, with the default theme.
    pub fn seeded(initial_year: impl Into<String>) -> Self {
        let current_year = initial_year.into();
        let mut tier_lists_by_year = BTreeMap::new();
        tier_lists_by_year.insert(current_year.clone(), YearCollection::seeded());
        Self {
            tier_lists_by_year,
            current_year,
            active_theme: Theme::default(),
        }
    }

    /// All known year keys, newest first, for year-picker display.
    pub fn years_newest_first(&self) -> Vec<&str> {
        self.tier_lists_by_year
            .keys()
            .rev()
            .map(String::as_str)
            .collect()
    }

    /// Collection for the currently selected year.
    ///
    /// `None` only for states built outside the store (the store itself
    /// keeps the entry alive).
    pub fn current_collection(&self) -> Option<&YearCollection> {
        self.tier_lists_by_year.get(&self.current_year)
    }
}
