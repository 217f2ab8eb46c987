//! Visual theme identifiers.
//!
//! # Responsibility
//! - Enumerate the fixed theme set and its string round-trip for the UI
//!   boundary.
//!
//! # Invariants
//! - Unknown theme strings are rejected at the boundary; the store only
//!   ever holds a valid variant.

use serde::{Deserialize, Serialize};

/// Fixed set of background themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Library backdrop. The first-launch default.
    #[default]
    Library,
    Flowers,
    City,
    Sand,
    Dark,
    Light,
}

impl Theme {
    /// All selectable themes, in switcher display order.
    pub const fn all() -> &'static [Theme] {
        &[
            Self::Library,
            Self::Flowers,
            Self::City,
            Self::Sand,
            Self::Dark,
            Self::Light,
        ]
    }

    /// Stable identifier used in persisted state and UI wiring.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Flowers => "flowers",
            Self::City => "city",
            Self::Sand => "sand",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parses a theme identifier, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "library" => Some(Self::Library),
            "flowers" => Some(Self::Flowers),
            "city" => Some(Self::City),
            "sand" => Some(Self::Sand),
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}
