//! Tier domain model.
//!
//! # Responsibility
//! - Define the named, colored ranking row and its book list.
//!
//! # Invariants
//! - `id` is stable for the tier lifetime. Seed tiers carry fixed well-known
//!   ids; user-created tiers get generated ids.
//! - `books` keeps append order; the row itself is the rank, not the
//!   position inside it.

use crate::model::book::{Book, BookId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable tier identifier.
///
/// A string rather than a bare uuid so the fixed seed ids (`s-tier`,
/// `a-tier`, `b-tier`) and generated ids share one representation.
pub type TierId = String;

/// Placeholder title for a freshly added tier.
pub const NEW_TIER_TITLE: &str = "New tier";

/// Default color for a freshly added tier.
pub const NEW_TIER_COLOR: &str = "#cccccc";

/// A named, colored row holding an ordered set of books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Stable tier id.
    pub id: TierId,
    /// User-facing row label.
    pub title: String,
    /// Hex row color, also used for the light/dark text contrast decision.
    pub color: String,
    /// Books placed on this row, in append order.
    pub books: Vec<Book>,
}

impl Tier {
    /// Creates an empty tier with explicit id, title and color.
    pub fn with_parts(
        id: impl Into<TierId>,
        title: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            books: Vec::new(),
        }
    }

    /// Creates an empty tier with a generated id, placeholder title and
    /// default color.
    pub fn placeholder() -> Self {
        Self::with_parts(Uuid::new_v4().to_string(), NEW_TIER_TITLE, NEW_TIER_COLOR)
    }

    /// Returns whether this tier currently holds the given book id.
    pub fn contains_book(&self, book_id: BookId) -> bool {
        self.books.iter().any(|book| book.id == book_id)
    }
}
