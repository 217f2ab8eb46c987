//! Year collection: tiers plus palette for one ranking year.
//!
//! # Responsibility
//! - Own the pure placement operations applied by the store to the
//!   currently selected year.
//! - Seed new collections with the default three-tier layout.
//!
//! # Invariants
//! - Tiers and palette together partition all books of the year: no
//!   duplication, no orphaning.
//! - A move either relocates the book or leaves the collection untouched;
//!   a book is never dropped on the floor, even for stale tier targets.

use crate::model::book::{Book, BookId};
use crate::model::tier::{Tier, TierId};
use serde::{Deserialize, Serialize};

/// The container currently holding a located book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookLocation {
    /// The unplaced-books holding area.
    Palette,
    /// A ranking row, by id.
    Tier(TierId),
}

/// Destination for a move operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move to the end of the palette.
    Palette,
    /// Move to the end of the given tier's book list.
    Tier(TierId),
}

impl From<BookLocation> for MoveTarget {
    fn from(value: BookLocation) -> Self {
        match value {
            BookLocation::Palette => Self::Palette,
            BookLocation::Tier(tier_id) => Self::Tier(tier_id),
        }
    }
}

/// Tiers and palette for one ranking year, isolated from other years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCollection {
    /// Ranking rows, top rank first.
    pub tiers: Vec<Tier>,
    /// Unplaced books, most recently added first.
    pub palette_books: Vec<Book>,
}

impl YearCollection {
    /// Creates the default layout for a new year: three fixed-id tiers and
    /// an empty palette.
    pub fn seeded() -> Self {
        Self {
            tiers: vec![
                Tier::with_parts("s-tier", "1st place", "#ff7f7f"),
                Tier::with_parts("a-tier", "2nd place", "#ffbf7f"),
                Tier::with_parts("b-tier", "3rd place", "#ffff7f"),
            ],
            palette_books: Vec::new(),
        }
    }

    /// Returns the tier with the given id, if present.
    pub fn tier(&self, tier_id: &str) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.id == tier_id)
    }

    /// Returns the tier with the given id for mutation, if present.
    pub fn tier_mut(&mut self, tier_id: &str) -> Option<&mut Tier> {
        self.tiers.iter_mut().find(|tier| tier.id == tier_id)
    }

    /// Finds which container currently holds the given book.
    ///
    /// The palette is checked first, then each tier in row order.
    pub fn locate_book(&self, book_id: BookId) -> Option<BookLocation> {
        if self.palette_books.iter().any(|book| book.id == book_id) {
            return Some(BookLocation::Palette);
        }
        self.tiers
            .iter()
            .find(|tier| tier.contains_book(book_id))
            .map(|tier| BookLocation::Tier(tier.id.clone()))
    }

    /// Returns whether any container of this year holds the given book.
    pub fn contains_book(&self, book_id: BookId) -> bool {
        self.locate_book(book_id).is_some()
    }

    /// Total number of books across palette and all tiers.
    pub fn book_count(&self) -> usize {
        self.palette_books.len() + self.tiers.iter().map(|tier| tier.books.len()).sum::<usize>()
    }

    /// Removes the book from whichever list holds it and returns it.
    ///
    /// Relative order of the remaining books is preserved.
    pub fn remove_book(&mut self, book_id: BookId) -> Option<Book> {
        if let Some(index) = self.palette_books.iter().position(|book| book.id == book_id) {
            return Some(self.palette_books.remove(index));
        }
        for tier in &mut self.tiers {
            if let Some(index) = tier.books.iter().position(|book| book.id == book_id) {
                return Some(tier.books.remove(index));
            }
        }
        None
    }

    /// Relocates one book to the given target as a single state transition.
    ///
    /// Returns `false` (collection untouched) when the book id is unknown,
    /// which also covers drag events referencing a book deleted mid-gesture.
    /// A target tier id that no longer resolves falls back to the palette.
    pub fn move_book(&mut self, book_id: BookId, target: MoveTarget) -> bool {
        let Some(book) = self.remove_book(book_id) else {
            return false;
        };
        match target {
            MoveTarget::Palette => self.palette_books.push(book),
            MoveTarget::Tier(tier_id) => match self.tier_mut(&tier_id) {
                Some(tier) => tier.books.push(book),
                // Stale tier reference: the book still has to land somewhere.
                None => self.palette_books.push(book),
            },
        }
        true
    }

    /// Removes the tier with the given id after appending its books to the
    /// end of the palette, order preserved.
    ///
    /// Returns `false` (collection untouched) when the tier id is unknown.
    pub fn delete_tier(&mut self, tier_id: &str) -> bool {
        let Some(index) = self.tiers.iter().position(|tier| tier.id == tier_id) else {
            return false;
        };
        let tier = self.tiers.remove(index);
        self.palette_books.extend(tier.books);
        true
    }
}
