//! Drop-target resolution for drag-end events.
//!
//! # Responsibility
//! - Translate the gesture layer's raw drop reference into a move target
//!   for the store. Hit-testing stays outside; the container decision made
//!   here is engine policy.
//!
//! # Invariants
//! - A drag that ends over nothing returns the book to the palette, even
//!   when it started on a tier.
//! - A reference to the dragged book itself never produces a move.
//! - Container destination only: dropping on a sibling book targets that
//!   book's container, never an index inside it.

use crate::model::book::BookId;
use crate::model::collection::{MoveTarget, YearCollection};
use crate::model::tier::TierId;

/// Raw drop reference as reported by the gesture layer at drag end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropRef {
    /// Pointer released over a tier container.
    Tier(TierId),
    /// Pointer released over the palette container.
    Palette,
    /// Pointer released over another book card.
    Book(BookId),
}

/// Resolves a drag-end event into a move target.
///
/// Returns `None` when no move should happen: the drop landed on the
/// dragged book itself, or on a book the collection no longer knows.
pub fn resolve_drop(
    collection: &YearCollection,
    dragged: BookId,
    over: Option<DropRef>,
) -> Option<MoveTarget> {
    let Some(over) = over else {
        // Drag-cancel-to-palette: no valid drop target at all.
        return Some(MoveTarget::Palette);
    };

    match over {
        DropRef::Tier(tier_id) => Some(MoveTarget::Tier(tier_id)),
        DropRef::Palette => Some(MoveTarget::Palette),
        DropRef::Book(over_id) if over_id == dragged => None,
        DropRef::Book(over_id) => collection.locate_book(over_id).map(MoveTarget::from),
    }
}
