//! Book domain model.
//!
//! # Responsibility
//! - Define the ranked item record shared by palette and tier containers.
//!
//! # Invariants
//! - `id` is stable and never reused for another book.
//! - Field values travel verbatim across container moves; only membership
//!   changes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every book in a year collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = Uuid;

/// A single ranked item with title, optional cover image, optional
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable global ID used for drag references and delete targeting.
    pub id: BookId,
    /// Display text. Emptiness is rejected at the input boundary, not here.
    pub title: String,
    /// Inline-encoded cover image blob. Opaque to the engine.
    pub image_base64: Option<String>,
    /// Free-form description text.
    pub description: Option<String>,
}

impl Book {
    /// Creates a new book with a generated stable ID and no optional fields.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            image_base64: None,
            description: None,
        }
    }
}
