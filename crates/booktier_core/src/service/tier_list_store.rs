//! Tier-list store: the authoritative mutable state container.
//!
//! # Responsibility
//! - Own the in-memory store state and expose every mutation operation.
//! - Save state through the repository after each effective mutation.
//!
//! # Invariants
//! - `current_year` always has a collection entry (auto-created on first
//!   reference).
//! - Unknown book/tier references resolve as silent no-ops, never errors;
//!   UI events can race with state changes and must not fail loudly.
//! - Persistence failure never rolls back or aborts a mutation; in-memory
//!   state stays authoritative and the next successful save catches
//!   durability up.

use crate::model::book::{Book, BookId};
use crate::model::collection::{MoveTarget, YearCollection};
use crate::model::state::StoreState;
use crate::model::theme::Theme;
use crate::model::tier::{Tier, TierId};
use crate::repo::state_repo::StateRepository;
use log::{info, warn};

/// Single-user tier-list state engine over a state repository.
///
/// All mutations run synchronously to completion on `&mut self`, so every
/// operation is atomic relative to observers: no intermediate placement is
/// ever visible.
pub struct TierListStore<R: StateRepository> {
    state: StoreState,
    repo: R,
}

impl<R: StateRepository> TierListStore<R> {
    /// Opens the store from persisted state.
    ///
    /// A missing or unreadable record seeds a fresh single-year state for
    /// `initial_year` instead of failing; which year is "now" is a caller
    /// concern, like all input validation.
    pub fn open(repo: R, initial_year: impl Into<String>) -> Self {
        let state = match repo.load_state() {
            Ok(Some(state)) => state,
            Ok(None) => {
                info!("event=state_load module=store status=ok outcome=seeded");
                StoreState::seeded(initial_year)
            }
            Err(err) => {
                warn!("event=state_load module=store status=error outcome=seeded error={err}");
                StoreState::seeded(initial_year)
            }
        };
        let mut store = Self { state, repo };
        store.ensure_current_collection();
        store
    }

    /// Read-only snapshot of the whole state for rendering.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Currently selected year key.
    pub fn current_year(&self) -> &str {
        &self.state.current_year
    }

    /// Active visual theme.
    pub fn active_theme(&self) -> Theme {
        self.state.active_theme
    }

    /// Collection for the currently selected year.
    pub fn current_collection(&self) -> Option<&YearCollection> {
        self.state.current_collection()
    }

    /// Switches the selected year, seeding a collection first when the year
    /// has not been seen before. Existing collections are never overwritten.
    pub fn select_year(&mut self, year: impl Into<String>) {
        let year = year.into();
        self.state
            .tier_lists_by_year
            .entry(year.clone())
            .or_insert_with(YearCollection::seeded);
        self.state.current_year = year;
        self.persist();
    }

    /// Explicitly creates a seeded collection for `year` without switching
    /// to it. Blank or already-present years are left untouched.
    pub fn create_year(&mut self, year: &str) {
        if year.trim().is_empty() || self.state.tier_lists_by_year.contains_key(year) {
            return;
        }
        self.state
            .tier_lists_by_year
            .insert(year.to_string(), YearCollection::seeded());
        self.persist();
    }

    /// Adds a new book to the front of the current year's palette and
    /// returns its generated id.
    ///
    /// Title emptiness is the caller's responsibility to reject.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        image_base64: Option<String>,
        description: Option<String>,
    ) -> BookId {
        let mut book = Book::new(title);
        book.image_base64 = image_base64;
        book.description = description;
        let book_id = book.id;
        self.current_mut().palette_books.insert(0, book);
        self.persist();
        book_id
    }

    /// Irreversibly removes the book from whichever list of the current
    /// year holds it. Unknown ids and other years' books are untouched.
    pub fn delete_book_permanently(&mut self, book_id: BookId) {
        if self.current_mut().remove_book(book_id).is_some() {
            self.persist();
        }
    }

    /// Appends a placeholder tier to the current year and returns its id.
    pub fn add_tier(&mut self) -> TierId {
        let tier = Tier::placeholder();
        let tier_id = tier.id.clone();
        self.current_mut().tiers.push(tier);
        self.persist();
        tier_id
    }

    /// Removes a tier after returning its books to the palette.
    /// Unknown tier ids are a no-op; books are never silently dropped.
    pub fn delete_tier(&mut self, tier_id: &str) {
        if self.current_mut().delete_tier(tier_id) {
            self.persist();
        }
    }

    /// Replaces the title of the matching tier; no-op when unknown.
    ///
    /// Empty-title fallback to the previous value is a presentation
    /// concern; the store saves the title as given.
    pub fn update_tier_title(&mut self, tier_id: &str, new_title: impl Into<String>) {
        if let Some(tier) = self.current_mut().tier_mut(tier_id) {
            tier.title = new_title.into();
            self.persist();
        }
    }

    /// Replaces the color of the matching tier; no-op when unknown.
    pub fn update_tier_color(&mut self, tier_id: &str, new_color: impl Into<String>) {
        if let Some(tier) = self.current_mut().tier_mut(tier_id) {
            tier.color = new_color.into();
            self.persist();
        }
    }

    /// Relocates one book within the current year.
    ///
    /// See [`YearCollection::move_book`] for source lookup, ordering and
    /// stale-target fallback semantics.
    pub fn move_book(&mut self, book_id: BookId, target: MoveTarget) {
        if self.current_mut().move_book(book_id, target) {
            self.persist();
        }
    }

    /// Assigns the active theme. Last write wins.
    pub fn set_theme(&mut self, theme: Theme) {
        self.state.active_theme = theme;
        self.persist();
    }

    fn ensure_current_collection(&mut self) {
        // A record written by hand could name a year with no entry; heal it
        // here so every later access can rely on the invariant.
        let year = self.state.current_year.clone();
        self.state
            .tier_lists_by_year
            .entry(year)
            .or_insert_with(YearCollection::seeded);
    }

    fn current_mut(&mut self) -> &mut YearCollection {
        let year = self.state.current_year.clone();
        self.state
            .tier_lists_by_year
            .entry(year)
            .or_insert_with(YearCollection::seeded)
    }

    fn persist(&self) {
        if let Err(err) = self.repo.save_state(&self.state) {
            warn!("event=state_save module=store status=error error={err}");
        }
    }
}
