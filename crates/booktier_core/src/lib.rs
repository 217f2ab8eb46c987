//! Core state engine for the book tier-list application.
//! This crate is the single source of truth for placement invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::book::{Book, BookId};
pub use model::collection::{BookLocation, MoveTarget, YearCollection};
pub use model::color::is_color_light;
pub use model::state::StoreState;
pub use model::theme::Theme;
pub use model::tier::{Tier, TierId, NEW_TIER_COLOR, NEW_TIER_TITLE};
pub use model::year::is_valid_year_key;
pub use repo::state_repo::{
    RepoError, RepoResult, SqliteStateRepository, StateRepository, STORE_RECORD_NAME,
};
pub use service::drag::{resolve_drop, DropRef};
pub use service::tier_list_store::TierListStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
