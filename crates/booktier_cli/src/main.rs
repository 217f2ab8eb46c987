//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `booktier_core` wiring end to
//!   end against a throwaway in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use booktier_core::db::open_db_in_memory;
use booktier_core::{MoveTarget, SqliteStateRepository, TierListStore};

fn main() {
    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("booktier_core db error: {err}");
            std::process::exit(1);
        }
    };

    let repo = SqliteStateRepository::new(&conn);
    let mut store = TierListStore::open(repo, "2024");

    let book_id = store.add_book("Smoke test", None, None);
    store.move_book(book_id, MoveTarget::Tier("s-tier".to_string()));

    let placed = store
        .current_collection()
        .map(|collection| collection.book_count())
        .unwrap_or(0);

    println!("booktier_core version={}", booktier_core::core_version());
    println!("current_year={} books={placed}", store.current_year());
}
