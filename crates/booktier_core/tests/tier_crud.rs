use booktier_core::db::open_db_in_memory;
use booktier_core::{
    MoveTarget, SqliteStateRepository, TierListStore, NEW_TIER_COLOR, NEW_TIER_TITLE,
};
use rusqlite::Connection;

fn open_store(conn: &Connection) -> TierListStore<SqliteStateRepository<'_>> {
    TierListStore::open(SqliteStateRepository::new(conn), "2024")
}

#[test]
fn add_tier_appends_placeholder_row() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let tier_id = store.add_tier();

    let collection = store.current_collection().unwrap();
    assert_eq!(collection.tiers.len(), 4);
    let added = collection.tiers.last().unwrap();
    assert_eq!(added.id, tier_id);
    assert_eq!(added.title, NEW_TIER_TITLE);
    assert_eq!(added.color, NEW_TIER_COLOR);
    assert!(added.books.is_empty());
}

#[test]
fn added_tier_ids_are_unique() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let first = store.add_tier();
    let second = store.add_tier();
    assert_ne!(first, second);
}

#[test]
fn delete_tier_returns_books_to_palette_in_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let stays = store.add_book("Stays unplaced", None, None);
    let first = store.add_book("First shelved", None, None);
    let second = store.add_book("Second shelved", None, None);
    store.move_book(first, MoveTarget::Tier("a-tier".to_string()));
    store.move_book(second, MoveTarget::Tier("a-tier".to_string()));

    let total_before = store.current_collection().unwrap().book_count();
    store.delete_tier("a-tier");

    let collection = store.current_collection().unwrap();
    let tier_ids: Vec<&str> = collection.tiers.iter().map(|tier| tier.id.as_str()).collect();
    assert_eq!(tier_ids, ["s-tier", "b-tier"]);

    // Redistributed books land at the palette end, shelf order preserved.
    let palette_ids: Vec<_> = collection.palette_books.iter().map(|book| book.id).collect();
    assert_eq!(palette_ids, [stays, first, second]);
    assert_eq!(collection.book_count(), total_before);
}

#[test]
fn delete_unknown_tier_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let before = store.state().clone();
    store.delete_tier("no-such-tier");
    assert_eq!(store.state(), &before);
}

#[test]
fn update_tier_title_replaces_matching_tier_only() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    store.update_tier_title("a-tier", "Favorites");

    let collection = store.current_collection().unwrap();
    assert_eq!(collection.tier("a-tier").unwrap().title, "Favorites");
    assert_eq!(collection.tier("s-tier").unwrap().title, "1st place");
}

#[test]
fn update_tier_title_stores_value_as_given() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    // Reverting an empty title to the previous value is the presentation
    // layer's job; the store keeps what it is told.
    store.update_tier_title("a-tier", "");
    let collection = store.current_collection().unwrap();
    assert_eq!(collection.tier("a-tier").unwrap().title, "");
}

#[test]
fn update_tier_color_replaces_matching_tier_only() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    store.update_tier_color("b-tier", "#123456");

    let collection = store.current_collection().unwrap();
    assert_eq!(collection.tier("b-tier").unwrap().color, "#123456");
    assert_eq!(collection.tier("s-tier").unwrap().color, "#ff7f7f");
}

#[test]
fn updates_for_unknown_tier_are_noops() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let before = store.state().clone();
    store.update_tier_title("no-such-tier", "Ghost");
    store.update_tier_color("no-such-tier", "#000000");
    assert_eq!(store.state(), &before);
}
