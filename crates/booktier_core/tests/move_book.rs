use booktier_core::db::open_db_in_memory;
use booktier_core::{MoveTarget, SqliteStateRepository, TierListStore, YearCollection};
use rusqlite::Connection;
use std::collections::HashSet;
use uuid::Uuid;

fn open_store(conn: &Connection) -> TierListStore<SqliteStateRepository<'_>> {
    TierListStore::open(SqliteStateRepository::new(conn), "2024")
}

fn current<'store>(
    store: &'store TierListStore<SqliteStateRepository<'_>>,
) -> &'store YearCollection {
    store.current_collection().expect("current collection")
}

fn assert_partition(collection: &YearCollection) {
    let mut seen = HashSet::new();
    for book in &collection.palette_books {
        assert!(seen.insert(book.id), "book {} appears twice", book.id);
    }
    for tier in &collection.tiers {
        for book in &tier.books {
            assert!(seen.insert(book.id), "book {} appears twice", book.id);
        }
    }
}

#[test]
fn seeded_scenario_add_move_delete() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let tier_ids: Vec<&str> = current(&store)
        .tiers
        .iter()
        .map(|tier| tier.id.as_str())
        .collect();
    assert_eq!(tier_ids, ["s-tier", "a-tier", "b-tier"]);
    assert!(current(&store).palette_books.is_empty());

    let dune = store.add_book("Dune", None, None);
    assert_eq!(current(&store).palette_books.len(), 1);
    assert_eq!(current(&store).palette_books[0].title, "Dune");

    store.move_book(dune, MoveTarget::Tier("s-tier".to_string()));
    assert!(current(&store).palette_books.is_empty());
    let s_tier = current(&store).tier("s-tier").unwrap();
    assert_eq!(s_tier.books.len(), 1);
    assert_eq!(s_tier.books[0].title, "Dune");

    store.delete_tier("s-tier");
    let collection = current(&store);
    let tier_ids: Vec<&str> = collection.tiers.iter().map(|tier| tier.id.as_str()).collect();
    assert_eq!(tier_ids, ["a-tier", "b-tier"]);
    assert_eq!(collection.palette_books.len(), 1);
    assert_eq!(collection.palette_books[0].title, "Dune");
    assert_partition(collection);
}

#[test]
fn round_trip_preserves_fields_and_other_books() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let first = store.add_book(
        "Solaris",
        Some("data:image/png;base64,AAAA".to_string()),
        Some("ocean planet".to_string()),
    );
    let second = store.add_book("Roadside Picnic", None, None);
    let original = current(&store).palette_books[1].clone();
    assert_eq!(original.id, first);

    store.move_book(first, MoveTarget::Tier("a-tier".to_string()));
    assert_eq!(current(&store).palette_books.len(), 1);
    assert_eq!(current(&store).palette_books[0].id, second);

    store.move_book(first, MoveTarget::Palette);
    let collection = current(&store);
    // The moved book comes back at the palette end, fields untouched.
    assert_eq!(collection.palette_books.len(), 2);
    assert_eq!(collection.palette_books[0].id, second);
    assert_eq!(collection.palette_books[1], original);
    assert!(collection.tier("a-tier").unwrap().books.is_empty());
    assert_partition(collection);
}

#[test]
fn stale_tier_target_falls_back_to_palette() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let book_id = store.add_book("Hyperion", None, None);
    store.move_book(book_id, MoveTarget::Tier("nonexistent-id".to_string()));

    let collection = current(&store);
    assert_eq!(collection.palette_books.len(), 1);
    assert_eq!(collection.palette_books[0].id, book_id);
    assert_eq!(collection.book_count(), 1);
    assert_partition(collection);
}

#[test]
fn stale_target_from_tier_source_also_lands_in_palette() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let book_id = store.add_book("Ubik", None, None);
    store.move_book(book_id, MoveTarget::Tier("b-tier".to_string()));
    store.move_book(book_id, MoveTarget::Tier("deleted-tier".to_string()));

    let collection = current(&store);
    assert!(collection.tier("b-tier").unwrap().books.is_empty());
    assert_eq!(collection.palette_books.len(), 1);
    assert_eq!(collection.palette_books[0].id, book_id);
}

#[test]
fn unknown_book_id_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    store.add_book("Neuromancer", None, None);
    let before = store.state().clone();

    store.move_book(Uuid::new_v4(), MoveTarget::Palette);
    assert_eq!(store.state(), &before);

    store.move_book(Uuid::new_v4(), MoveTarget::Tier("s-tier".to_string()));
    assert_eq!(store.state(), &before);
}

#[test]
fn move_between_tiers_appends_to_target_end() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let first = store.add_book("Foundation", None, None);
    let second = store.add_book("Dune", None, None);
    store.move_book(first, MoveTarget::Tier("a-tier".to_string()));
    store.move_book(second, MoveTarget::Tier("b-tier".to_string()));
    store.move_book(first, MoveTarget::Tier("b-tier".to_string()));

    let collection = current(&store);
    assert!(collection.tier("a-tier").unwrap().books.is_empty());
    let b_tier_ids: Vec<_> = collection
        .tier("b-tier")
        .unwrap()
        .books
        .iter()
        .map(|book| book.id)
        .collect();
    assert_eq!(b_tier_ids, [second, first]);
    assert_partition(collection);
}

#[test]
fn move_within_palette_reorders_to_end() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let first = store.add_book("A Fire Upon the Deep", None, None);
    let second = store.add_book("Blindsight", None, None);
    // Newest-first palette: [second, first].
    store.move_book(second, MoveTarget::Palette);

    let ids: Vec<_> = current(&store).palette_books.iter().map(|book| book.id).collect();
    assert_eq!(ids, [first, second]);
}

#[test]
fn partition_invariant_holds_across_mixed_operations() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let books: Vec<_> = (0..6)
        .map(|index| store.add_book(format!("Book {index}"), None, None))
        .collect();
    store.move_book(books[0], MoveTarget::Tier("s-tier".to_string()));
    store.move_book(books[1], MoveTarget::Tier("s-tier".to_string()));
    store.move_book(books[2], MoveTarget::Tier("a-tier".to_string()));
    let extra_tier = store.add_tier();
    store.move_book(books[3], MoveTarget::Tier(extra_tier.clone()));
    store.move_book(books[0], MoveTarget::Tier(extra_tier));
    store.move_book(books[4], MoveTarget::Tier("gone".to_string()));
    store.delete_tier("a-tier");
    store.delete_book_permanently(books[5]);

    let collection = current(&store);
    assert_eq!(collection.book_count(), 5);
    assert_partition(collection);
}
