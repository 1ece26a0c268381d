//! Integration tests for basket persistence.
//!
//! These tests open a basket against real key-value stores, change it, and
//! reopen it as a fresh process would.

use std::rc::Rc;

use naked_pineapple_basket::Basket;
use naked_pineapple_basket::persistence::{
    FileStore, KeyValueStore, MemoryStore, keys, load_collection,
};
use naked_pineapple_basket::{LineItem, WishlistItem};
use naked_pineapple_integration_tests::{line, pid, saved};
use rust_decimal::Decimal;

fn file_store(dir: &tempfile::TempDir) -> Rc<dyn KeyValueStore> {
    Rc::new(FileStore::open(dir.path()).unwrap())
}

// =============================================================================
// Restart Tests
// =============================================================================

#[test]
fn test_cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut basket = Basket::open(file_store(&dir));
        basket.cart_mut().add_item(line("p1", "10", 1, None));
        basket.cart_mut().add_item(line("p1", "10", 2, None));
        basket.cart_mut().add_item(line("p2", "4.25", 1, Some("red")));
    }

    let basket = Basket::open(file_store(&dir));
    assert_eq!(basket.cart().len(), 2);
    assert_eq!(basket.cart().total_item_count(), 4);
    assert_eq!(basket.cart().total_price(), Decimal::new(3425, 2));
    assert_eq!(
        basket.cart().items()[1].selected_color.as_ref().map(|c| c.as_str()),
        Some("red")
    );
}

#[test]
fn test_wishlist_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut basket = Basket::open(file_store(&dir));
        basket.wishlist_mut().add_item(saved("w1", "Hat", "15"));
        basket.wishlist_mut().add_item(saved("w2", "Scarf", "22"));
        basket.wishlist_mut().remove_item(&pid("w2"));
    }

    let basket = Basket::open(file_store(&dir));
    assert!(basket.wishlist().contains(&pid("w1")));
    assert!(!basket.wishlist().contains(&pid("w2")));
}

#[test]
fn test_stores_use_separate_keys() {
    let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
    let mut basket = Basket::open(Rc::clone(&store));
    basket.cart_mut().add_item(line("p1", "10", 1, None));

    assert!(store.get(keys::CART).unwrap().is_some());
    assert!(store.get(keys::WISHLIST).unwrap().is_none());

    basket.wishlist_mut().add_item(saved("w1", "Hat", "15"));
    let wishlist: Vec<WishlistItem> = load_collection(&*store, keys::WISHLIST);
    assert_eq!(wishlist.len(), 1);
}

// =============================================================================
// Clear Tests
// =============================================================================

#[test]
fn test_clear_persists_empty_representation() {
    let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
    let mut basket = Basket::open(Rc::clone(&store));
    basket.cart_mut().add_item(line("p1", "10", 1, None));
    basket.wishlist_mut().add_item(saved("w1", "Hat", "15"));

    basket.cart_mut().clear();
    basket.wishlist_mut().clear();

    assert!(basket.cart().is_empty());
    assert!(basket.wishlist().is_empty());

    let cart_blob: serde_json::Value =
        serde_json::from_str(&store.get(keys::CART).unwrap().unwrap()).unwrap();
    assert_eq!(cart_blob["items"], serde_json::json!([]));
    assert!(load_collection::<LineItem>(&*store, keys::CART).is_empty());
    assert!(load_collection::<WishlistItem>(&*store, keys::WISHLIST).is_empty());
}

#[test]
fn test_checkout_clears_persisted_cart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut basket = Basket::open(file_store(&dir));
        basket.cart_mut().add_item(line("p1", "10", 2, None));
        basket.wishlist_mut().add_item(saved("w1", "Hat", "15"));
        basket.complete_checkout();
    }

    let basket = Basket::open(file_store(&dir));
    assert!(basket.cart().is_empty());
    assert_eq!(basket.wishlist().len(), 1);
}

// =============================================================================
// Corrupt Data Tests
// =============================================================================

#[test]
fn test_corrupt_blob_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "not json at all").unwrap();
    std::fs::write(
        dir.path().join("wishlist.json"),
        r#"{"version":99,"items":[]}"#,
    )
    .unwrap();

    let mut basket = Basket::open(file_store(&dir));
    assert!(basket.cart().is_empty());
    assert!(basket.wishlist().is_empty());

    // The next change overwrites the corrupt blob.
    basket.cart_mut().add_item(line("p1", "10", 1, None));
    let reopened = Basket::open(file_store(&dir));
    assert_eq!(reopened.cart().total_item_count(), 1);
}

#[test]
fn test_stored_duplicates_are_merged_on_load() {
    let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
    store
        .set(
            keys::CART,
            r#"{"version":1,"items":[
                {"productId":"p1","name":"A","unitPrice":"10","imageUrl":"i","quantity":1},
                {"productId":"p1","name":"B","unitPrice":"12","imageUrl":"i","quantity":2}
            ]}"#,
        )
        .unwrap();

    let basket = Basket::open(store);
    assert_eq!(basket.cart().len(), 1);
    assert_eq!(basket.cart().items()[0].name, "A");
    assert_eq!(basket.cart().total_item_count(), 3);
}

// =============================================================================
// Write Failure Tests
// =============================================================================

#[test]
fn test_write_failure_keeps_memory_authoritative() {
    let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::with_quota(16));
    let mut basket = Basket::open(Rc::clone(&store));

    basket.cart_mut().add_item(line("p1", "10", 1, None));
    basket.cart_mut().add_item(line("p1", "10", 1, None));

    assert_eq!(basket.cart().total_item_count(), 2);
    assert!(store.get(keys::CART).unwrap().is_none());
}
