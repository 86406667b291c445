//! End-to-end cart behaviour: mutations, totals, persistence, notifications.

use std::cell::RefCell;
use std::rc::Rc;

use dhingra_cache::{Cache, FileStore, KvStore, MemoryStore};
use dhingra_commerce::cart::DEFAULT_CART_KEY;
use dhingra_commerce::prelude::*;

const FIXTURE: &str = include_str!("fixtures/catalog.json");

fn catalog() -> Catalog {
    Catalog::from_json(FIXTURE).unwrap()
}

type Inbox = Rc<RefCell<Vec<Notification>>>;

fn recording_store(backing: &MemoryStore) -> (CartStore, Inbox) {
    let inbox: Inbox = Rc::default();
    let sink = Rc::clone(&inbox);
    let store = CartStore::open(Cache::new(backing.clone()), move |n: Notification| {
        sink.borrow_mut().push(n)
    });
    (store, inbox)
}

fn rupees(amount: i64) -> Money {
    Money::from_major(amount, Currency::INR)
}

#[test]
fn test_distinct_keys_accumulate_per_line() {
    let catalog = catalog();
    let saree = catalog.require_product(ProductId::new(1)).unwrap();
    let suit = catalog.require_product(ProductId::new(2)).unwrap();
    let mut store = CartStore::open(Cache::in_memory(), NoopNotifier);

    store.add(saree, 1, Some("Red"), None);
    store.add(suit, 2, Some("Blue"), Some("M"));
    store.add(saree, 2, Some("Red"), None);
    store.add(suit, 1, Some("Blue"), Some("L"));
    store.add(suit, 3, Some("Blue"), Some("M"));

    assert_eq!(store.lines().len(), 3);
    let quantity = |id: u32, color: &str, size: Option<&str>| {
        store
            .line(&LineKey::new(ProductId::new(id), Some(color), size))
            .map(|l| l.quantity)
    };
    assert_eq!(quantity(1, "Red", None), Some(3));
    assert_eq!(quantity(2, "Blue", Some("M")), Some(5));
    assert_eq!(quantity(2, "Blue", Some("L")), Some(1));
    assert_eq!(store.total_items(), 9);
}

#[test]
fn test_repeat_add_merges() {
    let catalog = catalog();
    let lehenga = catalog.require_product(ProductId::new(8)).unwrap();
    let (mut store, inbox) = recording_store(&MemoryStore::new());

    store.add(lehenga, 2, Some("Red"), Some("M"));
    store.add(lehenga, 3, Some("Red"), Some("M"));

    assert_eq!(store.lines().len(), 1);
    assert_eq!(store.lines()[0].quantity, 5);

    let inbox = inbox.borrow();
    assert_eq!(inbox[0].description, "Bridal Lehenga added to your cart.");
    assert_eq!(inbox[1].title, "Cart updated");
    assert_eq!(inbox[1].description, "Bridal Lehenga quantity updated in your cart.");
}

#[test]
fn test_set_quantity_zero_clamps_every_variant() {
    let catalog = catalog();
    let kurta = catalog.require_product(ProductId::new(4)).unwrap();
    let (mut store, inbox) = recording_store(&MemoryStore::new());

    store.add(kurta, 3, Some("White"), Some("M"));
    store.add(kurta, 4, Some("Beige"), Some("L"));
    store.set_quantity(ProductId::new(4), 0);

    assert_eq!(store.lines().len(), 2);
    assert!(store.lines().iter().all(|l| l.quantity == 1));
    assert_eq!(store.total_items(), 2);
    // Quantity changes are silent.
    assert_eq!(inbox.borrow().len(), 2);
}

#[test]
fn test_remove_drops_all_variants() {
    let catalog = catalog();
    let saree = catalog.require_product(ProductId::new(6)).unwrap();
    let fabric = catalog.require_product(ProductId::new(5)).unwrap();
    let (mut store, inbox) = recording_store(&MemoryStore::new());

    store.add(saree, 1, Some("Teal"), None);
    store.add(saree, 1, Some("Peach"), None);
    store.add(fabric, 2, Some("Gold"), Some("2 meters"));
    store.remove(ProductId::new(6));

    assert_eq!(store.lines().len(), 1);
    assert_eq!(store.lines()[0].product_id(), ProductId::new(5));

    let last = inbox.borrow().last().cloned().unwrap();
    assert_eq!(last, Notification::new("Item removed", "Item removed from your cart."));
}

#[test]
fn test_remove_missing_product_still_notifies() {
    let (mut store, inbox) = recording_store(&MemoryStore::new());
    store.remove(ProductId::new(3));
    assert!(store.is_empty());
    assert_eq!(inbox.borrow().len(), 1);
}

#[test]
fn test_total_price_uses_discount() {
    let product = Product::new(ProductId::new(10), "Test Dupatta", rupees(1000), CategoryId::new(5))
        .with_discount(10);
    let mut store = CartStore::open(Cache::in_memory(), NoopNotifier);

    store.add(&product, 4, None, None);
    assert_eq!(store.total_price(), rupees(3600));
    assert_eq!(store.total_price().to_string(), "₹3,600.00");
}

#[test]
fn test_clear_resets_totals() {
    let catalog = catalog();
    let (mut store, inbox) = recording_store(&MemoryStore::new());
    for product in catalog.featured_products() {
        store.add(product, 1, None, None);
    }
    assert_eq!(store.total_items(), 5);

    store.clear();
    assert_eq!(store.total_items(), 0);
    assert!(store.total_price().is_zero());

    let last = inbox.borrow().last().cloned().unwrap();
    assert_eq!(last.title, "Cart cleared");
    assert_eq!(last.description, "All items have been removed from your cart.");
}

#[test]
fn test_reload_reproduces_lines() {
    let catalog = catalog();
    let backing = MemoryStore::new();
    let (mut store, _) = recording_store(&backing);

    store.add(catalog.require_product(ProductId::new(3)).unwrap(), 1, Some("Pink"), Some("S"));
    store.add(catalog.require_product(ProductId::new(2)).unwrap(), 2, Some("Green"), None);
    store.add(catalog.require_product(ProductId::new(5)).unwrap(), 3, None, Some("5 meters"));

    let (reloaded, inbox) = recording_store(&backing);
    assert_eq!(reloaded.lines(), store.lines());
    assert_eq!(reloaded.totals(), store.totals());
    // Hydration is silent.
    assert!(inbox.borrow().is_empty());
}

#[test]
fn test_corrupt_snapshot_starts_empty() {
    let backing = MemoryStore::new();
    backing.set(DEFAULT_CART_KEY, b"not json at all").unwrap();

    let (mut store, _) = recording_store(&backing);
    assert!(store.is_empty());
    assert_eq!(store.total_items(), 0);

    // The next mutation overwrites the bad snapshot.
    let catalog = catalog();
    store.add(catalog.require_product(ProductId::new(1)).unwrap(), 1, None, None);
    let (reloaded, _) = recording_store(&backing);
    assert_eq!(reloaded.total_items(), 1);
}

#[test]
fn test_snapshot_holds_product_copy() {
    let backing = MemoryStore::new();
    let mut product = Product::new(
        ProductId::new(1),
        "Banarasi Silk Saree",
        rupees(15000),
        CategoryId::new(1),
    );
    let (mut store, _) = recording_store(&backing);
    store.add(&product, 1, None, None);

    // Later catalog edits do not reach lines already in the cart.
    product.price = rupees(1);
    let (reloaded, _) = recording_store(&backing);
    assert_eq!(reloaded.total_price(), rupees(15000));
    assert_ne!(reloaded.lines()[0].product, product);
}

#[test]
fn test_file_backed_cart_survives_restart() {
    let dir = std::env::temp_dir().join(format!("dhingra-cart-store-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let catalog = catalog();

    {
        let mut store = CartStore::open(Cache::open_dir(&dir).unwrap(), NoopNotifier);
        let suit = catalog.require_product(ProductId::new(7)).unwrap();
        store.add(suit, 2, Some("Burgundy"), Some("M"));
    }

    let store = CartStore::open(Cache::new(FileStore::open(&dir).unwrap()), NoopNotifier);
    assert_eq!(store.total_items(), 2);
    assert_eq!(store.total_price(), rupees(24000));
    assert_eq!(store.lines()[0].variant_label().as_deref(), Some("Burgundy / M"));

    let summary = store.summary(&ShippingPolicy::default());
    assert!(summary.ships_free());
    assert_eq!(summary.grand_total, rupees(24000));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_summary_charges_flat_fee_at_threshold() {
    let product = Product::new(ProductId::new(20), "Dupatta", rupees(2500), CategoryId::new(5));
    let mut store = CartStore::open(Cache::in_memory(), NoopNotifier);
    store.add(&product, 2, None, None);

    let summary = store.summary(&ShippingPolicy::default());
    assert_eq!(summary.subtotal, rupees(5000));
    assert_eq!(summary.shipping, rupees(250));
    assert_eq!(summary.grand_total, rupees(5250));
}
