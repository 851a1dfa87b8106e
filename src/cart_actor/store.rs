//! The cart state machine.
//!
//! [`CartStore`] is the single source of truth for the cart. It keeps the ordered line items,
//! writes them to a [`StorageAdapter`] after every mutation, and pushes the new snapshot and item
//! count to its observers.
//!
//! # Invariants
//!
//! - Every line item has `quantity >= 1`.
//! - At most one line item per product id.
//! - New products are appended; existing items keep their position.
//! - After every operation (including no-ops and the restore in [`CartStore::load`]) the
//!   snapshot is persisted, then published to item observers, then the count is published to
//!   count observers.

use crate::framework::{Observable, Observer, SubscriptionId};
use crate::model::{CartSnapshot, LineItem, Product, ProductId};
use crate::storage::StorageAdapter;
use tracing::{debug, info, warn};

/// Default storage key for the persisted cart.
pub const CART_KEY: &str = "cart_items";

pub struct CartStore {
    items: Vec<LineItem>,
    storage: Box<dyn StorageAdapter>,
    key: String,
    items_observable: Observable<CartSnapshot>,
    count_observable: Observable<u32>,
}

impl CartStore {
    /// Builds a store and restores the cart persisted under `key`.
    ///
    /// A missing or unreadable record yields an empty cart. Any record that was read is
    /// immediately persisted back in canonical form and published, so a corrupt or
    /// all-empty record is replaced by `[]` instead of being re-read on every start.
    pub fn load(storage: Box<dyn StorageAdapter>, key: impl Into<String>) -> Self {
        let key = key.into();
        let restored = read_persisted(storage.as_ref(), &key);

        let mut store = Self {
            items: Vec::new(),
            storage,
            key,
            items_observable: Observable::default(),
            count_observable: Observable::default(),
        };
        if let Some(items) = restored {
            info!(key = %store.key, items = items.len(), "Cart restored");
            store.items = items;
            store.commit();
        }
        store
    }

    /// Adds one unit of `product`, merging with an existing line item for the same id.
    pub fn add(&mut self, product: Product) {
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(LineItem::new(product, 1)),
        }
        self.commit();
    }

    /// Adds one unit to an existing line item. Unknown ids are ignored.
    pub fn increase_quantity(&mut self, id: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == id) {
            item.quantity = item.quantity.saturating_add(1);
        }
        self.commit();
    }

    /// Removes one unit; the line item disappears when its last unit is removed.
    pub fn decrease_quantity(&mut self, id: ProductId) {
        if let Some(pos) = self.position(id) {
            let item = &mut self.items[pos];
            if item.quantity > 1 {
                item.quantity -= 1;
            } else {
                self.items.remove(pos);
            }
        }
        self.commit();
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.items.retain(|item| item.product.id != id);
        self.commit();
    }

    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.commit();
    }

    /// Empties the cart and returns what it held, as one step.
    pub fn take_all(&mut self) -> CartSnapshot {
        let taken = self.snapshot();
        self.clear_cart();
        taken
    }

    /// Owned copy of the current line items.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::new(self.items.clone())
    }

    pub fn item_count(&self) -> u32 {
        *self.count_observable.current()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Subscribes to snapshot changes; the current snapshot is delivered immediately.
    pub fn subscribe_items(&mut self, observer: Observer<CartSnapshot>) -> SubscriptionId {
        self.items_observable.subscribe(observer)
    }

    /// Subscribes to item-count changes; the current count is delivered immediately.
    pub fn subscribe_count(&mut self, observer: Observer<u32>) -> SubscriptionId {
        self.count_observable.subscribe(observer)
    }

    /// Removes a subscription from whichever stream holds it.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.items_observable.unsubscribe(id) || self.count_observable.unsubscribe(id)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product.id == id)
    }

    fn commit(&mut self) {
        let snapshot = self.snapshot();
        let count = snapshot.item_count();
        self.persist(&snapshot);
        self.items_observable.publish(snapshot);
        self.count_observable.publish(count);
        debug!(items = self.items.len(), count, "Cart updated");
    }

    fn persist(&self, snapshot: &CartSnapshot) {
        let raw = match serde_json::to_string(snapshot) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.storage.set_item(&self.key, &raw) {
            warn!(key = %self.key, error = %e, "Failed to persist cart");
        }
    }
}

/// Reads and normalizes the persisted cart.
///
/// Returns `None` when there is nothing to restore (no record, or storage could not be read).
/// A corrupt record restores as an empty cart. Duplicate product ids are merged into the first
/// occurrence and zero-quantity records are dropped, so a hand-edited or older record cannot
/// break the store's invariants.
fn read_persisted(storage: &dyn StorageAdapter, key: &str) -> Option<Vec<LineItem>> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read persisted cart");
            return None;
        }
    };

    let records: Vec<LineItem> = match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(key, error = %e, "Discarding corrupt persisted cart");
            return Some(Vec::new());
        }
    };

    let mut items: Vec<LineItem> = Vec::with_capacity(records.len());
    for record in records.into_iter().filter(|record| record.quantity > 0) {
        match items.iter_mut().find(|item| item.product.id == record.product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(record.quantity),
            None => items.push(record),
        }
    }
    Some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError};
    use std::sync::{Arc, Mutex};

    fn lamp() -> Product {
        Product::new(1, "Lamp", 10.0, 3)
    }

    fn rug() -> Product {
        Product::new(2, "Rug", 25.0, 8)
    }

    fn empty_store() -> (CartStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        (CartStore::load(Box::new(storage.clone()), CART_KEY), storage)
    }

    fn quantities(store: &CartStore) -> Vec<(u32, u32)> {
        store
            .snapshot()
            .items()
            .iter()
            .map(|item| (item.product.id.0, item.quantity))
            .collect()
    }

    struct BrokenStorage;

    impl StorageAdapter for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_add_same_product_twice_merges() {
        let (mut store, _) = empty_store();
        store.add(lamp());
        store.add(lamp());

        assert_eq!(quantities(&store), vec![(1, 2)]);
        assert_eq!(store.item_count(), 2);
    }

    #[test]
    fn test_decrease_to_zero_removes_item() {
        let (mut store, _) = empty_store();
        store.add(lamp());
        store.add(lamp());

        store.decrease_quantity(ProductId(1));
        assert_eq!(quantities(&store), vec![(1, 1)]);

        store.decrease_quantity(ProductId(1));
        assert!(store.snapshot().is_empty());
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_increase_unknown_product_is_noop() {
        let (mut store, _) = empty_store();
        store.add(rug());
        let before = store.snapshot();

        store.increase_quantity(ProductId(42));
        store.decrease_quantity(ProductId(42));
        store.remove_from_cart(ProductId(42));

        assert_eq!(store.snapshot(), before);
        assert_eq!(store.item_count(), 1);
    }

    #[test]
    fn test_scenario_keeps_insertion_order() {
        let (mut store, _) = empty_store();
        store.add(lamp());
        assert_eq!(store.item_count(), 1);
        store.add(lamp());
        assert_eq!(store.item_count(), 2);
        store.add(rug());
        assert_eq!(store.item_count(), 3);
        assert_eq!(quantities(&store), vec![(1, 2), (2, 1)]);

        store.increase_quantity(ProductId(1));
        assert_eq!(quantities(&store), vec![(1, 3), (2, 1)]);

        store.remove_from_cart(ProductId(1));
        assert_eq!(store.item_count(), 1);
        assert_eq!(quantities(&store), vec![(2, 1)]);
    }

    #[test]
    fn test_count_always_matches_sum_of_quantities() {
        let (mut store, _) = empty_store();
        let products = [lamp(), rug(), Product::new(3, "Vase", 5.0, 1)];

        for step in 0..40u32 {
            let product = &products[(step % 3) as usize];
            match step % 5 {
                0 | 1 => store.add(product.clone()),
                2 => store.increase_quantity(product.id),
                3 => store.decrease_quantity(product.id),
                _ => {
                    if step % 10 == 4 {
                        store.remove_from_cart(product.id)
                    } else {
                        store.add(product.clone())
                    }
                }
            }
            let snapshot = store.snapshot();
            assert_eq!(store.item_count(), snapshot.item_count());
            assert!(snapshot.items().iter().all(|item| item.quantity >= 1));
        }
    }

    #[test]
    fn test_persist_round_trip() {
        let (mut store, storage) = empty_store();
        store.add(lamp());
        store.add(lamp());
        store.add(rug());
        let original = store.snapshot();
        drop(store);

        let reloaded = CartStore::load(Box::new(storage), CART_KEY);
        assert_eq!(reloaded.snapshot(), original);
        assert_eq!(quantities(&reloaded), vec![(1, 2), (2, 1)]);
        assert_eq!(reloaded.item_count(), 3);
    }

    #[test]
    fn test_load_publishes_restored_cart_to_late_subscribers() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                CART_KEY,
                r#"[{"product":{"ProductId":"1","ProductPrice":10.0},"quantity":2}]"#,
            )
            .unwrap();

        let mut store = CartStore::load(Box::new(storage.clone()), CART_KEY);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe_count(Observer::new(move |count: &u32| sink.lock().unwrap().push(*count)));

        assert_eq!(*seen.lock().unwrap(), vec![2]);
        // Restoring rewrites the record with canonical integer ids.
        let raw = storage.get_item(CART_KEY).unwrap().unwrap();
        assert!(raw.contains(r#""ProductId":1"#));
    }

    #[test]
    fn test_corrupt_or_missing_record_yields_empty_cart() {
        let storage = MemoryStorage::new();
        storage.set_item(CART_KEY, "{not json").unwrap();

        let store = CartStore::load(Box::new(storage), CART_KEY);
        assert!(store.snapshot().is_empty());
        assert_eq!(store.item_count(), 0);

        let store = CartStore::load(Box::new(BrokenStorage), CART_KEY);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_restored_duplicates_and_zero_quantities_are_normalized() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                CART_KEY,
                r#"[
                    {"product":{"ProductId":1},"quantity":1},
                    {"product":{"ProductId":2},"quantity":0},
                    {"product":{"ProductId":"1"},"quantity":2}
                ]"#,
            )
            .unwrap();

        let store = CartStore::load(Box::new(storage), CART_KEY);
        assert_eq!(quantities(&store), vec![(1, 3)]);
    }

    #[test]
    fn test_storage_failure_does_not_block_mutation_or_notification() {
        let mut store = CartStore::load(Box::new(BrokenStorage), CART_KEY);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe_count(Observer::new(move |count: &u32| sink.lock().unwrap().push(*count)));

        store.add(lamp());
        store.add(rug());

        assert_eq!(store.item_count(), 2);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_clear_notifies_existing_and_new_subscribers() {
        let (mut store, storage) = empty_store();
        let items_seen = Arc::new(Mutex::new(Vec::new()));
        let sink = items_seen.clone();
        store.subscribe_items(Observer::new(move |snapshot: &CartSnapshot| {
            sink.lock().unwrap().push(snapshot.len())
        }));

        store.add(lamp());
        store.add(rug());
        store.clear_cart();

        assert_eq!(*items_seen.lock().unwrap(), vec![0, 1, 2, 0]);
        assert_eq!(storage.get_item(CART_KEY).unwrap().as_deref(), Some("[]"));

        let late = Arc::new(Mutex::new(None));
        let sink = late.clone();
        store.subscribe_count(Observer::new(move |count: &u32| {
            *sink.lock().unwrap() = Some(*count)
        }));
        assert_eq!(*late.lock().unwrap(), Some(0));
    }

    #[test]
    fn test_oversized_quantities_load_without_panic() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                CART_KEY,
                r#"[
                    {"product":{"ProductId":1},"quantity":4294967295},
                    {"product":{"ProductId":2},"quantity":1}
                ]"#,
            )
            .unwrap();

        let mut store = CartStore::load(Box::new(storage), CART_KEY);
        assert_eq!(quantities(&store), vec![(1, u32::MAX), (2, 1)]);
        assert_eq!(store.item_count(), u32::MAX);

        store.add(lamp());
        assert_eq!(store.snapshot().quantity_of(ProductId(1)), u32::MAX);
    }

    #[test]
    fn test_stale_record_is_rewritten_on_load() {
        let storage = MemoryStorage::new();
        storage
            .set_item(CART_KEY, r#"[{"product":{"ProductId":1},"quantity":0}]"#)
            .unwrap();

        let store = CartStore::load(Box::new(storage.clone()), CART_KEY);
        assert!(store.snapshot().is_empty());
        assert_eq!(storage.get_item(CART_KEY).unwrap().as_deref(), Some("[]"));

        storage.set_item(CART_KEY, "{not json").unwrap();
        CartStore::load(Box::new(storage.clone()), CART_KEY);
        assert_eq!(storage.get_item(CART_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_missing_record_is_not_written() {
        let (_, storage) = empty_store();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_take_all_returns_contents_and_empties_cart() {
        let (mut store, storage) = empty_store();
        let counts = Arc::new(Mutex::new(Vec::new()));
        let sink = counts.clone();
        store.subscribe_count(Observer::new(move |count: &u32| sink.lock().unwrap().push(*count)));

        store.add(lamp());
        store.add(rug());
        let taken = store.take_all();

        assert_eq!(taken.product_ids(), vec![ProductId(1), ProductId(2)]);
        assert!(store.snapshot().is_empty());
        assert_eq!(*counts.lock().unwrap(), vec![0, 1, 2, 0]);
        assert_eq!(storage.get_item(CART_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_unsubscribe_from_either_stream() {
        let (mut store, _) = empty_store();
        let items_id = store.subscribe_items(Observer::new(|_: &CartSnapshot| {}));
        let count_id = store.subscribe_count(Observer::new(|_: &u32| {}));

        assert!(store.unsubscribe(count_id));
        assert!(store.unsubscribe(items_id));
        assert!(!store.unsubscribe(items_id));
    }
}
