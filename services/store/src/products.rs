//! Product collection
//!
//! Products are scoped to a market: both the numeric product id and the
//! display name are unique per marketplace address, never globally.

use crate::collection::{Collection, SortOrder};
use crate::error::Result;
use crate::index::UniqueIndex;
use types::{Address, Product};

#[derive(Debug)]
pub struct ProductStore {
    docs: Collection<Product>,
    key_idx: UniqueIndex<(Address, u64)>,
    name_idx: UniqueIndex<(Address, String)>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            docs: Collection::new("products"),
            key_idx: UniqueIndex::new("products", "productId"),
            name_idx: UniqueIndex::new("products", "name"),
        }
    }

    pub fn insert(&self, product: Product) -> Result<Product> {
        let id = product.id;
        let key = (product.market_place_address.clone(), product.product_id);
        let name_key = (product.market_place_address.clone(), product.name.clone());

        self.key_idx.claim(key.clone(), id)?;
        if let Err(err) = self.name_idx.claim(name_key, id) {
            self.key_idx.release(&key);
            return Err(err);
        }

        self.docs.insert(id, product.clone());
        Ok(product)
    }

    pub fn get(&self, addr: &Address, product_id: u64) -> Option<Product> {
        let id = self.key_idx.get(&(addr.clone(), product_id))?;
        self.docs.get(&id)
    }

    pub fn by_name(&self, addr: &Address, name: &str) -> Option<Product> {
        let id = self.name_idx.get(&(addr.clone(), name.to_string()))?;
        self.docs.get(&id)
    }

    pub fn for_market(&self, addr: &Address) -> Vec<Product> {
        self.docs.find(|p| p.market_place_address == *addr)
    }

    pub fn for_market_sorted_by_name(&self, addr: &Address, order: SortOrder) -> Vec<Product> {
        self.docs.find_sorted(
            |p| p.market_place_address == *addr,
            |a, b| a.name.cmp(&b.name),
            order,
        )
    }

    pub fn for_market_sorted_by_rating(&self, addr: &Address, order: SortOrder) -> Vec<Product> {
        self.docs.find_sorted(
            |p| p.market_place_address == *addr,
            |a, b| a.rating.total_cmp(&b.rating),
            order,
        )
    }

    pub fn for_market_sorted_by_price(&self, addr: &Address, order: SortOrder) -> Vec<Product> {
        self.docs.find_sorted(
            |p| p.market_place_address == *addr,
            |a, b| a.price.cmp(&b.price),
            order,
        )
    }

    /// Field-set update of one product. A name change moves the per-market
    /// name index, claiming the new key before the write.
    pub fn update(
        &self,
        addr: &Address,
        product_id: u64,
        apply: impl FnOnce(&mut Product),
    ) -> Result<Option<Product>> {
        let Some(current) = self.get(addr, product_id) else {
            return Ok(None);
        };

        let mut updated = current.clone();
        apply(&mut updated);

        let name_changed = updated.name != current.name;
        if name_changed {
            self.name_idx
                .claim((addr.clone(), updated.name.clone()), updated.id)?;
        }

        self.docs.replace(updated.id, updated.clone());

        if name_changed {
            self.name_idx.release(&(addr.clone(), current.name.clone()));
        }

        Ok(Some(updated))
    }

    pub fn delete(&self, addr: &Address, product_id: u64) -> Option<Product> {
        let id = self.key_idx.get(&(addr.clone(), product_id))?;
        let product = self.docs.remove(&id)?;
        self.release_keys(&product);
        Some(product)
    }

    /// Remove every product of a marketplace, returning the deleted count.
    pub fn delete_for_market(&self, addr: &Address) -> u64 {
        let removed = self.docs.delete_many(|p| p.market_place_address == *addr);
        for product in &removed {
            self.release_keys(product);
        }
        removed.len() as u64
    }

    fn release_keys(&self, product: &Product) {
        self.key_idx
            .release(&(product.market_place_address.clone(), product.product_id));
        self.name_idx.release(&(
            product.market_place_address.clone(),
            product.name.clone(),
        ));
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{addr, sample_product};
    use crate::StoreError;

    #[test]
    fn test_uniqueness_is_scoped_to_market() {
        let store = ProductStore::new();
        store.insert(sample_product(addr('a'), 1, "Widget")).unwrap();

        // Same id in another market is fine.
        store.insert(sample_product(addr('b'), 1, "Widget")).unwrap();

        // Same id in the same market conflicts.
        assert!(matches!(
            store.insert(sample_product(addr('a'), 1, "Gadget")),
            Err(StoreError::DuplicateKey { index: "productId", .. })
        ));

        // Same name in the same market conflicts.
        assert!(matches!(
            store.insert(sample_product(addr('a'), 2, "Widget")),
            Err(StoreError::DuplicateKey { index: "name", .. })
        ));
        // The failed insert must not leave the id claimed.
        store.insert(sample_product(addr('a'), 2, "Gadget")).unwrap();
    }

    #[test]
    fn test_sorted_by_price() {
        let store = ProductStore::new();
        for (pid, name, price) in [(1, "Mid", 50u64), (2, "Cheap", 10), (3, "Dear", 90)] {
            let mut product = sample_product(addr('a'), pid, name);
            product.price = price;
            store.insert(product).unwrap();
        }

        let sorted = store.for_market_sorted_by_price(&addr('a'), SortOrder::Ascending);
        let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cheap", "Mid", "Dear"]);
    }

    #[test]
    fn test_delete_for_market_counts_and_releases() {
        let store = ProductStore::new();
        store.insert(sample_product(addr('a'), 1, "Widget")).unwrap();
        store.insert(sample_product(addr('a'), 2, "Gadget")).unwrap();
        store.insert(sample_product(addr('b'), 1, "Other")).unwrap();

        assert_eq!(store.delete_for_market(&addr('a')), 2);
        assert_eq!(store.delete_for_market(&addr('a')), 0, "second pass is vacuous");
        assert_eq!(store.len(), 1);

        // Keys are reusable after bulk delete.
        store.insert(sample_product(addr('a'), 1, "Widget")).unwrap();
    }
}
