//! # Containers
//!
//! The warehouse and the shelf are plain in-memory lists. Entries keep
//! insertion order, ids are not deduplicated on add, and every id lookup
//! resolves to the first matching entry.

use crate::model::{InventoryEntry, ProductId, ShelfItem, StockItem};

/// Ordered, unbounded list of warehouse entries.
#[derive(Debug, Default)]
pub struct Warehouse {
    items: Vec<StockItem>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: StockItem) {
        self.items.push(item);
    }

    pub fn find(&self, id: &ProductId) -> Option<&StockItem> {
        self.items.iter().find(|item| item.product().id() == id)
    }

    pub fn find_mut(&mut self, id: &ProductId) -> Option<&mut StockItem> {
        self.items.iter_mut().find(|item| item.product().id() == id)
    }

    pub fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product().id() == id)
    }

    pub fn remove_at(&mut self, index: usize) -> StockItem {
        self.items.remove(index)
    }

    pub fn items(&self) -> &[StockItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Ordered, unbounded list of shelf entries.
#[derive(Debug, Default)]
pub struct Shelf {
    items: Vec<ShelfItem>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: ShelfItem) {
        self.items.push(item);
    }

    pub fn find(&self, id: &ProductId) -> Option<&ShelfItem> {
        self.items.iter().find(|item| item.product().id() == id)
    }

    pub fn find_mut(&mut self, id: &ProductId) -> Option<&mut ShelfItem> {
        self.items.iter_mut().find(|item| item.product().id() == id)
    }

    pub fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product().id() == id)
    }

    pub fn remove_at(&mut self, index: usize) -> ShelfItem {
        self.items.remove(index)
    }

    pub fn items(&self) -> &[ShelfItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn stock_item(id: &str, stack: &str, quantity: f64) -> StockItem {
        let product = Product::new(id.parse().unwrap(), "A", "Widget", quantity).unwrap();
        StockItem::new(product, stack.parse().unwrap())
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut warehouse = Warehouse::new();
        warehouse.add(stock_item("111111", "900001", 1.0));
        warehouse.add(stock_item("222222", "900002", 2.0));
        warehouse.add(stock_item("333333", "900003", 3.0));

        let ids: Vec<&str> = warehouse
            .items()
            .iter()
            .map(|item| item.product().id().as_str())
            .collect();
        assert_eq!(ids, ["111111", "222222", "333333"]);
    }

    #[test]
    fn duplicate_ids_are_allowed_and_lookups_take_the_first() {
        let mut warehouse = Warehouse::new();
        warehouse.add(stock_item("123456", "900001", 1.0));
        warehouse.add(stock_item("123456", "900002", 2.0));

        assert_eq!(warehouse.len(), 2);
        let id = "123456".parse().unwrap();
        let first = warehouse.find(&id).unwrap();
        assert_eq!(first.stack_id().as_str(), "900001");
        assert_eq!(warehouse.position(&id), Some(0));
    }

    #[test]
    fn remove_at_drops_a_single_entry() {
        let mut warehouse = Warehouse::new();
        warehouse.add(stock_item("123456", "900001", 1.0));
        warehouse.add(stock_item("123456", "900002", 2.0));

        let removed = warehouse.remove_at(0);
        assert_eq!(removed.stack_id().as_str(), "900001");
        assert_eq!(warehouse.len(), 1);
        let id = "123456".parse().unwrap();
        assert_eq!(warehouse.find(&id).unwrap().stack_id().as_str(), "900002");
    }
}
