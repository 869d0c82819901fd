//! Read-only product catalog
//!
//! The catalog is owned by an external data provider. The core only looks
//! items up; it never writes. `StaticCatalog` keeps everything in memory and
//! is loaded once at startup, either from a JSON file or from the built-in
//! demo products.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::Context;

use crate::models::{CatalogItem, ItemId};

/// Lookup capability injected into the scorer and the explain route
pub trait Catalog: Send + Sync {
    /// All items, in catalog order
    fn items(&self) -> &[CatalogItem];

    /// Looks up a single item by id
    fn get(&self, id: ItemId) -> Option<&CatalogItem>;
}

/// In-memory catalog with an id index
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    items: Vec<CatalogItem>,
    index: HashMap<ItemId, usize>,
}

impl StaticCatalog {
    /// Builds a catalog, rejecting duplicate ids and negative or non-finite prices
    pub fn new(items: Vec<CatalogItem>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                anyhow::bail!("Duplicate catalog item id {}", item.id);
            }
            if !item.price.is_finite() || item.price < 0.0 {
                anyhow::bail!("Catalog item {} has invalid price {}", item.id, item.price);
            }
        }
        Ok(Self::indexed(items))
    }

    /// Loads a catalog from a JSON array of items
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let items: Vec<CatalogItem> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
        Self::new(items)
    }

    /// The twelve demo products served when no catalog file is configured
    pub fn demo() -> Self {
        let image = |color: &str, label: &str| {
            format!("https://placehold.co/400x400/{color}/ffffff?text={label}")
        };

        Self::indexed(vec![
            CatalogItem::new(1, "Eco-Friendly Water Bottle", 18.0, "Accessories", &["eco-friendly", "hydration", "outdoors"], image("3498db", "Bottle")),
            CatalogItem::new(2, "Modern Desk Lamp", 45.0, "Home Goods", &["lighting", "office", "modern"], image("e74c3c", "Lamp")),
            CatalogItem::new(3, "Wireless Noise-Cancelling Headphones", 199.0, "Electronics", &["audio", "travel", "focus"], image("2ecc71", "Headphones")),
            CatalogItem::new(4, "Organic Cotton T-Shirt", 25.0, "Apparel", &["clothing", "eco-friendly", "casual"], image("9b59b6", "T-Shirt")),
            CatalogItem::new(5, "Smart Fitness Tracker", 89.0, "Electronics", &["health", "wearable", "fitness"], image("f1c40f", "Tracker")),
            CatalogItem::new(6, "Leather-bound Journal", 22.0, "Stationery", &["office", "writing", "gift"], image("1abc9c", "Journal")),
            CatalogItem::new(7, "Gourmet Coffee Beans", 15.0, "Food & Drink", &["coffee", "morning", "gift"], image("d35400", "Coffee")),
            CatalogItem::new(8, "Travel Backpack", 75.0, "Accessories", &["travel", "outdoors", "storage"], image("34495e", "Backpack")),
            CatalogItem::new(9, "Yoga Mat", 30.0, "Sports", &["fitness", "health", "yoga"], image("7f8c8d", "Yoga+Mat")),
            CatalogItem::new(10, "Portable Bluetooth Speaker", 55.0, "Electronics", &["audio", "outdoors", "music"], image("c0392b", "Speaker")),
            CatalogItem::new(11, "Canvas Wall Art", 60.0, "Home Goods", &["decor", "art", "modern"], image("8e44ad", "Art")),
            CatalogItem::new(12, "Comfortable Running Shoes", 120.0, "Apparel", &["fitness", "footwear", "running"], image("27ae60", "Shoes")),
        ])
    }

    fn indexed(items: Vec<CatalogItem>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id, position))
            .collect();
        Self { items, index }
    }
}

impl Catalog for StaticCatalog {
    fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.index.get(&id).map(|&position| &self.items[position])
    }
}
