use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt::Display};

/// Identifier of a catalog item, unique within a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product supplied by the catalog provider
///
/// Never mutated once loaded. Tags are a set, so a tag listed twice in the
/// source data only counts once when scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    /// Price in the catalog's currency, never negative
    pub price: f64,
    pub category: String,
    pub tags: BTreeSet<String>,
    /// Opaque image reference (a URL for the built-in catalog)
    #[serde(rename = "image")]
    pub image_ref: String,
}

impl CatalogItem {
    /// Creates a catalog item
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        tags: &[&str],
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            price,
            category: category.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image_ref: image_ref.into(),
        }
    }

    /// One-line description used when prompting the generation provider
    pub fn summary_line(&self) -> String {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        format!(
            "- {} (Category: {}, Tags: {})",
            self.name,
            self.category,
            tags.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_image_field() {
        let json = r#"{
            "id": 7,
            "name": "Gourmet Coffee Beans",
            "price": 15.0,
            "category": "Food & Drink",
            "tags": ["coffee", "morning", "gift", "coffee"],
            "image": "https://placehold.co/400x400?text=Coffee"
        }"#;

        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.tags.len(), 3);
        assert_eq!(item.image_ref, "https://placehold.co/400x400?text=Coffee");
    }

    #[test]
    fn test_summary_line() {
        let item = CatalogItem::new(1, "Yoga Mat", 30.0, "Sports", &["yoga", "fitness"], "img");
        assert_eq!(
            item.summary_line(),
            "- Yoga Mat (Category: Sports, Tags: fitness, yoga)"
        );
    }
}
