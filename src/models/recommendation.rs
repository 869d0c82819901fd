use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// A catalog item the user has not viewed, with its overlap score
///
/// Serialized flat: the item's fields plus `score`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub score: u32,
}
