pub mod catalog_item;
pub mod explanation;
pub mod gemini;
pub mod recommendation;

pub use catalog_item::{CatalogItem, ItemId};
pub use explanation::{ExplanationRequest, ExplanationResult};
pub use recommendation::ScoredCandidate;
