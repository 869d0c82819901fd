pub mod catalog;
pub mod explainer;
pub mod providers;
pub mod scorer;

pub use catalog::{Catalog, StaticCatalog};
pub use explainer::Explainer;
pub use providers::{GeminiProvider, TextGenerator};
pub use scorer::ScoringError;
