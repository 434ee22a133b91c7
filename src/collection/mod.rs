//! Collection progress: entries, tier rules and the store

pub mod entry;
pub mod store;
pub mod tiers;

pub use entry::{Collection, CollectionEntry};
pub use store::{AddToCollection, CollectionStore};
pub use tiers::{initial_tier, RejectReason, TierBounds, TierChange};
