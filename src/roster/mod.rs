//! Mercenary reference data and its ingestion

pub mod loader;
pub mod reference;

pub use loader::{load_roster, load_roster_dir, load_roster_file};
pub use reference::{MercenaryReference, Roster, TierList};
