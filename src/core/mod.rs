pub mod config;
pub mod error;
pub mod types;

pub use config::{StoreConfig, ABILITY_MAX_TIER, ITEM_MAX_TIER};
pub use error::{CollectionError, Result};
pub use types::{Step, Tier, TierKind};
