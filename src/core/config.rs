//! Store configuration with documented constants
//!
//! The tier ceilings live here so the derivation rule and the bounds checks
//! read them from one place.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::{CollectionError, Result};

/// Highest tier any ability can reach
pub const ABILITY_MAX_TIER: u8 = 5;

/// Highest tier any equipment item can reach
pub const ITEM_MAX_TIER: u8 = 4;

/// Configuration for the collection store
///
/// A roster defines how many upgrade tiers each ability or item has; the
/// ceilings below decide where those tiers end. The starting tier of an
/// ability with `L` tiers is `ability_max_tier - L + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    // === ABILITIES ===
    /// Ceiling for ability tiers
    ///
    /// Every ability tops out here regardless of how many tiers it defines.
    /// An ability with 5 tiers starts at 1, one with 1 tier starts maxed.
    pub ability_max_tier: u8,

    // === EQUIPMENT ===
    /// Ceiling for equipment tiers
    ///
    /// One lower than abilities: equipment upgrades stop at tier 4.
    pub item_max_tier: u8,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            ability_max_tier: ABILITY_MAX_TIER,
            item_max_tier: ITEM_MAX_TIER,
        }
    }
}

impl StoreConfig {
    /// Parse a config from TOML; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a config from an optional TOML file and validate it
    ///
    /// No path means defaults.
    pub fn load_validated(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.validate().map_err(CollectionError::InvalidConfig)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.ability_max_tier == 0 || self.item_max_tier == 0 {
            return Err("Tier ceilings must be at least 1".into());
        }

        // floor computation adds one to the ceiling
        if self.ability_max_tier == u8::MAX || self.item_max_tier == u8::MAX {
            return Err(format!("Tier ceilings must be below {}", u8::MAX));
        }

        Ok(())
    }
}
