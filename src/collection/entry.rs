//! Per-mercenary collection progress

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::collection::tiers::initial_tier;
use crate::core::config::StoreConfig;
use crate::core::types::Tier;
use crate::roster::reference::{MercenaryReference, TierList};

/// User progress for every mercenary touched so far, keyed by name
pub type Collection = AHashMap<String, CollectionEntry>;

/// Progress record for a single mercenary
///
/// Field names serialize in the camelCase shape saved by the site UI,
/// including its `itemEquiped` spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntry {
    #[serde(default)]
    pub collected: bool,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub tasks_completed: u32,
    #[serde(default, rename = "itemEquiped")]
    pub item_equiped: String,
    #[serde(default)]
    pub abilities: AHashMap<String, Tier>,
    #[serde(default)]
    pub equipment: AHashMap<String, Tier>,
}

fn default_level() -> u32 {
    1
}

fn derive_tiers(lists: &AHashMap<String, TierList>, max_tier: Tier) -> AHashMap<String, Tier> {
    lists
        .iter()
        .map(|(name, list)| (name.clone(), initial_tier(max_tier, list.len())))
        .collect()
}

impl CollectionEntry {
    /// Synthesize a fresh entry from reference data
    ///
    /// Level starts at 1, nothing is equipped, and every ability and item
    /// sits at the floor its tier list implies.
    pub fn from_reference(
        reference: &MercenaryReference,
        config: &StoreConfig,
        collected: bool,
    ) -> Self {
        Self {
            collected,
            level: default_level(),
            tasks_completed: 0,
            item_equiped: String::new(),
            abilities: derive_tiers(&reference.abilities, config.ability_max_tier),
            equipment: derive_tiers(&reference.equipment, config.item_max_tier),
        }
    }

    pub fn ability_tier(&self, ability: &str) -> Option<Tier> {
        self.abilities.get(ability).copied()
    }

    pub fn item_tier(&self, item: &str) -> Option<Tier> {
        self.equipment.get(item).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anya() -> MercenaryReference {
        MercenaryReference::new()
            .with_ability("Stealth", 3)
            .with_ability("Backstab", 5)
            .with_item("Blade", 2)
            .with_item("Cloak", 4)
    }

    #[test]
    fn test_from_reference_derives_floors() {
        let entry = CollectionEntry::from_reference(&anya(), &StoreConfig::default(), false);

        assert!(!entry.collected);
        assert_eq!(entry.level, 1);
        assert_eq!(entry.tasks_completed, 0);
        assert_eq!(entry.item_equiped, "");
        assert_eq!(entry.ability_tier("Stealth"), Some(3));
        assert_eq!(entry.ability_tier("Backstab"), Some(1));
        assert_eq!(entry.item_tier("Blade"), Some(3));
        assert_eq!(entry.item_tier("Cloak"), Some(1));
    }

    #[test]
    fn test_from_reference_uses_config_ceilings() {
        let config = StoreConfig {
            ability_max_tier: 7,
            item_max_tier: 2,
        };
        let entry = CollectionEntry::from_reference(&anya(), &config, true);

        assert!(entry.collected);
        assert_eq!(entry.ability_tier("Stealth"), Some(5));
        assert_eq!(entry.item_tier("Blade"), Some(1));
    }

    #[test]
    fn test_serializes_in_ui_shape() {
        let entry = CollectionEntry::from_reference(
            &MercenaryReference::new().with_item("Blade", 2),
            &StoreConfig::default(),
            true,
        );
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["collected"], true);
        assert_eq!(json["level"], 1);
        assert_eq!(json["tasksCompleted"], 0);
        assert_eq!(json["itemEquiped"], "");
        assert_eq!(json["equipment"]["Blade"], 3);
    }

    #[test]
    fn test_sparse_snapshot_fills_defaults() {
        let entry: CollectionEntry = serde_json::from_str(r#"{ "collected": true }"#).unwrap();
        assert!(entry.collected);
        assert_eq!(entry.level, 1);
        assert!(entry.abilities.is_empty());
    }
}
