//! Static reference data describing each mercenary's kit

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Reference data for every known mercenary, keyed by name
pub type Roster = AHashMap<String, MercenaryReference>;

/// Upgrade tiers defined for one ability or equipment item
///
/// Tier payloads come straight from site content and vary in shape; the
/// store only cares how many there are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierList {
    #[serde(default)]
    pub tiers: Vec<serde_json::Value>,
}

impl TierList {
    /// Build a list of `count` opaque tiers
    pub fn with_len(count: usize) -> Self {
        Self {
            tiers: vec![serde_json::Value::Null; count],
        }
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

/// A mercenary's available abilities and equipment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MercenaryReference {
    /// Display name; optional because rosters are usually keyed by name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub abilities: AHashMap<String, TierList>,
    #[serde(default)]
    pub equipment: AHashMap<String, TierList>,
}

impl MercenaryReference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add an ability with `tiers` upgrade tiers
    pub fn with_ability(mut self, name: impl Into<String>, tiers: usize) -> Self {
        self.abilities.insert(name.into(), TierList::with_len(tiers));
        self
    }

    /// Builder: add an equipment item with `tiers` upgrade tiers
    pub fn with_item(mut self, name: impl Into<String>, tiers: usize) -> Self {
        self.equipment.insert(name.into(), TierList::with_len(tiers));
        self
    }

    /// Number of tiers the named ability defines
    pub fn ability_tier_count(&self, ability: &str) -> Option<usize> {
        self.abilities.get(ability).map(TierList::len)
    }

    /// Number of tiers the named item defines
    pub fn item_tier_count(&self, item: &str) -> Option<usize> {
        self.equipment.get(item).map(TierList::len)
    }
}
