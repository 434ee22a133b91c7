//! Collection store - reference roster plus the user's progress
//!
//! Entries are created lazily: the first touch of a mercenary (adding it,
//! or adjusting one of its tiers) synthesizes the entry from the roster.
//! Tier adjustments are bounded; a step that would leave the bounds comes
//! back as [`TierChange::Rejected`] and changes nothing.

use std::collections::hash_map::Entry;

use crate::collection::entry::{Collection, CollectionEntry};
use crate::collection::tiers::{RejectReason, TierBounds, TierChange};
use crate::core::config::StoreConfig;
use crate::core::error::{CollectionError, Result};
use crate::core::types::{Step, TierKind};
use crate::roster::reference::Roster;

/// Request to add a mercenary to the collection or flip its `collected` flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToCollection {
    pub name: String,
    /// `None` leaves an existing entry's flag alone
    pub collected: Option<bool>,
}

impl AddToCollection {
    /// Ensure an entry exists without changing its flag
    pub fn touch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collected: None,
        }
    }

    /// Ensure an entry exists and set its flag
    pub fn collected(name: impl Into<String>, collected: bool) -> Self {
        Self {
            name: name.into(),
            collected: Some(collected),
        }
    }
}

/// Holds the roster and the user's collection
#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    config: StoreConfig,
    mercenaries: Roster,
    collection: Collection,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn mercenaries(&self) -> &Roster {
        &self.mercenaries
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn entry(&self, name: &str) -> Option<&CollectionEntry> {
        self.collection.get(name)
    }

    pub fn is_collected(&self, name: &str) -> bool {
        self.collection.get(name).is_some_and(|e| e.collected)
    }

    /// Replace the whole collection, e.g. with a restored snapshot
    pub fn set_collection(&mut self, loaded: Collection) {
        tracing::debug!(entries = loaded.len(), "Collection replaced");
        self.collection = loaded;
    }

    /// Replace the whole roster
    pub fn set_mercenaries(&mut self, loaded: Roster) {
        tracing::debug!(mercenaries = loaded.len(), "Roster replaced");
        self.mercenaries = loaded;
    }

    /// Add a mercenary to the collection, or update its `collected` flag
    ///
    /// An existing entry only has its flag overwritten, and only when the
    /// request carries one. A new entry is derived from the roster and fails
    /// with [`CollectionError::UnknownMercenary`] if the name is not in it.
    pub fn add_to_collection(&mut self, request: AddToCollection) -> Result<&mut CollectionEntry> {
        self.upsert(request.name, request.collected)
    }

    /// Entry for `name`, creating it from the roster on first use
    pub fn get_or_create(&mut self, name: &str) -> Result<&mut CollectionEntry> {
        self.upsert(name.to_string(), None)
    }

    fn upsert(&mut self, name: String, collected: Option<bool>) -> Result<&mut CollectionEntry> {
        match self.collection.entry(name) {
            Entry::Occupied(occupied) => {
                let entry = occupied.into_mut();
                if let Some(collected) = collected {
                    entry.collected = collected;
                }
                Ok(entry)
            }
            Entry::Vacant(vacant) => {
                let reference = self
                    .mercenaries
                    .get(vacant.key())
                    .ok_or_else(|| CollectionError::UnknownMercenary(vacant.key().clone()))?;
                let entry = CollectionEntry::from_reference(
                    reference,
                    &self.config,
                    collected.unwrap_or(false),
                );
                tracing::debug!(mercenary = %vacant.key(), "Collection entry created");
                Ok(vacant.insert(entry))
            }
        }
    }

    /// Bounds for one of a mercenary's abilities
    pub fn ability_bounds(&self, merc_name: &str, ability_name: &str) -> Result<TierBounds> {
        self.bounds(TierKind::Ability, merc_name, ability_name)
    }

    /// Bounds for one of a mercenary's equipment items
    pub fn item_bounds(&self, merc_name: &str, item_name: &str) -> Result<TierBounds> {
        self.bounds(TierKind::Item, merc_name, item_name)
    }

    fn bounds(&self, kind: TierKind, merc_name: &str, name: &str) -> Result<TierBounds> {
        let reference = self
            .mercenaries
            .get(merc_name)
            .ok_or_else(|| CollectionError::UnknownMercenary(merc_name.to_string()))?;

        match kind {
            TierKind::Ability => reference
                .ability_tier_count(name)
                .map(|count| TierBounds::new(self.config.ability_max_tier, count))
                .ok_or_else(|| CollectionError::UnknownAbility {
                    merc: merc_name.to_string(),
                    ability: name.to_string(),
                }),
            TierKind::Item => reference
                .item_tier_count(name)
                .map(|count| TierBounds::new(self.config.item_max_tier, count))
                .ok_or_else(|| CollectionError::UnknownItem {
                    merc: merc_name.to_string(),
                    item: name.to_string(),
                }),
        }
    }

    pub fn increment_ability(&mut self, merc_name: &str, ability_name: &str) -> Result<TierChange> {
        self.adjust(TierKind::Ability, merc_name, ability_name, Step::Up)
    }

    pub fn decrement_ability(&mut self, merc_name: &str, ability_name: &str) -> Result<TierChange> {
        self.adjust(TierKind::Ability, merc_name, ability_name, Step::Down)
    }

    pub fn increment_item(&mut self, merc_name: &str, item_name: &str) -> Result<TierChange> {
        self.adjust(TierKind::Item, merc_name, item_name, Step::Up)
    }

    pub fn decrement_item(&mut self, merc_name: &str, item_name: &str) -> Result<TierChange> {
        self.adjust(TierKind::Item, merc_name, item_name, Step::Down)
    }

    /// Upsert the entry, then move one tier by a single step if in bounds
    ///
    /// Unknown names fail before the entry is created. A tier missing from an
    /// existing entry (roster grew since the snapshot) starts at its floor.
    fn adjust(
        &mut self,
        kind: TierKind,
        merc_name: &str,
        name: &str,
        step: Step,
    ) -> Result<TierChange> {
        let bounds = self.bounds(kind, merc_name, name)?;
        let entry = self.get_or_create(merc_name)?;
        let tiers = match kind {
            TierKind::Ability => &mut entry.abilities,
            TierKind::Item => &mut entry.equipment,
        };
        let tier = tiers.entry(name.to_string()).or_insert(bounds.floor);

        match bounds.step(*tier, step) {
            Some(next) => {
                *tier = next;
                tracing::debug!(
                    mercenary = merc_name,
                    kind = kind.label(),
                    name,
                    tier = next,
                    "Tier changed"
                );
                Ok(TierChange::Applied(next))
            }
            None => {
                tracing::trace!(
                    mercenary = merc_name,
                    kind = kind.label(),
                    name,
                    tier = *tier,
                    ?step,
                    "Tier change rejected"
                );
                Ok(TierChange::Rejected(RejectReason::BoundsExceeded))
            }
        }
    }
}
