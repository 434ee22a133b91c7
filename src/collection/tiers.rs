//! Tier derivation and bounds
//!
//! A roster item with `L` upgrade tiers and a ceiling of `max` starts at
//! `max - L + 1` and may move between that floor and `max`. Arithmetic
//! saturates: an empty tier list puts the floor above the ceiling (the tier
//! can never move) and an overlong list clamps the floor at 0.

use crate::core::types::{Step, Tier};

/// Starting tier for an ability or item with `tier_count` tiers
pub fn initial_tier(max_tier: Tier, tier_count: usize) -> Tier {
    let count = Tier::try_from(tier_count).unwrap_or(Tier::MAX);
    max_tier.saturating_add(1).saturating_sub(count)
}

/// Inclusive range a tier may occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierBounds {
    pub floor: Tier,
    pub ceiling: Tier,
}

impl TierBounds {
    pub fn new(max_tier: Tier, tier_count: usize) -> Self {
        Self {
            floor: initial_tier(max_tier, tier_count),
            ceiling: max_tier,
        }
    }

    pub fn can_increment(&self, tier: Tier) -> bool {
        tier < self.ceiling
    }

    pub fn can_decrement(&self, tier: Tier) -> bool {
        tier > self.floor
    }

    /// Apply one step, or `None` if it would leave the bounds
    pub fn step(&self, tier: Tier, step: Step) -> Option<Tier> {
        match step {
            Step::Up if self.can_increment(tier) => Some(tier + 1),
            Step::Down if self.can_decrement(tier) => Some(tier - 1),
            _ => None,
        }
    }
}

/// Why an adjustment was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    BoundsExceeded,
}

/// Outcome of a tier adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierChange {
    /// The tier moved; carries the new value
    Applied(Tier),
    /// The tier was left unchanged
    Rejected(RejectReason),
}

impl TierChange {
    pub fn is_applied(&self) -> bool {
        matches!(self, TierChange::Applied(_))
    }

    /// New tier if the change went through
    pub fn tier(&self) -> Option<Tier> {
        match self {
            TierChange::Applied(tier) => Some(*tier),
            TierChange::Rejected(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ABILITY_MAX_TIER, ITEM_MAX_TIER};

    #[test]
    fn test_initial_tier_formula() {
        assert_eq!(initial_tier(ABILITY_MAX_TIER, 3), 3);
        assert_eq!(initial_tier(ABILITY_MAX_TIER, 5), 1);
        assert_eq!(initial_tier(ABILITY_MAX_TIER, 1), 5);
        assert_eq!(initial_tier(ITEM_MAX_TIER, 2), 3);
        assert_eq!(initial_tier(ITEM_MAX_TIER, 4), 1);
    }

    #[test]
    fn test_initial_tier_saturates() {
        assert_eq!(initial_tier(ITEM_MAX_TIER, 0), 5);
        assert_eq!(initial_tier(ITEM_MAX_TIER, 5), 0);
        assert_eq!(initial_tier(ITEM_MAX_TIER, 40), 0);
        assert_eq!(initial_tier(ITEM_MAX_TIER, 100_000), 0);
    }

    #[test]
    fn test_step_within_bounds() {
        let bounds = TierBounds::new(ABILITY_MAX_TIER, 3);
        assert_eq!(bounds.floor, 3);
        assert_eq!(bounds.ceiling, 5);

        assert_eq!(bounds.step(3, Step::Up), Some(4));
        assert_eq!(bounds.step(4, Step::Down), Some(3));
        assert_eq!(bounds.step(5, Step::Up), None);
        assert_eq!(bounds.step(3, Step::Down), None);
    }

    #[test]
    fn test_empty_tier_list_is_frozen() {
        let bounds = TierBounds::new(ITEM_MAX_TIER, 0);
        let start = bounds.floor;
        assert_eq!(bounds.step(start, Step::Up), None);
        assert_eq!(bounds.step(start, Step::Down), None);
    }

    #[test]
    fn test_tier_change_accessors() {
        assert!(TierChange::Applied(4).is_applied());
        assert_eq!(TierChange::Applied(4).tier(), Some(4));
        let rejected = TierChange::Rejected(RejectReason::BoundsExceeded);
        assert!(!rejected.is_applied());
        assert_eq!(rejected.tier(), None);
    }
}
