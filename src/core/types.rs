//! Core type definitions used throughout the codebase

/// Progress level of an ability or equipment item
pub type Tier = u8;

/// Which half of a mercenary's kit a tier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierKind {
    Ability,
    Item,
}

impl TierKind {
    pub fn label(&self) -> &'static str {
        match self {
            TierKind::Ability => "ability",
            TierKind::Item => "item",
        }
    }
}

/// Direction of a single tier adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Up,
    Down,
}
