//! Merc Collection - mercenary collection progress store
//!
//! Tracks which mercenaries a user has collected and the tier of each of
//! their abilities and equipment items, bounded by the roster's reference
//! data.

pub mod collection;
pub mod command;
pub mod core;
pub mod roster;
