//! Parse textual store operations such as `ability+:Anya:Stealth`

use std::str::FromStr;

use crate::core::error::CollectionError;
use crate::core::types::{Step, TierKind};

/// A single store mutation named on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    /// Add to the collection, optionally setting the `collected` flag
    Add {
        merc: String,
        collected: Option<bool>,
    },
    /// Move an ability or item tier one step
    Adjust {
        kind: TierKind,
        step: Step,
        merc: String,
        name: String,
    },
}

fn non_empty(part: Option<&str>, op: &str) -> Result<String, CollectionError> {
    match part.map(str::trim) {
        Some(p) if !p.is_empty() => Ok(p.to_string()),
        _ => Err(CollectionError::InvalidOp(format!("Missing argument in '{}'", op))),
    }
}

impl FromStr for StoreOp {
    type Err = CollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(3, ':').collect();
        let verb = parts[0].trim();
        let arg = |i: usize| non_empty(parts.get(i).copied(), s);

        let collected = match verb {
            "collect" => Some(Some(true)),
            "uncollect" => Some(Some(false)),
            "touch" => Some(None),
            _ => None,
        };
        if let Some(collected) = collected {
            if parts.len() > 2 {
                return Err(CollectionError::InvalidOp(format!(
                    "Unexpected argument in '{}'",
                    s
                )));
            }
            return Ok(StoreOp::Add {
                merc: arg(1)?,
                collected,
            });
        }

        let (kind, step) = match verb {
            "ability+" => (TierKind::Ability, Step::Up),
            "ability-" => (TierKind::Ability, Step::Down),
            "item+" => (TierKind::Item, Step::Up),
            "item-" => (TierKind::Item, Step::Down),
            other => {
                return Err(CollectionError::InvalidOp(format!(
                    "Unknown operation '{}'",
                    other
                )))
            }
        };

        Ok(StoreOp::Adjust {
            kind,
            step,
            merc: arg(1)?,
            name: arg(2)?,
        })
    }
}
