//! Command execution - applies parsed operations to a store

use crate::collection::store::{AddToCollection, CollectionStore};
use crate::collection::tiers::TierChange;
use crate::command::parser::StoreOp;
use crate::core::error::{CollectionError, Result};
use crate::core::types::{Step, TierKind};

/// What an operation did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpOutcome {
    /// Entry exists; carries its `collected` flag afterwards
    Added { collected: bool },
    Tier(TierChange),
}

/// Outcome of running a batch of operations
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Applied operations by index into the batch
    pub outcomes: Vec<(usize, OpOutcome)>,
    /// Failed operations that were skipped, by index
    pub skipped: Vec<(usize, CollectionError)>,
}

/// Applies [`StoreOp`]s to a [`CollectionStore`]
pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute one operation
    pub fn execute(store: &mut CollectionStore, op: &StoreOp) -> Result<OpOutcome> {
        match op {
            StoreOp::Add { merc, collected } => {
                let entry = store.add_to_collection(AddToCollection {
                    name: merc.clone(),
                    collected: *collected,
                })?;
                Ok(OpOutcome::Added {
                    collected: entry.collected,
                })
            }
            StoreOp::Adjust {
                kind,
                step,
                merc,
                name,
            } => {
                let change = match (kind, step) {
                    (TierKind::Ability, Step::Up) => store.increment_ability(merc, name)?,
                    (TierKind::Ability, Step::Down) => store.decrement_ability(merc, name)?,
                    (TierKind::Item, Step::Up) => store.increment_item(merc, name)?,
                    (TierKind::Item, Step::Down) => store.decrement_item(merc, name)?,
                };
                Ok(OpOutcome::Tier(change))
            }
        }
    }

    /// Execute operations in order
    ///
    /// A failing operation is logged and skipped, unless `strict` is set, in
    /// which case its error is returned and later operations are not run.
    /// Operations applied before the failure stay applied.
    pub fn execute_all(
        store: &mut CollectionStore,
        ops: &[StoreOp],
        strict: bool,
    ) -> Result<BatchReport> {
        let mut report = BatchReport::default();
        for (index, op) in ops.iter().enumerate() {
            match Self::execute(store, op) {
                Ok(outcome) => {
                    tracing::info!(?op, ?outcome, "Applied");
                    report.outcomes.push((index, outcome));
                }
                Err(e) if strict => return Err(e),
                Err(e) => {
                    tracing::warn!(?op, error = %e, "Skipped");
                    report.skipped.push((index, e));
                }
            }
        }
        Ok(report)
    }
}
