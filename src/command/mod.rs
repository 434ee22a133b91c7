//! Command pipeline for scripted store mutations
//!
//! Text op -> StoreOp (parser) -> CommandExecutor -> OpOutcome

pub mod executor;
pub mod parser;

pub use executor::{BatchReport, CommandExecutor, OpOutcome};
pub use parser::StoreOp;
