//! Upgrade engine
//!
//! Enhancement cost tables, the one-step upgrade evaluator, and the
//! recommendation ranker.

pub mod advisor;
pub mod cost;
pub mod format;

pub use advisor::{best_upgrade, evaluate, rank, UpgradeCandidate};
pub use cost::{AccessoryTier, EnhancementCosts};
