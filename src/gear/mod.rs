//! Gear model
//!
//! Item definitions, equipment slots, and the equipped-gear snapshot.

pub mod item;
pub mod snapshot;
pub mod stats;

pub use item::{enhance_label, EquippedItem, GearError, GearSlot, ItemCategory, ItemDef, Rarity};
pub use snapshot::GearSnapshot;
pub use stats::StatBlock;
