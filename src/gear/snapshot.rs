//! Gear snapshot
//!
//! The set of currently equipped items, at most one per slot.

use std::collections::HashMap;

use super::item::{EquippedItem, GearSlot};

/// Equipped gear keyed by slot. Any subset of the thirteen slots may be
/// populated; no invariant ties slots together.
#[derive(Debug, Clone, Default)]
pub struct GearSnapshot {
    slots: HashMap<GearSlot, EquippedItem>,
}

impl GearSnapshot {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Equip an item into a slot, returning the previously equipped item if any
    pub fn equip(&mut self, slot: GearSlot, item: EquippedItem) -> Option<EquippedItem> {
        self.slots.insert(slot, item)
    }

    /// Unequip an item from a slot
    pub fn unequip(&mut self, slot: GearSlot) -> Option<EquippedItem> {
        self.slots.remove(&slot)
    }

    /// Get the item in a slot
    pub fn get(&self, slot: GearSlot) -> Option<&EquippedItem> {
        self.slots.get(&slot)
    }

    /// Check if a slot is empty
    pub fn is_empty(&self, slot: GearSlot) -> bool {
        !self.slots.contains_key(&slot)
    }

    /// Number of occupied slots
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// Iterate over occupied slots and their items
    pub fn iter(&self) -> impl Iterator<Item = (GearSlot, &EquippedItem)> {
        self.slots.iter().map(|(slot, item)| (*slot, item))
    }
}
