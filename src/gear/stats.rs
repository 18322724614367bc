//! Stat resolution
//!
//! Computes the three stat kinds an item contributes at an enhancement
//! level, and the aggregates a full snapshot produces.

use serde::{Deserialize, Serialize};

use super::item::{EquippedItem, ItemDef};
use super::snapshot::GearSnapshot;

/// The three scalar stats tracked per item: offensive power, awakening
/// offensive power, defensive power.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub ap: i32,
    pub aap: i32,
    pub dp: i32,
}

impl StatBlock {
    /// Plain sum of all three stat kinds
    pub fn combined(&self) -> i32 {
        self.ap + self.aap + self.dp
    }
}

/// Single stat kind at a level: per-level array entry if the array exists,
/// else the base scalar, else zero. Absent data never fails.
fn stat_at(per_level: &Option<Vec<i32>>, base: Option<i32>, level: u8) -> i32 {
    per_level
        .as_ref()
        .and_then(|values| values.get(level as usize).copied())
        .or(base)
        .unwrap_or(0)
}

impl ItemDef {
    /// Resolve the stats this item grants at the given enhancement level
    pub fn stats_at(&self, level: u8) -> StatBlock {
        StatBlock {
            ap: stat_at(&self.ap_per_level, self.base_ap, level),
            aap: stat_at(&self.aap_per_level, self.base_aap, level),
            dp: stat_at(&self.dp_per_level, self.base_dp, level),
        }
    }
}

impl EquippedItem {
    /// Resolve the stats at the current enhancement level
    pub fn stats(&self) -> StatBlock {
        self.def().stats_at(self.level())
    }
}

impl GearSnapshot {
    /// Sum stat contributions across every equipped item
    pub fn stat_totals(&self) -> StatBlock {
        let mut totals = StatBlock::default();
        for (_, item) in self.iter() {
            let stats = item.stats();
            totals.ap += stats.ap;
            totals.aap += stats.aap;
            totals.dp += stats.dp;
        }
        totals
    }

    /// Gearscore: AP + AAP + DP summed over all equipped items
    pub fn gearscore(&self) -> i32 {
        self.stat_totals().combined()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::item::{GearSlot, ItemCategory, Rarity};

    fn bare_def(id: &str, slot: GearSlot) -> ItemDef {
        ItemDef {
            id: id.to_string(),
            name: id.to_string(),
            slot,
            rarity: Rarity::Legendary,
            category: ItemCategory::Accessory,
            base_ap: None,
            base_aap: None,
            base_dp: None,
            ap_per_level: None,
            aap_per_level: None,
            dp_per_level: None,
            max_enhance: 5,
        }
    }

    #[test]
    fn test_base_scalar_when_no_array() {
        let mut def = bare_def("ring", GearSlot::RingLeft);
        def.base_ap = Some(12);
        assert_eq!(def.stats_at(0).ap, 12);
        // Base scalar also answers for higher levels when no array exists
        assert_eq!(def.stats_at(3).ap, 12);
    }

    #[test]
    fn test_array_entry_per_level() {
        let mut def = bare_def("earring", GearSlot::EarringLeft);
        def.base_ap = Some(14);
        def.ap_per_level = Some(vec![14, 16, 18, 20, 22, 24]);
        for level in 0..=5u8 {
            assert_eq!(def.stats_at(level).ap, 14 + 2 * level as i32);
        }
    }

    #[test]
    fn test_absent_data_resolves_to_zero() {
        let def = bare_def("plain", GearSlot::Belt);
        let stats = def.stats_at(0);
        assert_eq!(stats, StatBlock::default());
    }

    #[test]
    fn test_negative_dp_array_resolves() {
        let mut def = bare_def("penalty_earring", GearSlot::EarringLeft);
        def.ap_per_level = Some(vec![17, 19, 21, 23, 25, 27]);
        def.dp_per_level = Some(vec![-10, -11, -12, -13, -14, -15]);
        let stats = def.stats_at(2);
        assert_eq!(stats.ap, 21);
        assert_eq!(stats.dp, -12);
    }

    #[test]
    fn test_snapshot_totals_and_gearscore() {
        let mut necklace = bare_def("necklace", GearSlot::Necklace);
        necklace.ap_per_level = Some(vec![30, 35, 40, 45, 50, 55]);
        let mut belt = bare_def("belt", GearSlot::Belt);
        belt.ap_per_level = Some(vec![12, 14, 16, 18, 20, 22]);
        belt.dp_per_level = Some(vec![5, 6, 7, 8, 9, 10]);

        let mut snapshot = GearSnapshot::new();
        snapshot.equip(
            GearSlot::Necklace,
            EquippedItem::new(necklace, 2).unwrap(),
        );
        snapshot.equip(GearSlot::Belt, EquippedItem::new(belt, 1).unwrap());

        let totals = snapshot.stat_totals();
        assert_eq!(totals.ap, 40 + 14);
        assert_eq!(totals.dp, 6);
        assert_eq!(snapshot.gearscore(), 40 + 14 + 6);
    }

    #[test]
    fn test_empty_snapshot_gearscore_is_zero() {
        assert_eq!(GearSnapshot::new().gearscore(), 0);
    }
}
