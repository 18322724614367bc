//! Enhancement cost model
//!
//! Average silver cost per enhancement step, in billions. An item's cost
//! category picks the table; accessories are further keyed by rarity.

use crate::gear::{ItemCategory, ItemDef, Rarity};

/// Accessory cost tier, collapsing the six rarities onto three tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessoryTier {
    Common,
    Legendary,
    Mythic,
}

impl AccessoryTier {
    pub fn of(rarity: Rarity) -> Self {
        match rarity {
            Rarity::Mythic => AccessoryTier::Mythic,
            Rarity::Legendary => AccessoryTier::Legendary,
            _ => AccessoryTier::Common,
        }
    }
}

/// Silver cost tables, in billions per step. Index 0 is the cost of the
/// step reaching level 1.
#[derive(Debug, Clone)]
pub struct EnhancementCosts {
    pub blackstar: [f64; 10],
    pub boss_gear: [f64; 5],
    pub accessory_common: [f64; 5],
    pub accessory_legendary: [f64; 5],
    pub accessory_mythic: [f64; 5],
}

impl EnhancementCosts {
    /// The standard cost tables
    pub fn standard() -> Self {
        Self {
            blackstar: [0.5, 1.2, 4.0, 15.0, 60.0, 100.0, 180.0, 300.0, 500.0, 850.0],
            boss_gear: [0.3, 0.8, 2.5, 8.0, 35.0],
            accessory_common: [0.1, 0.3, 0.8, 2.5, 8.0],
            accessory_legendary: [0.5, 1.5, 4.0, 12.0, 45.0],
            accessory_mythic: [2.0, 6.0, 18.0, 55.0, 150.0],
        }
    }

    fn table(&self, def: &ItemDef) -> &[f64] {
        match def.category {
            ItemCategory::Blackstar => &self.blackstar,
            ItemCategory::BossGear => &self.boss_gear,
            ItemCategory::Accessory => match AccessoryTier::of(def.rarity) {
                AccessoryTier::Common => &self.accessory_common,
                AccessoryTier::Legendary => &self.accessory_legendary,
                AccessoryTier::Mythic => &self.accessory_mythic,
            },
        }
    }

    /// Cost of the single step that reaches `level` from `level - 1`.
    /// A step beyond the table contributes zero.
    fn step_cost(&self, def: &ItemDef, level: u8) -> f64 {
        if level == 0 {
            return 0.0;
        }
        self.table(def)
            .get(level as usize - 1)
            .copied()
            .unwrap_or(0.0)
    }

    /// Silver cost (billions) of enhancing from `from` to `to`, summed over
    /// the intervening single-level steps. `cost_of(def, L, L)` is zero.
    pub fn cost_of(&self, def: &ItemDef, from: u8, to: u8) -> f64 {
        (from + 1..=to).map(|level| self.step_cost(def, level)).sum()
    }
}

impl Default for EnhancementCosts {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::GearSlot;

    fn make_test_def(slot: GearSlot, rarity: Rarity, category: ItemCategory, max: u8) -> ItemDef {
        ItemDef {
            id: "test".to_string(),
            name: "Test".to_string(),
            slot,
            rarity,
            category,
            base_ap: None,
            base_aap: None,
            base_dp: None,
            ap_per_level: None,
            aap_per_level: None,
            dp_per_level: None,
            max_enhance: max,
        }
    }

    #[test]
    fn test_no_transition_costs_nothing() {
        let costs = EnhancementCosts::standard();
        let def = make_test_def(GearSlot::MainHand, Rarity::Legendary, ItemCategory::Blackstar, 10);
        for level in 0..=10u8 {
            assert_eq!(costs.cost_of(&def, level, level), 0.0);
        }
    }

    #[test]
    fn test_additivity_over_single_steps() {
        let costs = EnhancementCosts::standard();
        let def = make_test_def(GearSlot::MainHand, Rarity::Legendary, ItemCategory::Blackstar, 10);
        for to in 1..=10u8 {
            let stepwise: f64 = (1..=to).map(|k| costs.cost_of(&def, k - 1, k)).sum();
            assert!((costs.cost_of(&def, 0, to) - stepwise).abs() < 1e-9);
        }
    }

    #[test]
    fn test_blackstar_table() {
        let costs = EnhancementCosts::standard();
        let def = make_test_def(GearSlot::MainHand, Rarity::Legendary, ItemCategory::Blackstar, 10);
        assert_eq!(costs.cost_of(&def, 0, 1), 0.5);
        assert_eq!(costs.cost_of(&def, 9, 10), 850.0);
    }

    #[test]
    fn test_boss_gear_table() {
        let costs = EnhancementCosts::standard();
        let def = make_test_def(GearSlot::Head, Rarity::Legendary, ItemCategory::BossGear, 10);
        assert_eq!(costs.cost_of(&def, 0, 1), 0.3);
        assert_eq!(costs.cost_of(&def, 4, 5), 35.0);
    }

    #[test]
    fn test_accessory_tables_keyed_by_rarity() {
        let costs = EnhancementCosts::standard();
        let legendary =
            make_test_def(GearSlot::EarringLeft, Rarity::Legendary, ItemCategory::Accessory, 5);
        let mythic =
            make_test_def(GearSlot::EarringLeft, Rarity::Mythic, ItemCategory::Accessory, 5);
        let rare = make_test_def(GearSlot::EarringLeft, Rarity::Rare, ItemCategory::Accessory, 5);

        assert_eq!(costs.cost_of(&legendary, 2, 3), 4.0);
        assert_eq!(costs.cost_of(&mythic, 2, 3), 18.0);
        // Anything below legendary uses the common table
        assert_eq!(costs.cost_of(&rare, 2, 3), 0.8);
    }

    #[test]
    fn test_steps_beyond_table_contribute_zero() {
        let costs = EnhancementCosts::standard();
        let def = make_test_def(GearSlot::Head, Rarity::Legendary, ItemCategory::BossGear, 10);
        // Steps 6..=10 are off the end of the 5-step table
        assert_eq!(costs.cost_of(&def, 5, 10), 0.0);
        let full: f64 = costs.boss_gear.iter().sum();
        assert!((costs.cost_of(&def, 0, 10) - full).abs() < 1e-9);
    }
}
