//! Item definitions
//!
//! Static item data, rarities, slots, and the equipped-item wrapper.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Item rarity tiers, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    /// Get rarity name
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }

    /// Get numeric value for sorting (higher = rarer)
    pub fn sort_value(&self) -> u8 {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
            Rarity::Mythic => 5,
        }
    }
}

/// The thirteen equipment slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GearSlot {
    MainHand,
    OffHand,
    Awakening,
    Head,
    Body,
    Hands,
    Feet,
    Necklace,
    EarringLeft,
    EarringRight,
    RingLeft,
    RingRight,
    Belt,
}

impl GearSlot {
    pub fn name(&self) -> &'static str {
        match self {
            GearSlot::MainHand => "Main Weapon",
            GearSlot::OffHand => "Sub-weapon",
            GearSlot::Awakening => "Awakening",
            GearSlot::Head => "Helmet",
            GearSlot::Body => "Armor",
            GearSlot::Hands => "Gloves",
            GearSlot::Feet => "Shoes",
            GearSlot::Necklace => "Necklace",
            GearSlot::EarringLeft => "Earring L",
            GearSlot::EarringRight => "Earring R",
            GearSlot::RingLeft => "Ring L",
            GearSlot::RingRight => "Ring R",
            GearSlot::Belt => "Belt",
        }
    }

    /// Canonical slot for item-pool lookups. Paired slots (the two earrings,
    /// the two rings) draw from a single pool keyed by the left-hand slot.
    pub fn pool_key(&self) -> GearSlot {
        match self {
            GearSlot::EarringRight => GearSlot::EarringLeft,
            GearSlot::RingRight => GearSlot::RingLeft,
            other => *other,
        }
    }

    /// Check if this is one of the six accessory slots
    pub fn is_accessory(&self) -> bool {
        matches!(
            self,
            GearSlot::Necklace
                | GearSlot::EarringLeft
                | GearSlot::EarringRight
                | GearSlot::RingLeft
                | GearSlot::RingRight
                | GearSlot::Belt
        )
    }

    /// Get all slots in display order
    pub fn all() -> &'static [GearSlot] {
        &[
            GearSlot::MainHand,
            GearSlot::OffHand,
            GearSlot::Awakening,
            GearSlot::Head,
            GearSlot::Body,
            GearSlot::Hands,
            GearSlot::Feet,
            GearSlot::Necklace,
            GearSlot::EarringLeft,
            GearSlot::EarringRight,
            GearSlot::RingLeft,
            GearSlot::RingRight,
            GearSlot::Belt,
        ]
    }
}

/// Enhancement cost category. Assigned per item at catalog construction,
/// so cost lookup never inspects identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Top-tier weapons and armor with ten enhancement steps
    Blackstar,
    /// Other boss-tier weapons and armor, five steps
    BossGear,
    /// Accessories, five steps, costed by rarity
    Accessory,
}

/// Static item definition. Catalog-owned, immutable once validated.
///
/// Each of the three stat kinds has an optional per-level array indexed
/// 0..=max_enhance and an optional base scalar used when the array is
/// absent. Anything undefined contributes zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    pub slot: GearSlot,
    pub rarity: Rarity,
    pub category: ItemCategory,
    #[serde(default)]
    pub base_ap: Option<i32>,
    #[serde(default)]
    pub base_aap: Option<i32>,
    #[serde(default)]
    pub base_dp: Option<i32>,
    #[serde(default)]
    pub ap_per_level: Option<Vec<i32>>,
    #[serde(default)]
    pub aap_per_level: Option<Vec<i32>>,
    #[serde(default)]
    pub dp_per_level: Option<Vec<i32>>,
    /// Max enhancement level, 5 or 10 depending on category
    pub max_enhance: u8,
}

/// Gear-level invariant violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GearError {
    #[error("enhancement level {level} exceeds +{max} for {item}")]
    LevelOutOfRange { item: String, level: u8, max: u8 },
}

/// An item the player currently wears: a definition plus its enhancement
/// level.
///
/// Construction fails fast on a level outside [0, max_enhance] rather than
/// clamping, so every value of this type satisfies the level invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct EquippedItem {
    def: ItemDef,
    level: u8,
}

impl EquippedItem {
    pub fn new(def: ItemDef, level: u8) -> Result<Self, GearError> {
        if level > def.max_enhance {
            return Err(GearError::LevelOutOfRange {
                item: def.id.clone(),
                level,
                max: def.max_enhance,
            });
        }
        Ok(Self { def, level })
    }

    pub fn def(&self) -> &ItemDef {
        &self.def
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Check if no further enhancement step exists
    pub fn is_maxed(&self) -> bool {
        self.level == self.def.max_enhance
    }

    /// Display name including the enhancement label, e.g. "III Duskglow Earring"
    pub fn display_name(&self) -> String {
        if self.level == 0 {
            self.def.name.clone()
        } else {
            format!("{} {}", enhance_label(self.level), self.def.name)
        }
    }
}

/// Enhancement level label as a Roman numeral ("I".."X"), empty at level 0
pub fn enhance_label(level: u8) -> &'static str {
    const NUMERALS: [&str; 11] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];
    NUMERALS.get(level as usize).copied().unwrap_or("?")
}
