//! Icon URL provider
//!
//! Builds CDN icon URLs for each slot's signature item, keyed by world.
//! Pure string templating with an in-memory cache; nothing here fetches.

use std::collections::HashMap;

use crate::gear::GearSlot;

/// The two game worlds, each with its own signature gear line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum World {
    Aurein,
    Veldane,
}

impl World {
    pub fn name(&self) -> &'static str {
        match self {
            World::Aurein => "Aurein",
            World::Veldane => "Veldane",
        }
    }
}

/// Resolves and caches icon URLs
#[derive(Debug, Clone)]
pub struct IconProvider {
    base_url: String,
    cache: HashMap<(World, GearSlot), String>,
}

impl IconProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://cdn.gearplan.dev/icons";

    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cache: HashMap::new(),
        }
    }

    /// Icon URL for a slot in a world. Built once, then served from cache.
    pub fn icon_url(&mut self, world: World, slot: GearSlot) -> &str {
        let base_url = &self.base_url;
        self.cache.entry((world, slot)).or_insert_with(|| {
            format!(
                "{}/{}/{}.webp",
                base_url,
                path_prefix(slot),
                item_icon_id(world, slot)
            )
        })
    }

    /// Number of URLs built so far
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl Default for IconProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// CDN path prefix per slot kind
fn path_prefix(slot: GearSlot) -> &'static str {
    match slot {
        GearSlot::MainHand => "equip/weapon/main",
        GearSlot::OffHand => "equip/weapon/sub",
        GearSlot::Awakening => "equip/weapon/awakening",
        GearSlot::Head => "equip/armor/helm",
        GearSlot::Body => "equip/armor/chest",
        GearSlot::Hands => "equip/armor/gloves",
        GearSlot::Feet => "equip/armor/shoes",
        GearSlot::Necklace => "equip/acc/necklace",
        GearSlot::EarringLeft | GearSlot::EarringRight => "equip/acc/earring",
        GearSlot::RingLeft | GearSlot::RingRight => "equip/acc/ring",
        GearSlot::Belt => "equip/acc/belt",
    }
}

/// CDN item id for each world's signature item in a slot
fn item_icon_id(world: World, slot: GearSlot) -> &'static str {
    match world {
        World::Aurein => match slot {
            GearSlot::MainHand => "00712005",
            GearSlot::OffHand => "00712006",
            GearSlot::Awakening => "00712007",
            GearSlot::Head => "00712010",
            GearSlot::Body => "00712011",
            GearSlot::Hands => "00712012",
            GearSlot::Feet => "00712013",
            GearSlot::Necklace => "00712020",
            GearSlot::EarringLeft | GearSlot::EarringRight => "00712021",
            GearSlot::RingLeft | GearSlot::RingRight => "00712022",
            GearSlot::Belt => "00712023",
        },
        World::Veldane => match slot {
            GearSlot::MainHand => "00845005",
            GearSlot::OffHand => "00845006",
            GearSlot::Awakening => "00845007",
            GearSlot::Head => "00845010",
            GearSlot::Body => "00845011",
            GearSlot::Hands => "00845012",
            GearSlot::Feet => "00845013",
            GearSlot::Necklace => "00845020",
            GearSlot::EarringLeft | GearSlot::EarringRight => "00845021",
            GearSlot::RingLeft | GearSlot::RingRight => "00845022",
            GearSlot::Belt => "00845023",
        },
    }
}
