//! Built-in item set
//!
//! Compiled-in defaults used when no external items.ron is present.
//! Stat tables are per enhancement level, index 0 = unenhanced.

use crate::gear::{GearSlot, ItemCategory, ItemDef, Rarity};

fn def(
    id: &str,
    name: &str,
    slot: GearSlot,
    rarity: Rarity,
    category: ItemCategory,
    max_enhance: u8,
) -> ItemDef {
    ItemDef {
        id: id.to_string(),
        name: name.to_string(),
        slot,
        rarity,
        category,
        base_ap: None,
        base_aap: None,
        base_dp: None,
        ap_per_level: None,
        aap_per_level: None,
        dp_per_level: None,
        max_enhance,
    }
}

fn with_ap(mut item: ItemDef, levels: Vec<i32>) -> ItemDef {
    item.base_ap = levels.first().copied();
    item.ap_per_level = Some(levels);
    item
}

fn with_aap(mut item: ItemDef, levels: Vec<i32>) -> ItemDef {
    item.base_aap = levels.first().copied();
    item.aap_per_level = Some(levels);
    item
}

fn with_dp(mut item: ItemDef, levels: Vec<i32>) -> ItemDef {
    item.base_dp = levels.first().copied();
    item.dp_per_level = Some(levels);
    item
}

/// The default catalog contents
pub fn builtin_items() -> Vec<ItemDef> {
    use GearSlot::*;
    use ItemCategory::*;
    use Rarity::*;

    vec![
        // Main weapons
        with_ap(
            def("blackstar_longsword", "Blackstar Longsword", MainHand, Legendary, Blackstar, 10),
            vec![100, 107, 114, 121, 128, 135, 144, 153, 162, 171, 180],
        ),
        with_ap(
            def("korvath_warblade", "Korvath's Warblade", MainHand, Legendary, BossGear, 10),
            vec![90, 97, 104, 111, 118, 125, 132, 139, 146, 153, 160],
        ),
        with_ap(
            def("godspire_warblade", "Godspire Warblade", MainHand, Mythic, BossGear, 5),
            vec![140, 150, 160, 170, 180, 190],
        ),
        // Sub-weapons
        with_ap(
            def("blackstar_aegis", "Blackstar Aegis", OffHand, Legendary, Blackstar, 10),
            vec![50, 54, 58, 62, 66, 70, 75, 80, 85, 90, 95],
        ),
        with_dp(
            with_ap(
                def("tidewarden_aegis", "Tidewarden Aegis", OffHand, Legendary, BossGear, 10),
                vec![45, 49, 53, 57, 61, 65, 69, 73, 77, 81, 85],
            ),
            vec![10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20],
        ),
        // Awakening weapons
        with_aap(
            def("blackstar_glaive", "Blackstar Glaive", Awakening, Legendary, Blackstar, 10),
            vec![100, 107, 114, 121, 128, 135, 144, 153, 162, 171, 180],
        ),
        with_aap(
            def("stormcaller_glaive", "Stormcaller Glaive", Awakening, Legendary, BossGear, 10),
            vec![95, 102, 109, 116, 123, 130, 137, 144, 151, 158, 165],
        ),
        // Armor
        with_dp(
            def("blackstar_helm", "Blackstar Helm", Head, Legendary, Blackstar, 10),
            vec![75, 80, 85, 90, 95, 100, 106, 112, 118, 124, 130],
        ),
        with_dp(
            def("gravemaw_helm", "Gravemaw Helm", Head, Legendary, BossGear, 10),
            vec![65, 70, 75, 80, 85, 90, 95, 100, 105, 110, 115],
        ),
        with_dp(
            def("blackstar_cuirass", "Blackstar Cuirass", Body, Legendary, Blackstar, 10),
            vec![85, 91, 97, 103, 109, 115, 122, 129, 136, 143, 150],
        ),
        with_dp(
            def("emberheart_cuirass", "Emberheart Cuirass", Body, Mythic, BossGear, 5),
            vec![130, 140, 150, 160, 170, 180],
        ),
        with_dp(
            def("blackstar_gauntlets", "Blackstar Gauntlets", Hands, Legendary, Blackstar, 10),
            vec![70, 75, 80, 85, 90, 95, 101, 107, 113, 119, 125],
        ),
        with_dp(
            def("duskhide_gauntlets", "Duskhide Gauntlets", Hands, Legendary, BossGear, 10),
            vec![60, 65, 70, 75, 80, 85, 90, 95, 100, 105, 110],
        ),
        with_dp(
            def("blackstar_greaves", "Blackstar Greaves", Feet, Legendary, Blackstar, 10),
            vec![70, 75, 80, 85, 90, 95, 101, 107, 113, 119, 125],
        ),
        with_dp(
            def("mirewalker_greaves", "Mirewalker Greaves", Feet, Legendary, BossGear, 10),
            vec![60, 65, 70, 75, 80, 85, 90, 95, 100, 105, 110],
        ),
        // Accessories
        with_ap(
            def("voidheart_amulet", "Voidheart Amulet", Necklace, Mythic, Accessory, 5),
            vec![30, 35, 40, 45, 50, 55],
        ),
        with_ap(
            def("seastone_amulet", "Seastone Amulet", Necklace, Legendary, Accessory, 5),
            vec![25, 28, 31, 34, 37, 40],
        ),
        with_ap(
            def("duskglow_earring", "Duskglow Earring", EarringLeft, Legendary, Accessory, 5),
            vec![14, 16, 18, 20, 22, 24],
        ),
        // AP earring with a DP penalty that deepens per level
        with_dp(
            with_ap(
                def("riftshard_earring", "Riftshard Earring", EarringLeft, Legendary, Accessory, 5),
                vec![17, 19, 21, 23, 25, 27],
            ),
            vec![-10, -11, -12, -13, -14, -15],
        ),
        with_ap(
            def("morrows_earring", "Morrow's Earring", EarringLeft, Mythic, Accessory, 5),
            vec![19, 22, 25, 28, 31, 34],
        ),
        with_ap(
            def("moonveil_band", "Moonveil Band", RingLeft, Legendary, Accessory, 5),
            vec![12, 14, 16, 18, 20, 22],
        ),
        with_ap(
            def("emberfall_band", "Emberfall Band", RingLeft, Legendary, Accessory, 5),
            vec![15, 17, 19, 21, 23, 25],
        ),
        with_ap(
            def("sovereign_band", "Sovereign Band", RingLeft, Mythic, Accessory, 5),
            vec![20, 23, 26, 29, 32, 35],
        ),
        with_dp(
            with_ap(
                def("thornweave_girdle", "Thornweave Girdle", Belt, Legendary, Accessory, 5),
                vec![12, 14, 16, 18, 20, 22],
            ),
            vec![5, 6, 7, 8, 9, 10],
        ),
        with_ap(
            def("basalt_girdle", "Basalt Girdle", Belt, Legendary, Accessory, 5),
            vec![10, 12, 14, 16, 18, 20],
        ),
    ]
}
