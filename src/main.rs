//! Gearplan - Entry Point
//!
//! Loads the catalog and the saved gear profile, then prints the current
//! stat totals and the cheapest next enhancement steps.

use anyhow::Result;

use gearplan::catalog::{self, Catalog};
use gearplan::gear::{EquippedItem, GearSlot, GearSnapshot};
use gearplan::save::profile::{default_profile_path, load_profile, save_profile};
use gearplan::upgrade::format::{format_cost, format_efficiency};
use gearplan::upgrade::{advisor, EnhancementCosts};

/// How many recommendations to print
const TOP_UPGRADES: usize = 3;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::info!("Starting Gearplan v{}", env!("CARGO_PKG_VERSION"));

    let catalog = catalog::load_or_builtin()?;
    let profile_path = default_profile_path();

    let snapshot = if profile_path.exists() {
        load_profile(&profile_path, &catalog)?
    } else {
        log::info!("no saved profile, starting with the demo loadout");
        let snapshot = demo_loadout(&catalog)?;
        save_profile(&snapshot, &profile_path)?;
        snapshot
    };

    print_summary(&snapshot);
    print_recommendations(&snapshot);

    Ok(())
}

/// A mid-progression loadout used on first run, before the player has
/// saved their own gear
fn demo_loadout(catalog: &Catalog) -> Result<GearSnapshot> {
    let loadout = [
        (GearSlot::MainHand, "blackstar_longsword", 6),
        (GearSlot::OffHand, "tidewarden_aegis", 5),
        (GearSlot::Awakening, "blackstar_glaive", 5),
        (GearSlot::Head, "gravemaw_helm", 7),
        (GearSlot::Body, "blackstar_cuirass", 6),
        (GearSlot::Hands, "duskhide_gauntlets", 6),
        (GearSlot::Feet, "blackstar_greaves", 5),
        (GearSlot::Necklace, "seastone_amulet", 3),
        (GearSlot::EarringLeft, "duskglow_earring", 2),
        (GearSlot::EarringRight, "riftshard_earring", 1),
        (GearSlot::RingLeft, "moonveil_band", 2),
        (GearSlot::RingRight, "emberfall_band", 2),
        (GearSlot::Belt, "thornweave_girdle", 3),
    ];

    let mut snapshot = GearSnapshot::new();
    for (slot, id, level) in loadout {
        let def = catalog
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("demo item {} missing from catalog", id))?;
        snapshot.equip(slot, EquippedItem::new(def.clone(), level)?);
    }
    Ok(snapshot)
}

fn print_summary(snapshot: &GearSnapshot) {
    let totals = snapshot.stat_totals();
    println!("Gearscore: {}", snapshot.gearscore());
    println!("  AP {}  /  AAP {}  /  DP {}", totals.ap, totals.aap, totals.dp);
    println!();

    for &slot in GearSlot::all() {
        match snapshot.get(slot) {
            Some(item) => println!(
                "  {:12} {} ({})",
                slot.name(),
                item.display_name(),
                item.def().rarity.name()
            ),
            None => println!("  {:12} -", slot.name()),
        }
    }
    println!();
}

fn print_recommendations(snapshot: &GearSnapshot) {
    let costs = EnhancementCosts::standard();
    let ranked = advisor::rank(snapshot, &costs);

    if ranked.is_empty() {
        println!("No upgrades left: every equipped item is fully enhanced.");
        return;
    }

    println!("Cheapest upgrades:");
    for candidate in ranked.iter().take(TOP_UPGRADES) {
        let gain = candidate.ap_delta + candidate.aap_delta + candidate.dp_delta.abs();
        println!(
            "  {:12} {} -> +{}  ({} stat, {}, {})",
            candidate.slot.name(),
            candidate.item.display_name(),
            candidate.next_level,
            gain,
            format_cost(candidate.cost),
            format_efficiency(candidate.efficiency),
        );
    }
}
