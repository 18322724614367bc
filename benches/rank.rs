//! Benchmark for ranking a fully populated gear snapshot

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gearplan::catalog::Catalog;
use gearplan::gear::{EquippedItem, GearSlot, GearSnapshot};
use gearplan::upgrade::{advisor, EnhancementCosts};

fn full_snapshot(catalog: &Catalog) -> GearSnapshot {
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
        let def = catalog.get(id).unwrap().clone();
        snapshot.equip(slot, EquippedItem::new(def, level).unwrap());
    }
    snapshot
}

fn bench_rank(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let snapshot = full_snapshot(&catalog);
    let costs = EnhancementCosts::standard();

    c.bench_function("rank_full_snapshot", |b| {
        b.iter(|| advisor::rank(black_box(&snapshot), black_box(&costs)))
    });
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
