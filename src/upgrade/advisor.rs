//! Upgrade advisor
//!
//! Evaluates the one-step upgrade for each equipped item and ranks the
//! candidates by cost-efficiency. Deterministic and side-effect free.

use crate::gear::{EquippedItem, GearSlot, GearSnapshot};

use super::cost::EnhancementCosts;

/// A possible one-step enhancement of an equipped item
#[derive(Debug, Clone)]
pub struct UpgradeCandidate {
    pub slot: GearSlot,
    pub item: EquippedItem,
    /// Target enhancement level, always current + 1
    pub next_level: u8,
    pub ap_delta: i32,
    pub aap_delta: i32,
    /// May be negative for penalty accessories
    pub dp_delta: i32,
    /// Estimated silver cost, in billions
    pub cost: f64,
    /// Millions of silver per combined stat point; +inf when the step
    /// changes nothing. Lower is better.
    pub efficiency: f64,
    /// Ordering score, higher is better; 0 pins a candidate to the back
    pub priority: f64,
}

/// Evaluate the next enhancement step for one equipped item. Returns None
/// when the item is already at its maximum level.
pub fn evaluate(
    slot: GearSlot,
    equipped: &EquippedItem,
    costs: &EnhancementCosts,
) -> Option<UpgradeCandidate> {
    if equipped.is_maxed() {
        return None;
    }
    let def = equipped.def();
    let next_level = equipped.level() + 1;

    let current = def.stats_at(equipped.level());
    let upgraded = def.stats_at(next_level);
    let ap_delta = upgraded.ap - current.ap;
    let aap_delta = upgraded.aap - current.aap;
    let dp_delta = upgraded.dp - current.dp;

    // A DP loss still counts as a magnitude of change, so penalty
    // accessories rank by how much they move, not cancel to zero.
    let combined_gain = ap_delta + aap_delta + dp_delta.abs();

    let cost = costs.cost_of(def, equipped.level(), next_level);
    let efficiency = if combined_gain > 0 {
        cost * 1000.0 / combined_gain as f64
    } else {
        f64::INFINITY
    };
    let priority = if efficiency > 0.0 { 1000.0 / efficiency } else { 0.0 };

    Some(UpgradeCandidate {
        slot,
        item: equipped.clone(),
        next_level,
        ap_delta,
        aap_delta,
        dp_delta,
        cost,
        efficiency,
        priority,
    })
}

/// Evaluate every occupied slot and return the candidates ordered
/// best-to-worst. Slots at maximum enhancement are absent. Ties keep
/// their evaluation order (stable sort), but callers must not rely on
/// the relative order of equal-priority entries.
pub fn rank(snapshot: &GearSnapshot, costs: &EnhancementCosts) -> Vec<UpgradeCandidate> {
    let mut candidates: Vec<UpgradeCandidate> = snapshot
        .iter()
        .filter_map(|(slot, equipped)| evaluate(slot, equipped, costs))
        .collect();
    candidates.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    candidates
}

/// The single cheapest-per-stat upgrade, if any slot can still be enhanced
pub fn best_upgrade(snapshot: &GearSnapshot, costs: &EnhancementCosts) -> Option<UpgradeCandidate> {
    rank(snapshot, costs).into_iter().next()
}
