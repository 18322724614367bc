//! Gear profile save/load
//!
//! Persists the equipped-gear snapshot as slot -> (item id, level) pairs.
//! Item definitions are never embedded; loading resolves ids against a
//! catalog, and entries that no longer resolve are skipped so a stale
//! profile degrades instead of failing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::gear::{EquippedItem, GearSlot, GearSnapshot};

/// Profile file version for compatibility checking
const PROFILE_VERSION: u32 = 1;

/// Serialized form of a gear snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearProfile {
    pub version: u32,
    pub slots: Vec<ProfileEntry>,
}

/// One equipped slot in the stored profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub slot: GearSlot,
    pub item_id: String,
    pub level: u8,
}

/// Profile persistence error types
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("profile version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Get the profile directory path
pub fn profile_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "gearplan", "Gearplan") {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        // Fallback to current directory
        PathBuf::from(".")
    }
}

/// Default location of the saved gear profile
pub fn default_profile_path() -> PathBuf {
    profile_directory().join("gear.json")
}

/// Check if a profile exists at the given path
pub fn profile_exists(path: &Path) -> bool {
    path.exists()
}

/// Build the serializable profile from a snapshot
pub fn profile_from_snapshot(snapshot: &GearSnapshot) -> GearProfile {
    let mut slots: Vec<ProfileEntry> = snapshot
        .iter()
        .map(|(slot, item)| ProfileEntry {
            slot,
            item_id: item.def().id.clone(),
            level: item.level(),
        })
        .collect();
    // Stored order is cosmetic; keep it deterministic for diffable files
    slots.sort_by_key(|entry| entry.slot.name());
    GearProfile {
        version: PROFILE_VERSION,
        slots,
    }
}

/// Rebuild a snapshot from a stored profile, resolving item ids against
/// the catalog. Unknown ids and out-of-range levels are skipped with a
/// warning rather than failing the whole load.
pub fn snapshot_from_profile(profile: &GearProfile, catalog: &Catalog) -> GearSnapshot {
    let mut snapshot = GearSnapshot::new();
    for entry in &profile.slots {
        let Some(def) = catalog.get(&entry.item_id) else {
            log::warn!("stored item {} no longer in catalog, skipping", entry.item_id);
            continue;
        };
        match EquippedItem::new(def.clone(), entry.level) {
            Ok(item) => {
                snapshot.equip(entry.slot, item);
            }
            Err(e) => log::warn!("stored gear entry invalid: {}, skipping", e),
        }
    }
    snapshot
}

/// Save the snapshot to a profile file
pub fn save_profile(snapshot: &GearSnapshot, path: &Path) -> Result<(), ProfileError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let profile = profile_from_snapshot(snapshot);
    let json = serde_json::to_string_pretty(&profile)?;
    fs::write(path, json)?;
    log::info!("gear profile saved to {}", path.display());
    Ok(())
}

/// Load a snapshot from a profile file
pub fn load_profile(path: &Path, catalog: &Catalog) -> Result<GearSnapshot, ProfileError> {
    let data = fs::read_to_string(path)?;
    let profile: GearProfile = serde_json::from_str(&data)?;

    if profile.version != PROFILE_VERSION {
        return Err(ProfileError::VersionMismatch {
            expected: PROFILE_VERSION,
            found: profile.version,
        });
    }

    log::info!("gear profile loaded from {}", path.display());
    Ok(snapshot_from_profile(&profile, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn sample_snapshot(catalog: &Catalog) -> GearSnapshot {
        let mut snapshot = GearSnapshot::new();
        let earring = catalog.get("duskglow_earring").unwrap().clone();
        let helm = catalog.get("blackstar_helm").unwrap().clone();
        snapshot.equip(GearSlot::EarringLeft, EquippedItem::new(earring, 2).unwrap());
        snapshot.equip(GearSlot::Head, EquippedItem::new(helm, 7).unwrap());
        snapshot
    }

    fn temp_profile_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gearplan-profile-{}-{}.json", tag, std::process::id()))
    }

    #[test]
    fn test_profile_round_trip_in_memory() {
        let catalog = test_catalog();
        let snapshot = sample_snapshot(&catalog);

        let profile = profile_from_snapshot(&snapshot);
        assert_eq!(profile.version, 1);
        assert_eq!(profile.slots.len(), 2);

        let restored = snapshot_from_profile(&profile, &catalog);
        assert_eq!(restored.count(), 2);
        let earring = restored.get(GearSlot::EarringLeft).unwrap();
        assert_eq!(earring.def().id, "duskglow_earring");
        assert_eq!(earring.level(), 2);
    }

    #[test]
    fn test_profile_round_trip_on_disk() {
        let catalog = test_catalog();
        let snapshot = sample_snapshot(&catalog);
        let path = temp_profile_path("disk");

        save_profile(&snapshot, &path).unwrap();
        let restored = load_profile(&path, &catalog).unwrap();
        assert_eq!(restored.count(), snapshot.count());
        assert_eq!(
            restored.get(GearSlot::Head).unwrap().level(),
            snapshot.get(GearSlot::Head).unwrap().level()
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_item_skipped_on_load() {
        let catalog = test_catalog();
        let profile = GearProfile {
            version: PROFILE_VERSION,
            slots: vec![
                ProfileEntry {
                    slot: GearSlot::EarringLeft,
                    item_id: "deleted_item".to_string(),
                    level: 2,
                },
                ProfileEntry {
                    slot: GearSlot::RingLeft,
                    item_id: "moonveil_band".to_string(),
                    level: 1,
                },
            ],
        };
        let snapshot = snapshot_from_profile(&profile, &catalog);
        assert_eq!(snapshot.count(), 1);
        assert!(snapshot.is_empty(GearSlot::EarringLeft));
        assert!(!snapshot.is_empty(GearSlot::RingLeft));
    }

    #[test]
    fn test_out_of_range_level_skipped_on_load() {
        let catalog = test_catalog();
        let profile = GearProfile {
            version: PROFILE_VERSION,
            slots: vec![ProfileEntry {
                slot: GearSlot::EarringLeft,
                item_id: "duskglow_earring".to_string(),
                level: 9, // accessories cap at 5
            }],
        };
        let snapshot = snapshot_from_profile(&profile, &catalog);
        assert_eq!(snapshot.count(), 0);
    }

    #[test]
    fn test_version_mismatch_is_an_error() {
        let catalog = test_catalog();
        let path = temp_profile_path("version");
        let stale = GearProfile {
            version: 99,
            slots: Vec::new(),
        };
        fs::write(&path, serde_json::to_string(&stale).unwrap()).unwrap();

        let err = load_profile(&path, &catalog).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::VersionMismatch { expected: 1, found: 99 }
        ));

        let _ = fs::remove_file(&path);
    }
}
