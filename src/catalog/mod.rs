//! Item catalog
//!
//! Read-only store of item definitions. Validation happens once here, at
//! construction; the rest of the crate trusts catalog data.

pub mod defaults;
pub mod loader;

use std::collections::HashMap;

use thiserror::Error;

use crate::gear::{GearSlot, ItemCategory, ItemDef};

pub use loader::{export_builtin, load_or_builtin};

/// Catalog construction failures. Every one of these is a defect in the
/// supplied item data, caught before any item is used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate item id: {0}")]
    DuplicateId(String),
    #[error("{id}: max enhance must be 5 or 10, found {found}")]
    InvalidMaxEnhance { id: String, found: u8 },
    #[error("{id}: blackstar items must have max enhance 10, found {found}")]
    BlackstarMaxEnhance { id: String, found: u8 },
    #[error("{id}: accessories must have max enhance 5, found {found}")]
    AccessoryMaxEnhance { id: String, found: u8 },
    #[error("{id}: category {category:?} does not match slot {slot:?}")]
    CategorySlotMismatch {
        id: String,
        category: ItemCategory,
        slot: GearSlot,
    },
    #[error("{id}: {kind} array has {found} entries, expected {expected}")]
    StatArrayLength {
        id: String,
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{id}: {kind} array is not monotonic")]
    StatArrayNotMonotonic { id: String, kind: &'static str },
}

/// Immutable collection of item definitions with id and per-slot lookups
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<ItemDef>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, validating every definition
    pub fn new(items: Vec<ItemDef>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(items.len());
        for (index, def) in items.iter().enumerate() {
            validate(def)?;
            if by_id.insert(def.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(def.id.clone()));
            }
        }
        Ok(Self { items, by_id })
    }

    /// The compiled-in item set
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(defaults::builtin_items())
    }

    /// Look up a definition by id
    pub fn get(&self, id: &str) -> Option<&ItemDef> {
        self.by_id.get(id).map(|&index| &self.items[index])
    }

    /// All definitions eligible for a slot. Paired slots share one pool,
    /// so both earring slots (and both ring slots) see the same items.
    pub fn items_for_slot(&self, slot: GearSlot) -> Vec<&ItemDef> {
        let pool = slot.pool_key();
        self.items
            .iter()
            .filter(|def| def.slot.pool_key() == pool)
            .collect()
    }

    /// All definitions, in catalog order
    pub fn items(&self) -> &[ItemDef] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate(def: &ItemDef) -> Result<(), CatalogError> {
    if def.max_enhance != 5 && def.max_enhance != 10 {
        return Err(CatalogError::InvalidMaxEnhance {
            id: def.id.clone(),
            found: def.max_enhance,
        });
    }
    match def.category {
        ItemCategory::Blackstar if def.max_enhance != 10 => {
            return Err(CatalogError::BlackstarMaxEnhance {
                id: def.id.clone(),
                found: def.max_enhance,
            });
        }
        ItemCategory::Accessory if def.max_enhance != 5 => {
            return Err(CatalogError::AccessoryMaxEnhance {
                id: def.id.clone(),
                found: def.max_enhance,
            });
        }
        _ => {}
    }
    // Accessory slots hold accessories and nothing else
    if def.slot.is_accessory() != (def.category == ItemCategory::Accessory) {
        return Err(CatalogError::CategorySlotMismatch {
            id: def.id.clone(),
            category: def.category,
            slot: def.slot,
        });
    }

    let expected = def.max_enhance as usize + 1;
    for (kind, array) in [
        ("ap", &def.ap_per_level),
        ("aap", &def.aap_per_level),
        ("dp", &def.dp_per_level),
    ] {
        if let Some(values) = array {
            if values.len() != expected {
                return Err(CatalogError::StatArrayLength {
                    id: def.id.clone(),
                    kind,
                    expected,
                    found: values.len(),
                });
            }
            // Positive arrays must not decrease; negative (penalty) arrays
            // must not increase
            let monotonic = if values[0] >= 0 {
                values.windows(2).all(|pair| pair[0] <= pair[1])
            } else {
                values.windows(2).all(|pair| pair[0] >= pair[1])
            };
            if !monotonic {
                return Err(CatalogError::StatArrayNotMonotonic {
                    id: def.id.clone(),
                    kind,
                });
            }
        }
    }
    Ok(())
}
