//! The canonical persisted record and the load/save entry points.
//!
//! One structured JSON document under the `petData` key is authoritative
//! for everything: stats, timestamps, identity, droppings. Legacy
//! installations that only wrote scalar keys are folded in once by
//! [`crate::legacy`] when the record is absent.

use serde::{Deserialize, Serialize};

use critter_core::{PetIdentity, PetKind, PetState};

use crate::error::StoreResult;
use crate::kv::FileStore;
use crate::legacy;

/// Key of the canonical record.
pub const KEY_PET_DATA: &str = "petData";

/// The persisted JSON shape, field names matching the original blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    /// Hunger level, 0-100.
    pub hunger: f64,
    /// Happiness level, 0-100.
    pub happiness: f64,
    /// Epoch ms of the last persisted tick.
    pub last_update: i64,
    /// Epoch ms of first creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_time: Option<i64>,
    /// Age in whole days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Pet kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_type: Option<PetKind>,
    /// Pet name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    /// Uncleaned droppings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poops: Option<u32>,
}

impl SaveRecord {
    /// Build a record from live identity and state.
    pub fn from_parts(identity: &PetIdentity, state: &PetState) -> Self {
        Self {
            hunger: state.hunger,
            happiness: state.happiness,
            last_update: state.last_update,
            birth_time: Some(state.birth),
            age: Some(state.age_days),
            pet_type: Some(identity.kind),
            pet_name: Some(identity.name.clone()),
            poops: Some(state.droppings),
        }
    }

    /// Resolve the record into identity and state.
    ///
    /// Returns `None` when no pet kind is recorded anywhere: a record
    /// without an identity is not a pet. Missing optional fields fall back
    /// to sensible defaults (birth = last update, age 0, clean lawn, the
    /// kind's own name).
    pub fn into_parts(self) -> Option<(PetIdentity, PetState)> {
        let kind = self.pet_type?;
        let name = self
            .pet_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| kind.to_string());
        let identity = PetIdentity::new(kind, name).ok()?;
        let state = PetState {
            hunger: self.hunger.clamp(0.0, 100.0),
            happiness: self.happiness.clamp(0.0, 100.0),
            asleep: false, // recomputed on the first tick or reconcile
            last_update: self.last_update,
            birth: self.birth_time.unwrap_or(self.last_update),
            age_days: self.age.unwrap_or(0),
            droppings: self.poops.unwrap_or(0),
        };
        Some((identity, state))
    }
}

/// Load the persisted pet, if any.
///
/// Reads the canonical record first; when absent, attempts a one-time fold
/// of legacy scalar keys (rewriting the canonical record). Malformed data is
/// treated as absence, never an error. `now` seeds timestamps for migrated
/// legacy saves that never recorded one.
pub fn load_pet(store: &FileStore, now: i64) -> StoreResult<Option<(PetIdentity, PetState)>> {
    let record = match store.get::<SaveRecord>(KEY_PET_DATA) {
        Some(record) => record,
        None => match legacy::migrate(store, now)? {
            Some(record) => record,
            None => return Ok(None),
        },
    };
    Ok(record.into_parts())
}

/// Persist the pet as the canonical record.
pub fn save_pet(store: &FileStore, identity: &PetIdentity, state: &PetState) -> StoreResult<()> {
    store.set(KEY_PET_DATA, &SaveRecord::from_parts(identity, state))
}

/// Delete the pet entirely: canonical record and any legacy scalars.
pub fn erase(store: &FileStore) -> StoreResult<()> {
    store.remove(KEY_PET_DATA)?;
    legacy::remove_scalars(store)
}
