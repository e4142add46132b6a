//! One-time migration of legacy scalar save keys.
//!
//! Early versions persisted loose scalar keys (`petType`, `petName`,
//! `birthTime`, `age`) alongside or instead of the structured record. These
//! are consulted only when the canonical `petData` record is absent, folded
//! into a fresh record, written back, and removed.

use critter_core::PetKind;

use crate::error::StoreResult;
use crate::kv::FileStore;
use crate::record::{KEY_PET_DATA, SaveRecord};

/// Legacy scalar keys, in no particular order.
pub const SCALAR_KEYS: [&str; 4] = ["petType", "petName", "birthTime", "age"];

/// Fold legacy scalar keys into a canonical record, if a pet exists.
///
/// `petType` is the witness key: without it there is no pet to migrate.
/// Stats were not reliably persisted by the scalar-key versions, so the pet
/// resumes fed and happy with its timeline anchored at `now` (age and birth
/// survive when present). On success the canonical record is written and
/// the scalars are deleted, making this a one-shot operation.
pub fn migrate(store: &FileStore, now: i64) -> StoreResult<Option<SaveRecord>> {
    let Some(kind) = store.get::<PetKind>("petType") else {
        return Ok(None);
    };

    let record = SaveRecord {
        hunger: 0.0,
        happiness: 100.0,
        last_update: now,
        birth_time: Some(store.get::<i64>("birthTime").unwrap_or(now)),
        age: Some(store.get::<u32>("age").unwrap_or(0)),
        pet_type: Some(kind),
        pet_name: store.get::<String>("petName"),
        poops: Some(0),
    };

    store.set(KEY_PET_DATA, &record)?;
    remove_scalars(store)?;
    Ok(Some(record))
}

/// Delete all legacy scalar keys.
pub fn remove_scalars(store: &FileStore) -> StoreResult<()> {
    for key in SCALAR_KEYS {
        store.remove(key)?;
    }
    Ok(())
}
