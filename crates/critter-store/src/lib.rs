//! Save-file persistence for critter.
//!
//! Replaces the browser's `localStorage` with a directory-scoped key-value
//! store: one JSON file per key. The structured `petData` record is the
//! single source of truth; scalar keys written by older versions are folded
//! in once and then deleted. Missing or corrupt data always reads as
//! absence — the simulation substitutes defaults, never fails.

/// Error types for the persistence layer.
pub mod error;
/// The file-backed key-value store.
pub mod kv;
/// One-time migration of legacy scalar keys.
pub mod legacy;
/// The canonical persisted record and load/save entry points.
pub mod record;

pub use error::{StoreError, StoreResult};
pub use kv::{FileStore, default_dir};
pub use record::{SaveRecord, erase, load_pet, save_pet};
