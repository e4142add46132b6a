//! Error types for the simulation core.

use thiserror::Error;

/// Result type for pet operations.
pub type PetResult<T> = Result<T, PetError>;

/// Errors that can occur at the edges of the simulation core.
///
/// The simulation itself is total: ticks, reconciliation, and care actions
/// never fail. Errors exist only at parse seams.
#[derive(Debug, Error)]
pub enum PetError {
    /// A pet kind string did not match any known kind.
    #[error("unknown pet kind: {0} (expected cat, dog, or dragon)")]
    UnknownKind(String),

    /// A pet name was empty or all whitespace.
    #[error("pet name must not be empty")]
    EmptyName,
}
