//! Error kinds surfaced by the activity store and monitor.
//!
//! Every fallible core operation returns one of these variants instead of
//! raising across the crate boundary. Commands convert them to `anyhow`
//! for user-visible reporting.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection or transaction failure. Surfaced to the caller; there is
    /// no automatic retry beyond the next detected transition.
    #[error("storage unavailable: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Attempt to rename or delete the reserved Misc project (id 1).
    #[error("the default project cannot be modified")]
    Protected,

    /// Project name collision.
    #[error("a project named '{0}' already exists")]
    Duplicate(String),

    /// The operation referenced a nonexistent record.
    #[error("no record with id {0}")]
    NotFound(i64),

    /// A relocation target could not be validated or repaired; the store
    /// stays bound to its previous path.
    #[error("storage path '{0}' cannot be validated or repaired")]
    InvalidConfig(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
