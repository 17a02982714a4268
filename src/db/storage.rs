//! Storage-path binding and hot relocation.
//!
//! A running tracker keeps the current database path behind a mutex in a
//! [`StoreHandle`]; every logical operation opens its own connection against
//! that path. Relocation walks a fixed sequence -
//! `Bound(old) -> Validating -> Bound(new) | RolledBack(old)` - so every
//! failure path is enumerable: on any error the handle stays bound to the
//! old path and the caller gets `InvalidConfig`.

use crate::db::db::Db;
use crate::libs::error::StoreError;
use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How a relocation request was resolved.
#[derive(Debug)]
pub enum Relocation {
    /// The requested path is the current one; nothing to do.
    Unchanged,
    /// The store now points at the new path (validated existing store or a
    /// freshly bootstrapped one).
    Moved(PathBuf),
    /// The new path held a file with a broken schema; it was copied aside
    /// and a fresh store was bootstrapped in its place.
    Repaired { path: PathBuf, backup: PathBuf },
}

/// Shared, mutable binding to the current store location.
pub struct StoreHandle {
    path: Mutex<PathBuf>,
}

impl StoreHandle {
    pub fn new(path: PathBuf) -> Self {
        StoreHandle { path: Mutex::new(path) }
    }

    /// The path operations should currently run against.
    pub fn path(&self) -> PathBuf {
        self.path.lock().clone()
    }

    /// Rebinds the store to `requested`, closing the open interval in the
    /// old store at the relocation timestamp first so no interval keeps
    /// accruing in a file nobody writes to anymore. On any failure the
    /// binding is left untouched.
    pub fn relocate(&self, requested: &Path) -> Result<Relocation, StoreError> {
        let mut bound = self.path.lock();
        if *bound == requested {
            return Ok(Relocation::Unchanged);
        }

        let now = Local::now().naive_local();
        let outcome = rebind(&bound, requested, now).map_err(|e| {
            warn!(
                from = %bound.display(),
                to = %requested.display(),
                error = %e,
                "storage relocation failed, keeping previous path"
            );
            StoreError::InvalidConfig(requested.to_path_buf())
        })?;

        *bound = requested.to_path_buf();
        info!(path = %bound.display(), "activity store relocated");
        Ok(outcome)
    }
}

/// The validating step of the relocation sequence. Runs entirely against
/// the filesystem and the two store files; the caller commits the new
/// binding only when this returns `Ok`.
fn rebind(current: &Path, requested: &Path, now: NaiveDateTime) -> Result<Relocation, StoreError> {
    let outcome = if requested.exists() {
        // Validate before bootstrapping anything: a file that cannot even
        // be read as SQLite counts as invalid, not as a hard failure.
        let valid = match rusqlite::Connection::open(requested) {
            Ok(conn) => matches!(Db::validate_schema(&conn), Ok(true)),
            Err(_) => false,
        };
        if valid {
            // A valid store may itself carry a dangling interval from
            // whatever wrote it last; the new binding must start closed.
            let candidate = Db::open(requested)?;
            candidate.close_open_interval(now)?;
            Relocation::Moved(requested.to_path_buf())
        } else {
            let backup = Db::backup_and_repair(requested)?.ok_or_else(|| StoreError::InvalidConfig(requested.to_path_buf()))?;
            Relocation::Repaired {
                path: requested.to_path_buf(),
                backup,
            }
        }
    } else {
        Db::init(requested, now)?;
        Relocation::Moved(requested.to_path_buf())
    };

    // Seal the old store only once the new one is ready: whatever was open
    // ends at the relocation time. On the failure paths above the old store
    // is left untouched and keeps receiving writes.
    if current.exists() {
        let old = Db::open(current)?;
        old.close_open_interval(now)?;
    }

    Ok(outcome)
}
