//! Core connection handling and schema management for the activity store.
//!
//! The store is a single SQLite file with three tables: `projects`,
//! `window_titles` and `window_log`. Schema bootstrap is idempotent and runs
//! on every open, so any module can open the store without ordering
//! concerns. Closing dangling open intervals is separate ([`Db::init`])
//! because it must happen only at process start or re-initialization, never
//! in the middle of a live run.

use crate::libs::error::StoreError;
use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DB_FILE_NAME: &str = "walt.db";

const SCHEMA_PROJECTS: &str = "CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
)";
const SCHEMA_TITLES: &str = "CREATE TABLE IF NOT EXISTS window_titles (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL UNIQUE,
    project_id INTEGER NOT NULL DEFAULT 1,
    FOREIGN KEY (project_id) REFERENCES projects(id)
)";
const SCHEMA_LOG: &str = "CREATE TABLE IF NOT EXISTS window_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title_id INTEGER NOT NULL,
    start TIMESTAMP NOT NULL,
    end TIMESTAMP,
    FOREIGN KEY (title_id) REFERENCES window_titles(id)
)";

/// Project id 1 is the reserved default; every new title lands there.
const INSERT_DEFAULT_PROJECT: &str = "INSERT OR IGNORE INTO projects (id, name) VALUES (1, 'Misc')";
const CLOSE_DANGLING: &str = "UPDATE window_log SET end = ?1 WHERE end IS NULL";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the store at `path`, creating parent directories and running
    /// the idempotent schema bootstrap. Safe against an already-populated
    /// store; no data is touched.
    pub fn open(path: &Path) -> Result<Db, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute(SCHEMA_PROJECTS, [])?;
        conn.execute(SCHEMA_TITLES, [])?;
        conn.execute(SCHEMA_LOG, [])?;
        conn.execute(INSERT_DEFAULT_PROJECT, [])?;
        Ok(Db { conn })
    }

    /// Opens the store and repairs state left by an unclean shutdown:
    /// any interval still open from a previous run is closed at `now`.
    pub fn init(path: &Path, now: NaiveDateTime) -> Result<Db, StoreError> {
        let db = Self::open(path)?;
        let closed = db.conn.execute(CLOSE_DANGLING, params![now])?;
        if closed > 0 {
            info!(closed, "closed dangling open intervals from a previous run");
        }
        Ok(db)
    }

    /// Closes any open interval at `now`. Used during re-initialization and
    /// storage relocation; the normal write path closes intervals inside
    /// its own transaction instead.
    pub fn close_open_interval(&self, now: NaiveDateTime) -> Result<usize, StoreError> {
        Ok(self.conn.execute(CLOSE_DANGLING, params![now])?)
    }

    /// Checks that an existing file carries the expected schema: all three
    /// tables with their columns, and no foreign key violations.
    pub fn validate_schema(conn: &Connection) -> Result<bool, StoreError> {
        let expected: [(&str, &[&str]); 3] = [
            ("projects", &["id", "name"]),
            ("window_titles", &["id", "title", "project_id"]),
            ("window_log", &["id", "title_id", "start", "end"]),
        ];

        for (table, columns) in expected {
            let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
            let found: Vec<String> = stmt
                .query_map([], |row| row.get::<_, String>(1))?
                .collect::<Result<_, _>>()?;
            if columns.iter().any(|c| !found.iter().any(|f| f == c)) {
                return Ok(false);
            }
        }

        let mut stmt = conn.prepare("PRAGMA foreign_key_check")?;
        let mut rows = stmt.query([])?;
        Ok(rows.next()?.is_none())
    }

    /// Moves an unusable store file aside to a timestamped backup and
    /// bootstraps a fresh one in its place. Returns the backup path, if a
    /// file existed to back up.
    pub fn backup_and_repair(path: &Path) -> Result<Option<PathBuf>, StoreError> {
        let mut backup = None;
        if path.exists() {
            let stamp = Local::now().format("%Y%m%d_%H%M%S");
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("walt");
            let suffix = path.extension().and_then(|s| s.to_str()).map(|e| format!(".{}", e)).unwrap_or_default();
            let backup_path = path.with_file_name(format!("{}_backup_{}{}", stem, stamp, suffix));
            fs::copy(path, &backup_path)?;
            fs::remove_file(path)?;
            backup = Some(backup_path);
        }
        Db::init(path, Local::now().naive_local())?;
        Ok(backup)
    }
}
