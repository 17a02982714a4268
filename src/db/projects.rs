//! Project lifecycle operations.
//!
//! Projects group window titles for reporting. Project id 1 ("Misc") is the
//! reserved default every new title is assigned to; it can never be renamed
//! or deleted.

use crate::db::db::Db;
use crate::libs::error::StoreError;
use rusqlite::{params, Connection, ErrorCode};
use std::path::Path;

pub const DEFAULT_PROJECT_ID: i64 = 1;

const INSERT_PROJECT: &str = "INSERT INTO projects (name) VALUES (?1)";
const RENAME_PROJECT: &str = "UPDATE projects SET name = ?2 WHERE id = ?1";
const DELETE_PROJECT: &str = "DELETE FROM projects WHERE id = ?1";
const REASSIGN_TITLES: &str = "UPDATE window_titles SET project_id = ?2 WHERE project_id = ?1";
const DELETE_PROJECT_LOG: &str = "DELETE FROM window_log WHERE title_id IN (SELECT id FROM window_titles WHERE project_id = ?1)";
const DELETE_PROJECT_TITLES: &str = "DELETE FROM window_titles WHERE project_id = ?1";
const SELECT_ALL: &str = "SELECT id, name FROM projects ORDER BY name";

#[derive(Debug, Clone)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

pub struct Projects {
    conn: Connection,
}

impl Projects {
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let db = Db::open(path)?;
        Ok(Projects { conn: db.conn })
    }

    /// Creates a project and returns its id. Fails with `Duplicate` when a
    /// project with the same name already exists.
    pub fn create(&mut self, name: &str) -> Result<i64, StoreError> {
        self.conn.execute(INSERT_PROJECT, params![name]).map_err(|e| duplicate_or(e, name))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Renames a project. The default project is protected.
    pub fn rename(&mut self, id: i64, name: &str) -> Result<(), StoreError> {
        if id == DEFAULT_PROJECT_ID {
            return Err(StoreError::Protected);
        }
        let affected = self.conn.execute(RENAME_PROJECT, params![id, name]).map_err(|e| duplicate_or(e, name))?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Deletes a project. With `cascade_titles`, its titles and all their
    /// intervals are removed; otherwise the titles are reassigned to the
    /// default project. The default project is protected.
    pub fn delete(&mut self, id: i64, cascade_titles: bool) -> Result<(), StoreError> {
        if id == DEFAULT_PROJECT_ID {
            return Err(StoreError::Protected);
        }
        let tx = self.conn.transaction()?;
        if cascade_titles {
            tx.execute(DELETE_PROJECT_LOG, params![id])?;
            tx.execute(DELETE_PROJECT_TITLES, params![id])?;
        } else {
            tx.execute(REASSIGN_TITLES, params![id, DEFAULT_PROJECT_ID])?;
        }
        let affected = tx.execute(DELETE_PROJECT, params![id])?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        tx.commit()?;
        Ok(())
    }

    pub fn list(&mut self) -> Result<Vec<Project>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let rows = stmt.query_map([], |row| {
            Ok(Project {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        let mut projects = Vec::new();
        for row in rows {
            projects.push(row?);
        }
        Ok(projects)
    }
}

fn duplicate_or(e: rusqlite::Error, name: &str) -> StoreError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation => {
            StoreError::Duplicate(name.to_string())
        }
        _ => StoreError::Storage(e),
    }
}
