//! Window title records and maintenance operations.
//!
//! A title's primary key is the CRC-32 checksum of its text, so the same
//! string always maps to the same row without a lookup. The flip side is
//! inherited from the original storage format: two different strings whose
//! checksums collide are silently treated as one title. Callers that need
//! collision-free identity would have to change the on-disk id scheme.

use crate::db::db::Db;
use crate::libs::error::StoreError;
use rusqlite::{params, Connection};
use std::path::Path;

const SELECT_ALL: &str = "SELECT id, title, project_id FROM window_titles ORDER BY title";
const SELECT_EXISTS: &str = "SELECT COUNT(*) FROM window_titles WHERE id = ?1";
const ASSIGN_PROJECT: &str = "UPDATE window_titles SET project_id = ?2 WHERE id = ?1";
const DELETE_TITLE: &str = "DELETE FROM window_titles WHERE id = ?1";
const DELETE_TITLE_LOG: &str = "DELETE FROM window_log WHERE title_id = ?1";
const REASSIGN_LOG: &str = "UPDATE window_log SET title_id = ?2 WHERE title_id = ?1";

/// Derives the stable numeric id for a window title (masked unsigned
/// 32-bit CRC of the UTF-8 text).
pub fn title_id(title: &str) -> u32 {
    crc32fast::hash(title.as_bytes())
}

#[derive(Debug, Clone)]
pub struct WindowTitle {
    pub id: u32,
    pub title: String,
    pub project_id: i64,
}

pub struct Titles {
    conn: Connection,
}

impl Titles {
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let db = Db::open(path)?;
        Ok(Titles { conn: db.conn })
    }

    pub fn list(&mut self) -> Result<Vec<WindowTitle>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let rows = stmt.query_map([], |row| {
            Ok(WindowTitle {
                id: row.get::<_, i64>(0)? as u32,
                title: row.get(1)?,
                project_id: row.get(2)?,
            })
        })?;
        let mut titles = Vec::new();
        for row in rows {
            titles.push(row?);
        }
        Ok(titles)
    }

    /// Moves a title to another project.
    pub fn assign_project(&mut self, title_id: u32, project_id: i64) -> Result<(), StoreError> {
        let affected = self.conn.execute(ASSIGN_PROJECT, params![title_id as i64, project_id])?;
        if affected == 0 {
            return Err(StoreError::NotFound(title_id as i64));
        }
        Ok(())
    }

    /// Removes a title and all its logged intervals. Irreversible.
    pub fn delete(&mut self, title_id: u32) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_TITLE_LOG, params![title_id as i64])?;
        let affected = tx.execute(DELETE_TITLE, params![title_id as i64])?;
        if affected == 0 {
            return Err(StoreError::NotFound(title_id as i64));
        }
        tx.commit()?;
        Ok(())
    }

    /// Merges duplicate titles: every interval owned by a source title is
    /// reassigned to the target (the first id), then the source rows are
    /// deleted. The target and at least one source must exist.
    ///
    /// Returns the number of source titles merged away.
    pub fn merge(&mut self, ids: &[u32]) -> Result<usize, StoreError> {
        let (&target, sources) = match ids.split_first() {
            Some(split) if !split.1.is_empty() => split,
            _ => return Err(StoreError::NotFound(ids.first().copied().unwrap_or(0) as i64)),
        };

        let tx = self.conn.transaction()?;
        if !exists(&tx, target)? {
            return Err(StoreError::NotFound(target as i64));
        }
        let existing: Vec<u32> = sources
            .iter()
            .copied()
            .filter(|&id| id != target)
            .map(|id| exists(&tx, id).map(|found| (id, found)))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|(_, found)| *found)
            .map(|(id, _)| id)
            .collect();
        if existing.is_empty() {
            return Err(StoreError::NotFound(sources[0] as i64));
        }

        for &source in &existing {
            tx.execute(REASSIGN_LOG, params![source as i64, target as i64])?;
            tx.execute(DELETE_TITLE, params![source as i64])?;
        }
        tx.commit()?;
        Ok(existing.len())
    }
}

fn exists(conn: &Connection, id: u32) -> Result<bool, StoreError> {
    let count: i64 = conn.query_row(SELECT_EXISTS, params![id as i64], |row| row.get(0))?;
    Ok(count > 0)
}
