//! Interval write path and usage aggregation.
//!
//! `window_log` rows are non-overlapping activity intervals; the single row
//! with `end IS NULL` is the interval of the title currently in the
//! foreground. `log_transition` is the only writer on the hot path and runs
//! as one transaction, so the at-most-one-open-interval invariant holds even
//! if the process dies mid-write.

use crate::db::db::Db;
use crate::db::titles::title_id;
use crate::libs::error::StoreError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const INSERT_TITLE: &str = "INSERT OR IGNORE INTO window_titles (id, title, project_id) VALUES (?1, ?2, 1)";
const CLOSE_OPEN: &str = "UPDATE window_log SET end = ?1 WHERE end IS NULL";
const INSERT_INTERVAL: &str = "INSERT INTO window_log (title_id, start) VALUES (?1, ?2)";
const SELECT_OPEN: &str = "SELECT id, title_id, start, end FROM window_log WHERE end IS NULL";
const SELECT_ALL: &str = "SELECT id, title_id, start, end FROM window_log ORDER BY start, id";

// Overlap of each interval with the query window, in whole seconds. An open
// interval runs through the window end for summary purposes.
const SELECT_TITLE_SUMMARY: &str = "
    SELECT wt.title,
           CAST(SUM(MAX(0,
               MIN(CAST(strftime('%s', COALESCE(wl.end, ?2)) AS INTEGER), CAST(strftime('%s', ?2) AS INTEGER))
             - MAX(CAST(strftime('%s', wl.start) AS INTEGER), CAST(strftime('%s', ?1) AS INTEGER))
           )) AS INTEGER) AS duration
    FROM window_log wl
    JOIN window_titles wt ON wl.title_id = wt.id
    WHERE wl.start <= ?2 AND (wl.end >= ?1 OR wl.end IS NULL)
    GROUP BY wt.id
    ORDER BY duration DESC";
const SELECT_PROJECT_SUMMARY: &str = "
    SELECT p.id, p.name,
           CAST(SUM(MAX(0,
               MIN(CAST(strftime('%s', COALESCE(wl.end, ?2)) AS INTEGER), CAST(strftime('%s', ?2) AS INTEGER))
             - MAX(CAST(strftime('%s', wl.start) AS INTEGER), CAST(strftime('%s', ?1) AS INTEGER))
           )) AS INTEGER) AS duration
    FROM window_log wl
    JOIN window_titles wt ON wl.title_id = wt.id
    JOIN projects p ON wt.project_id = p.id
    WHERE wl.start <= ?2 AND (wl.end >= ?1 OR wl.end IS NULL)
    GROUP BY p.id
    HAVING duration > 0
    ORDER BY duration DESC";

/// One logged activity interval. `end` is `None` while the title is still
/// in the foreground.
#[derive(Debug, Clone)]
pub struct LogInterval {
    pub id: i64,
    pub title_id: u32,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

pub struct ActivityLog {
    conn: Connection,
}

impl ActivityLog {
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let db = Db::open(path)?;
        Ok(ActivityLog { conn: db.conn })
    }

    /// Records an accepted title transition at `timestamp`: upserts the
    /// title (new titles land in the default project; an existing title
    /// keeps its assignment), closes the currently open interval and opens
    /// a new one. All three steps commit together or not at all.
    pub fn log_transition(&mut self, title: &str, timestamp: NaiveDateTime) -> Result<(), StoreError> {
        let id = title_id(title);
        let tx = self.conn.transaction()?;
        tx.execute(INSERT_TITLE, params![id as i64, title])?;
        tx.execute(CLOSE_OPEN, params![timestamp])?;
        tx.execute(INSERT_INTERVAL, params![id as i64, timestamp])?;
        tx.commit()?;
        Ok(())
    }

    /// Per-title activity within `[start, end]`, in whole seconds of
    /// overlap, longest first.
    pub fn title_summary(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<(String, i64)>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_TITLE_SUMMARY)?;
        let rows = stmt.query_map(params![start, end], |row| Ok((row.get(0)?, row.get(1)?)))?;
        let mut summary = Vec::new();
        for row in rows {
            summary.push(row?);
        }
        Ok(summary)
    }

    /// Per-project activity within `[start, end]`; zero-duration projects
    /// are dropped.
    pub fn project_summary(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<(i64, String, i64)>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_PROJECT_SUMMARY)?;
        let rows = stmt.query_map(params![start, end], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;
        let mut summary = Vec::new();
        for row in rows {
            summary.push(row?);
        }
        Ok(summary)
    }

    /// The currently open interval, if any. There is at most one.
    pub fn open_interval(&mut self) -> Result<Option<LogInterval>, StoreError> {
        let interval = self
            .conn
            .query_row(SELECT_OPEN, [], |row| {
                Ok(LogInterval {
                    id: row.get(0)?,
                    title_id: row.get::<_, i64>(1)? as u32,
                    start: row.get(2)?,
                    end: row.get(3)?,
                })
            })
            .optional()?;
        Ok(interval)
    }

    /// All intervals ordered by start time.
    pub fn intervals(&mut self) -> Result<Vec<LogInterval>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let rows = stmt.query_map([], |row| {
            Ok(LogInterval {
                id: row.get(0)?,
                title_id: row.get::<_, i64>(1)? as u32,
                start: row.get(2)?,
                end: row.get(3)?,
            })
        })?;
        let mut intervals = Vec::new();
        for row in rows {
            intervals.push(row?);
        }
        Ok(intervals)
    }
}
