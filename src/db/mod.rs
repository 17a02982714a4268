//! Database layer for the walt application.
//!
//! SQLite-backed persistence for the activity log. The store is one file
//! with three tables (projects, window titles, logged intervals); schema
//! bootstrap is idempotent and every logical operation opens its own
//! connection, so there is no long-lived shared handle to coordinate.

/// Core connection handling, schema bootstrap, validation and repair.
pub mod db;

/// Interval write path (`log_transition`) and usage summaries.
pub mod activity_log;

/// Project lifecycle operations with the protected default project.
pub mod projects;

/// Window title records: CRC-32 identity, assignment, delete and merge.
pub mod titles;

/// Storage-path binding and hot relocation with rollback.
pub mod storage;
