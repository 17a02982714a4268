//! # Walt - Window Activity Logging Tool
//!
//! A background logger that samples the foreground window title, stores
//! activity as non-overlapping time intervals in SQLite, and summarizes
//! usage per title and per project.
//!
//! ## Features
//!
//! - **Activity Capture**: Background loop sampling the foreground window
//! - **Temporal Log**: Interval store with a single always-open current interval
//! - **Summaries**: Per-title and per-project duration reports
//! - **Projects**: Group titles under projects with a protected default
//! - **Hot Reconfiguration**: Live polling-interval changes and storage relocation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use walt::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
