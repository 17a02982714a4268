//! Core library modules for the walt application.
//!
//! Configuration, messaging and storage-path plumbing live next to the
//! activity engine itself: the sampling monitor, the probe seam it samples
//! through, and the tracker that ties monitor and store together.

pub mod config;
pub mod data_storage;
pub mod error;
pub mod filter;
pub mod messages;
pub mod monitor;
pub mod probe;
pub mod tracker;
pub mod view;
