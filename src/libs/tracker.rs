//! Glue between the monitor, the store and the configuration layer.
//!
//! The tracker is what the surrounding application talks to: it owns the
//! monitor and the store binding, wires the transition handler that writes
//! accepted transitions to the store, and reacts to configuration changes
//! (new polling interval, new storage path).

use crate::db::activity_log::ActivityLog;
use crate::db::storage::{Relocation, StoreHandle};
use crate::libs::error::StoreError;
use crate::libs::filter::TitleFilter;
use crate::libs::monitor::{Monitor, TransitionHandler};
use crate::libs::probe::ActivityProbe;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

pub struct Tracker {
    monitor: Monitor,
    store: Arc<StoreHandle>,
}

impl Tracker {
    /// Builds the monitor around a handler that filters titles and logs
    /// accepted transitions against the store's current path.
    ///
    /// The handler returns `false` both for filtered titles and for failed
    /// writes; in the failure case the monitor keeps its remembered title,
    /// so the same transition is retried the next time the title differs.
    pub fn new(poll_interval: u64, probe: Box<dyn ActivityProbe>, filter: TitleFilter, store: Arc<StoreHandle>) -> Self {
        let handler_store = store.clone();
        let handler: TransitionHandler = Arc::new(move |timestamp, _old, new| {
            if !filter.accepts(new) {
                return false;
            }
            let result = ActivityLog::new(&handler_store.path()).and_then(|mut log| log.log_transition(new, timestamp));
            match result {
                Ok(()) => true,
                Err(e) => {
                    warn!(title = %new, error = %e, "failed to log transition");
                    false
                }
            }
        });

        Tracker {
            monitor: Monitor::new(poll_interval, probe, handler),
            store,
        }
    }

    pub fn start(&self) -> Result<(), StoreError> {
        self.monitor.start()
    }

    pub fn stop(&self) {
        self.monitor.stop();
    }

    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Applies a configuration change: the new polling interval is visible
    /// at the monitor's next wait, and the store is relocated with rollback
    /// on failure. Relocation errors are returned so the caller can report
    /// them; the monitor keeps running against the previous path.
    pub fn on_config_change(&self, poll_interval: u64, storage_path: &Path) -> Result<Relocation, StoreError> {
        self.monitor.set_poll_interval(poll_interval);
        self.store.relocate(storage_path)
    }
}
