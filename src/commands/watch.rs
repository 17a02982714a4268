//! Runs the foreground activity monitor until the user stops it.
//!
//! While the monitor runs, the configuration file is polled for changes;
//! a new polling interval or database path is applied live through the
//! tracker. A relocation that fails leaves the store bound to its previous
//! path and only prints a warning.

use crate::db::db::Db;
use crate::db::storage::{Relocation, StoreHandle};
use crate::libs::config::{Config, CONFIG_FILE_NAME};
use crate::libs::data_storage::DataStorage;
use crate::libs::filter::TitleFilter;
use crate::libs::messages::Message;
use crate::libs::probe::NullProbe;
use crate::libs::tracker::Tracker;
use crate::{msg_error, msg_info, msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use std::{fs, thread};
use tracing::warn;

const CONFIG_POLL: Duration = Duration::from_secs(2);

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let db_path = config.database_path()?;

    // Process-start repair: an interval left open by an unclean shutdown is
    // closed at this timestamp before any sampling begins.
    Db::init(&db_path, Local::now().naive_local())?;

    let filter = TitleFilter::new(&config.ignore_patterns)?;
    let store = Arc::new(StoreHandle::new(db_path));
    let poll_interval = config.poll_interval();

    // Platform window probes hook in here; the null probe keeps the loop
    // running without a backend.
    let tracker = Tracker::new(poll_interval, Box::new(NullProbe), filter, store);
    tracker.start()?;
    msg_info!(Message::MonitorStarted { poll_interval });
    msg_info!(Message::MonitorPressEnterToStop);

    // Stdin is read on its own thread so the main loop can keep polling
    // the configuration file.
    let (stop_tx, stop_rx) = mpsc::channel();
    thread::spawn(move || {
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
        let _ = stop_tx.send(());
    });

    let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
    let mut last_seen = modified_at(&config_path);
    loop {
        if stop_rx.recv_timeout(CONFIG_POLL).is_ok() {
            break;
        }
        let current = modified_at(&config_path);
        if current != last_seen {
            last_seen = current;
            apply_config_change(&tracker);
        }
    }

    tracker.stop();
    msg_success!(Message::MonitorStopped);
    Ok(())
}

fn modified_at(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

fn apply_config_change(tracker: &Tracker) {
    let config = match Config::read() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "failed to reload configuration, keeping current settings");
            return;
        }
    };
    let db_path = match config.database_path() {
        Ok(path) => path,
        Err(e) => {
            warn!(error = %e, "failed to resolve database path, keeping current settings");
            return;
        }
    };

    match tracker.on_config_change(config.poll_interval(), &db_path) {
        Ok(Relocation::Unchanged) => {}
        Ok(Relocation::Moved(path)) => {
            msg_info!(Message::StorageBound(path.display().to_string()));
        }
        Ok(Relocation::Repaired { path, backup }) => {
            msg_info!(Message::StorageBound(path.display().to_string()));
            msg_warning!(Message::StorageRepaired(backup.display().to_string()));
        }
        Err(_) => {
            msg_error!(Message::StorageRelocationFailed(db_path.display().to_string()));
        }
    }
}
