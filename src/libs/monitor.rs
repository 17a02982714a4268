//! Background sampling loop for foreground window activity.
//!
//! The monitor owns one dedicated thread that periodically asks the
//! [`ActivityProbe`] for the foreground window title and reports title
//! transitions to a handler injected at construction. The handler decides
//! whether a transition is accepted (logged); a rejected transition leaves
//! the remembered title unchanged so the same rejected title does not
//! re-trigger on every tick.
//!
//! Idle policy: while the probe reports the session as idle, no sample is
//! taken and no transition is emitted, so the interval that was open before
//! the lock keeps accruing time. That is deliberate - lock-screen time is
//! not an activity of its own.

use crate::libs::error::StoreError;
use crate::libs::probe::ActivityProbe;
use chrono::{Local, NaiveDateTime};
use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Decides whether a detected transition is accepted. Receives the
/// transition timestamp, the previous title and the new title.
pub type TransitionHandler = Arc<dyn Fn(NaiveDateTime, &str, &str) -> bool + Send + Sync>;

/// State shared between the sampling loop and reconfiguration calls.
///
/// Mutated only under the single monitor mutex; the lock is never held
/// across a handler call or a sleep.
struct LoopState {
    running: bool,
    exited: bool,
    /// Increments on every `start()`; a loop exits when it no longer owns
    /// the current epoch, so a wedged old loop can never tick again after
    /// a restart.
    epoch: u64,
    poll_interval: Duration,
    last_title: String,
}

struct Shared {
    state: Mutex<LoopState>,
    wakeup: Condvar,
    probe: Box<dyn ActivityProbe>,
    handler: TransitionHandler,
}

pub struct Monitor {
    shared: Arc<Shared>,
    thread: Mutex<Option<JoinHandle<()>>>,
}

impl Monitor {
    /// Creates a monitor around a probe and a transition handler.
    ///
    /// The handler is fixed for the lifetime of the monitor; replacing it
    /// mid-run is not supported.
    pub fn new(poll_interval_secs: u64, probe: Box<dyn ActivityProbe>, handler: TransitionHandler) -> Self {
        let state = LoopState {
            running: false,
            exited: true,
            epoch: 0,
            poll_interval: Duration::from_secs(poll_interval_secs.max(1)),
            last_title: String::new(),
        };
        Monitor {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                wakeup: Condvar::new(),
                probe,
                handler,
            }),
            thread: Mutex::new(None),
        }
    }

    /// Starts the sampling loop. No-op if the loop is already running;
    /// safe to call again after a prior `stop()`.
    pub fn start(&self) -> Result<(), StoreError> {
        let epoch = {
            let mut state = self.shared.state.lock();
            if state.running {
                return Ok(());
            }
            state.running = true;
            state.exited = false;
            state.epoch += 1;
            state.epoch
        };

        let shared = self.shared.clone();
        let handle = thread::Builder::new()
            .name("walt-monitor".into())
            .spawn(move || Self::run_loop(shared, epoch))
            .map_err(|e| {
                let mut state = self.shared.state.lock();
                state.running = false;
                state.exited = true;
                StoreError::Io(e)
            })?;
        *self.thread.lock() = Some(handle);
        Ok(())
    }

    /// Signals the loop to exit and waits for it, bounded by one polling
    /// interval plus a second. A transition already in flight is allowed to
    /// complete; a wedged loop is abandoned rather than blocked on.
    pub fn stop(&self) {
        let timeout = {
            let mut state = self.shared.state.lock();
            state.running = false;
            state.poll_interval + Duration::from_secs(1)
        };
        self.shared.wakeup.notify_all();

        let deadline = Instant::now() + timeout;
        let exited = {
            let mut state = self.shared.state.lock();
            while !state.exited {
                let now = Instant::now();
                if now >= deadline || self.shared.wakeup.wait_for(&mut state, deadline - now).timed_out() {
                    break;
                }
            }
            state.exited
        };

        if let Some(handle) = self.thread.lock().take() {
            if exited {
                let _ = handle.join();
            } else {
                warn!("monitor loop did not exit within the stop timeout, detaching it");
            }
        }
    }

    /// Updates the polling interval, clamped to at least one second. The
    /// change takes effect at the next wait; a sleep already in progress is
    /// not interrupted and the loop is not restarted.
    pub fn set_poll_interval(&self, secs: u64) {
        let mut state = self.shared.state.lock();
        state.poll_interval = Duration::from_secs(secs.max(1));
    }

    pub fn poll_interval(&self) -> u64 {
        self.shared.state.lock().poll_interval.as_secs()
    }

    pub fn is_running(&self) -> bool {
        self.shared.state.lock().running
    }

    /// The most recently accepted title (empty before the first sample).
    pub fn last_title(&self) -> String {
        self.shared.state.lock().last_title.clone()
    }

    fn run_loop(shared: Arc<Shared>, epoch: u64) {
        loop {
            {
                let state = shared.state.lock();
                if !state.running || state.epoch != epoch {
                    break;
                }
            }

            Self::tick(&shared);

            let mut state = shared.state.lock();
            if !state.running || state.epoch != epoch {
                break;
            }
            let interval = state.poll_interval;
            shared.wakeup.wait_for(&mut state, interval);
            if !state.running || state.epoch != epoch {
                break;
            }
        }

        let mut state = shared.state.lock();
        if state.epoch == epoch {
            state.exited = true;
        }
        shared.wakeup.notify_all();
    }

    /// One sampling step. Probe failures are logged and the tick skipped;
    /// a failed tick never terminates the loop.
    fn tick(shared: &Shared) {
        match shared.probe.is_idle() {
            Ok(true) => return,
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "idle probe failed, skipping tick");
                return;
            }
        }

        let title = match shared.probe.foreground_title() {
            Ok(title) => title,
            Err(e) => {
                warn!(error = %e, "window probe failed, skipping tick");
                return;
            }
        };

        let last = shared.state.lock().last_title.clone();
        if title == last {
            return;
        }

        let timestamp = Local::now().naive_local();
        if (shared.handler)(timestamp, &last, &title) {
            shared.state.lock().last_title = title;
        } else {
            debug!(title = %title, "transition rejected by handler");
        }
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        self.stop();
    }
}
