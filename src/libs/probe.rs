//! Sampling seam between the monitor loop and the operating system.
//!
//! The monitor only ever asks two questions: what is the foreground window
//! title, and is the session idle. Platform backends (win32, X11, macOS
//! accessibility) implement this trait outside the core; tests substitute
//! scripted probes.

use anyhow::Result;

pub trait ActivityProbe: Send + Sync {
    /// Title of the current foreground window, or an empty string when no
    /// window has focus.
    fn foreground_title(&self) -> Result<String>;

    /// Whether the session is locked or suspended. While idle, sampling is
    /// skipped entirely and the open interval keeps accruing.
    fn is_idle(&self) -> Result<bool>;
}

/// Probe used when no platform backend is wired in: reports no foreground
/// window and an always-active session.
pub struct NullProbe;

impl ActivityProbe for NullProbe {
    fn foreground_title(&self) -> Result<String> {
        Ok(String::new())
    }

    fn is_idle(&self) -> Result<bool> {
        Ok(false)
    }
}
