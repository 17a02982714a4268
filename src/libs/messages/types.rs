use std::fmt;

/// User-facing messages emitted by commands and the watch loop.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptPollInterval,
    PromptDatabasePath,
    PromptIgnorePatterns,

    // === MONITOR MESSAGES ===
    MonitorStarted { poll_interval: u64 },
    MonitorStopped,
    MonitorPressEnterToStop,

    // === STORAGE MESSAGES ===
    StorageBound(String),
    StorageRepaired(String),
    StorageRelocationFailed(String),

    // === PROJECT MESSAGES ===
    ProjectCreated(i64),
    ProjectRenamed,
    ProjectDeleted,

    // === TITLE MESSAGES ===
    TitleDeleted,
    TitlesMerged(usize),
    TitleAssigned,

    // === SUMMARY MESSAGES ===
    SummaryHeader(String),
    SummaryEmpty,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::ConfigSaved => write!(f, "Configuration saved"),
            Message::PromptPollInterval => write!(f, "Polling interval in seconds"),
            Message::PromptDatabasePath => write!(f, "Database file path (empty for default)"),
            Message::PromptIgnorePatterns => write!(f, "Title ignore patterns, comma separated (regex)"),
            Message::MonitorStarted { poll_interval } => {
                write!(f, "Monitor started (polling every {} s)", poll_interval)
            }
            Message::MonitorStopped => write!(f, "Monitor stopped"),
            Message::MonitorPressEnterToStop => write!(f, "Watching window activity. Press Enter to stop."),
            Message::StorageBound(path) => write!(f, "Activity store bound to {}", path),
            Message::StorageRepaired(backup) => write!(f, "Invalid store repaired, backup kept at {}", backup),
            Message::StorageRelocationFailed(path) => write!(f, "Failed to relocate store to {}, keeping previous path", path),
            Message::ProjectCreated(id) => write!(f, "Project created with id {}", id),
            Message::ProjectRenamed => write!(f, "Project renamed"),
            Message::ProjectDeleted => write!(f, "Project deleted"),
            Message::TitleDeleted => write!(f, "Title and its intervals deleted"),
            Message::TitlesMerged(count) => write!(f, "Merged {} titles", count),
            Message::TitleAssigned => write!(f, "Title assigned to project"),
            Message::SummaryHeader(date) => write!(f, "Activity for {}", date),
            Message::SummaryEmpty => write!(f, "No activity recorded for this period"),
        }
    }
}
