use std::fmt;
use std::io;

use chrono::{DateTime, Local};

/// A single logged event: when it happened and what happened
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub logged_at: DateTime<Local>,
    pub description: String,
}

impl Event {
    /// Create an event stamped with the current local time
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            logged_at: Local::now(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.logged_at.format("%a %b %d %H:%M:%S %Y"),
            self.description
        )
    }
}

/// Append-only, chronologically ordered record of events
///
/// # Examples
///
/// ```
/// use event_log::EventLog;
///
/// let mut log = EventLog::new();
/// log.log_event("Created black hole: cygnus");
/// log.log_event("Created solar system: cygnus x-1");
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.report().lines().count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the end of the log
    pub fn log_event(&mut self, description: impl Into<String>) {
        let event = Event::new(description);
        tracing::info!(target: "event_log", "{}", event.description);
        self.events.push(event);
    }

    /// Move every event of `other` onto the end of this log, leaving `other`
    /// empty; timestamps are kept as they were
    pub fn append(&mut self, other: &mut EventLog) {
        self.events.append(&mut other.events);
    }

    /// Events in the order they were logged
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Human-readable report, one line per event in chronological order
    pub fn report(&self) -> String {
        self.events
            .iter()
            .map(|event| format!("{event}\n"))
            .collect()
    }

    /// Flush the report to a writer (stdout at shutdown, or a file)
    pub fn write_report(&self, mut writer: impl io::Write) -> io::Result<()> {
        for event in &self.events {
            writeln!(writer, "{event}")?;
        }
        writer.flush()
    }
}
