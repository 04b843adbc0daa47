//! Append-only record of game events.
//!
//! Each entry carries a message for display, the source tag used for
//! styling, the match it belongs to, and a global sequence number. The log
//! survives match restarts.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Actor;

/// Who an entry is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogSource {
    Player,
    Computer,
    /// Combat results and match outcomes.
    Battle,
}

impl From<Actor> for LogSource {
    fn from(actor: Actor) -> Self {
        match actor {
            Actor::Player => LogSource::Player,
            Actor::Computer => LogSource::Computer,
        }
    }
}

/// A single log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Position in the log, starting at 0.
    pub sequence: u64,

    /// Match the entry was written in (1-based).
    pub match_number: u32,

    pub source: LogSource,

    pub message: String,
}

/// Ordered, append-only event log.
///
/// Uses `im::Vector` so snapshots and clones are O(1).
///
/// ## Example
///
/// ```
/// use monster_duel::log::{EventLog, LogSource};
///
/// let mut log = EventLog::new();
/// log.push(1, LogSource::Player, "You drew Knight!");
/// log.push(1, LogSource::Computer, "Computer drew a card");
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.since(1).count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vector<LogEntry>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its sequence number.
    pub fn push(&mut self, match_number: u32, source: LogSource, message: impl Into<String>) -> u64 {
        let sequence = self.entries.len() as u64;
        let message = message.into();
        tracing::debug!(sequence, match_number, ?source, "{}", message);
        self.entries.push_back(LogEntry {
            sequence,
            match_number,
            source,
            message,
        });
        sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Entries with `sequence >= from`.
    pub fn since(&self, from: u64) -> impl Iterator<Item = &LogEntry> {
        let start = usize::try_from(from).unwrap_or(usize::MAX).min(self.entries.len());
        self.entries.iter().skip(start)
    }

    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Messages only, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }
}
