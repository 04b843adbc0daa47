//! Human-readable event log for renderers.

pub mod event_log;

pub use event_log::{EventLog, LogEntry, LogSource};
