//! Logging sinks
//!
//! Components that report progress take an explicitly constructed
//! `Arc<dyn LogSink>` instead of reaching for process-wide state. Every sink is
//! `Send + Sync` and serializes its writes, so the control loop thread and the
//! caller can log concurrently without interleaving partial lines.
//!
//! | Sink | Target |
//! |------|--------|
//! | [`LogCrateSink`] | `log` facade (installed by the binary via `env_logger`) |
//! | [`ConsoleSink`] | Prefixed lines on stdout / stderr |
//! | [`MemorySink`] | In-memory record, for tests and inspection |

use crate::config::{LoggingConfig, SinkKind};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Message severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Fixed-width prefix used by line-oriented sinks
    pub fn prefix(self) -> &'static str {
        match self {
            Severity::Info => "[INFO]",
            Severity::Warn => "[WARN]",
            Severity::Error => "[ERR ]",
        }
    }
}

impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => log::Level::Info,
            Severity::Warn => log::Level::Warn,
            Severity::Error => log::Level::Error,
        }
    }
}

/// Thread-safe, fire-and-forget message sink.
pub trait LogSink: Send + Sync {
    /// Record one message. Must not interleave with concurrent calls.
    fn log(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }
}

/// Shared handle to a sink
pub type SharedSink = Arc<dyn LogSink>;

/// Forwards to the `log` facade under the `robokit` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn log(&self, severity: Severity, message: &str) {
        log::log!(target: "robokit", log::Level::from(severity), "{}", message);
    }
}

struct ConsoleStreams {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

/// Writes `[INFO] msg` / `[WARN] msg` to the output stream and `[ERR ] msg` to
/// the error stream.
///
/// One lock covers both streams so a warning and an error issued from
/// different threads never share a line.
pub struct ConsoleSink {
    streams: Mutex<ConsoleStreams>,
}

impl ConsoleSink {
    /// Sink bound to the process stdout / stderr
    pub fn stdio() -> Self {
        Self::with_writers(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Sink bound to arbitrary writers
    pub fn with_writers(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self {
            streams: Mutex::new(ConsoleStreams { out, err }),
        }
    }
}

impl LogSink for ConsoleSink {
    fn log(&self, severity: Severity, message: &str) {
        let mut streams = self.streams.lock();
        let target = match severity {
            Severity::Error => &mut streams.err,
            Severity::Info | Severity::Warn => &mut streams.out,
        };
        // Fire-and-forget: a closed stdout must not take the control loop down
        let _ = writeln!(target, "{} {}", severity.prefix(), message);
        let _ = target.flush();
    }
}

/// Keeps every message in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded entries
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.lock().clone()
    }

    /// Recorded messages of one severity
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn log(&self, severity: Severity, message: &str) {
        self.entries.lock().push((severity, message.to_string()));
    }
}

/// Build the sink named by the logging configuration
pub fn sink_from_config(config: &LoggingConfig) -> SharedSink {
    match config.sink {
        SinkKind::Log => Arc::new(LogCrateSink),
        SinkKind::Console => Arc::new(ConsoleSink::stdio()),
    }
}
