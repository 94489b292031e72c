//! Rolling Logger
//!
//! A `tracing` layer that formats each event as one line, keeps the most
//! recent lines in a circular buffer and hands every line to a [`LogSink`].
//! The browser app plugs in a console sink; tests read the buffer.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Destination of formatted lines
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, level: Level, line: &str);
}

/// Sink that drops everything; the buffer still records
pub struct NullSink;

impl LogSink for NullSink {
    fn write(&self, _level: Level, _line: &str) {}
}

/// Shared handle on the recent lines
#[derive(Clone, Default)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    /// Recent lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn push(&self, line: String, capacity: usize) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

pub struct RollingLayer {
    buffer: LogBuffer,
    capacity: usize,
    max_level: Level,
    sink: Box<dyn LogSink>,
}

impl RollingLayer {
    pub fn new(capacity: usize, max_level: Level, sink: impl LogSink) -> Self {
        Self {
            buffer: LogBuffer::default(),
            capacity: capacity.max(1),
            max_level,
            sink: Box::new(sink),
        }
    }

    pub fn buffer(&self) -> LogBuffer {
        self.buffer.clone()
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        // More verbose levels compare greater
        if *meta.level() > self.max_level {
            return;
        }

        let mut fields = LineVisitor::default();
        event.record(&mut fields);
        let line = format!(
            "[{} {} {}] {}{}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            meta.level(),
            meta.target(),
            fields.message,
            fields.rest
        );

        self.sink.write(*meta.level(), &line);
        self.buffer.push(line, self.capacity);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    rest: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.rest, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.rest, " {}={:?}", field.name(), value);
        }
    }
}

/// Install the layer as global subscriber and return its buffer
pub fn init_logger(capacity: usize, max_level: Level, sink: impl LogSink) -> Result<LogBuffer, TryInitError> {
    let layer = RollingLayer::new(capacity, max_level, sink);
    let buffer = layer.buffer();
    tracing_subscriber::registry().with(layer).try_init()?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::subscriber::with_default;

    struct CollectSink(Arc<Mutex<Vec<(Level, String)>>>);

    impl LogSink for CollectSink {
        fn write(&self, level: Level, line: &str) {
            self.0.lock().unwrap().push((level, line.to_string()));
        }
    }

    #[test]
    fn test_buffer_keeps_most_recent() {
        let layer = RollingLayer::new(2, Level::INFO, NullSink);
        let buffer = layer.buffer();
        let subscriber = tracing_subscriber::registry().with(layer);

        with_default(subscriber, || {
            tracing::info!("first");
            tracing::info!("second");
            tracing::info!("third");
        });

        let lines = buffer.snapshot();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("second"));
        assert!(lines[1].ends_with("third"));
    }

    #[test]
    fn test_level_filter_and_fields() {
        let collected = Arc::new(Mutex::new(Vec::new()));
        let layer = RollingLayer::new(16, Level::INFO, CollectSink(collected.clone()));
        let subscriber = tracing_subscriber::registry().with(layer);

        with_default(subscriber, || {
            tracing::debug!("too verbose");
            tracing::warn!(count = 3, view = "tasks", "load failed");
        });

        let collected = collected.lock().unwrap();
        assert_eq!(collected.len(), 1);
        let (level, line) = &collected[0];
        assert_eq!(*level, Level::WARN);
        assert!(line.contains("WARN"));
        assert!(line.ends_with("load failed count=3 view=tasks"));
    }
}
