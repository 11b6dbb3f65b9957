//! Test utilities for observing what the helper logs

use std::io;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink for formatted `tracing` output.
///
/// Clones share the same buffer, so a clone can be moved into a worker thread
/// while the original is inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscriber writing every event at DEBUG and above into this capture.
    ///
    /// Install it with `tracing::subscriber::with_default` around the code under test.
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(Level::DEBUG)
            .finish()
    }

    /// Everything captured so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Number of non-empty log lines
    pub fn line_count(&self) -> usize {
        self.contents()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .count()
    }

    /// Number of log lines containing `needle`
    pub fn lines_containing(&self, needle: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Writer handed out per event by [`LogCapture`]
pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_records_events() {
        let capture = LogCapture::new();

        tracing::subscriber::with_default(capture.subscriber(), || {
            tracing::info!("first event");
            tracing::warn!("second event");
            tracing::trace!("filtered out");
        });

        assert_eq!(capture.line_count(), 2);
        assert_eq!(capture.lines_containing("event"), 2);
        assert!(capture.contents().contains("WARN"));
        assert_eq!(capture.lines_containing("filtered out"), 0);
    }

    #[test]
    fn test_clones_share_buffer() {
        let capture = LogCapture::new();
        let clone = capture.clone();

        tracing::subscriber::with_default(clone.subscriber(), || {
            tracing::error!("shared");
        });

        assert_eq!(capture.lines_containing("shared"), 1);
    }
}
