use std::sync::Arc;

use parking_lot::Mutex;

use super::{Logger, Priority};

/// Anything engine code can hand log messages to.
///
/// Components take a sink as an argument instead of reaching for a global
/// logger.
pub trait LogSink {
    /// Returns `true` if the message was written.
    fn log(&mut self, priority: Priority, message: &str) -> bool;

    fn is_enabled(&self, priority: Priority) -> bool;
}

impl LogSink for Logger {
    fn log(&mut self, priority: Priority, message: &str) -> bool {
        Logger::log(self, priority, message)
    }

    fn is_enabled(&self, priority: Priority) -> bool {
        Logger::is_enabled(self, priority)
    }
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn log(&mut self, priority: Priority, message: &str) -> bool {
        (**self).log(priority, message)
    }

    fn is_enabled(&self, priority: Priority) -> bool {
        (**self).is_enabled(priority)
    }
}

/// A logger shared between several owners.
///
/// Clones refer to the same [`Logger`]; the file is closed when the last
/// clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct SharedLogger {
    inner: Arc<Mutex<Logger>>,
}

impl SharedLogger {
    pub fn new(logger: Logger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(logger)),
        }
    }

    /// Run `f` with exclusive access to the underlying logger.
    pub fn with<R>(&self, f: impl FnOnce(&mut Logger) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

impl From<Logger> for SharedLogger {
    fn from(logger: Logger) -> Self {
        Self::new(logger)
    }
}

impl LogSink for SharedLogger {
    fn log(&mut self, priority: Priority, message: &str) -> bool {
        self.inner.lock().log(priority, message)
    }

    fn is_enabled(&self, priority: Priority) -> bool {
        self.inner.lock().is_enabled(priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_configuration() {
        let shared = SharedLogger::default();
        let other = shared.clone();

        shared.with(|logger| logger.set_priority(Priority::Warn));
        assert!(!other.is_enabled(Priority::Debug));
        assert!(other.is_enabled(Priority::Err));
    }

    #[test]
    fn test_sink_through_mut_reference() {
        fn emit(sink: &mut dyn LogSink) -> bool {
            sink.log(Priority::Err, "boom")
        }

        let mut logger = Logger::new();
        // No file set, so nothing can be written.
        assert!(!emit(&mut logger));
    }
}
