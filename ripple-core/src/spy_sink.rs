// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Diagnostic side channel of the `spy` operator.
//!
//! A [`SpySink`] receives finished trace lines. Spies never talk to a sink
//! directly: they hold a [`SpyLogger`], a cloneable handle whose sink can be
//! swapped at runtime. Every spy sharing a logger sees the swap from that
//! point on; spies built with a different logger are unaffected.
//!
//! ```
//! use ripple_core::SpyLogger;
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//!
//! let lines = Arc::new(Mutex::new(Vec::new()));
//! let captured = lines.clone();
//!
//! let logger = SpyLogger::default();
//! logger.set_sink(move |line: &str| captured.lock().push(line.to_string()));
//! logger.log("Stream<i32>: Evaluated on Thread 1");
//!
//! assert_eq!(lines.lock().len(), 1);
//! ```
//!
//! Sinks are called without any lock held. A sink shared between spies
//! running on several threads must do its own synchronization.

use core::fmt;
use parking_lot::RwLock;
use std::sync::Arc;

/// Destination for spy trace lines.
pub trait SpySink: Send + Sync {
    /// Receives one complete trace line.
    fn log(&self, line: &str);
}

impl<F> SpySink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log(&self, line: &str) {
        self(line);
    }
}

/// Default sink: writes every line to the debug channel of the logging shim.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SpySink for TracingSink {
    fn log(&self, line: &str) {
        debug!("{}", line);
    }
}

/// Shared, swappable handle to a [`SpySink`].
#[derive(Clone)]
pub struct SpyLogger {
    sink: Arc<RwLock<Arc<dyn SpySink>>>,
}

impl SpyLogger {
    /// Creates a logger writing to `sink`.
    pub fn new(sink: impl SpySink + 'static) -> Self {
        Self {
            sink: Arc::new(RwLock::new(Arc::new(sink))),
        }
    }

    /// Replaces the sink for every spy sharing this logger.
    ///
    /// Lines logged before the call stay with the previous sink.
    pub fn set_sink(&self, sink: impl SpySink + 'static) {
        *self.sink.write() = Arc::new(sink);
    }

    /// Sends one line to the current sink.
    pub fn log(&self, line: &str) {
        let sink = Arc::clone(&self.sink.read());
        sink.log(line);
    }
}

impl Default for SpyLogger {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl fmt::Debug for SpyLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpyLogger").finish_non_exhaustive()
    }
}
