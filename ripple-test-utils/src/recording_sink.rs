// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use ripple_core::{SpyLogger, SpySink};
use std::sync::Arc;

/// [`SpySink`] that keeps every line it receives.
///
/// ```rust
/// use ripple_test_utils::RecordingSink;
///
/// let sink = RecordingSink::new();
/// let logger = sink.logger();
///
/// logger.log("first");
/// assert_eq!(sink.lines(), vec!["first".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A logger writing into this sink.
    pub fn logger(&self) -> SpyLogger {
        SpyLogger::new(self.clone())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Lines with the ` on Thread <id>` suffix removed.
    pub fn events(&self) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .map(|line| match line.rfind(" on Thread ") {
                Some(idx) => line[..idx].to_string(),
                None => line.clone(),
            })
            .collect()
    }
}

impl SpySink for RecordingSink {
    fn log(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
