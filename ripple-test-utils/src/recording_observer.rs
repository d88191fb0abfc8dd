// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timed recording of stream notifications.
//!
//! Times are whole milliseconds of tokio time, measured from the creation of
//! the recorder. Under a paused clock they are exact.

use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use ripple_core::{RippleError, StreamItem};
use ripple_exec::Observer;
use std::pin::pin;
use std::sync::Arc;
use tokio::time::Instant;

/// One signal of a stream.
#[derive(Debug, Clone)]
pub enum Notification<T> {
    Next(T),
    Error(RippleError),
    Completed,
}

// Errors compare by their rendered message.
impl<T: PartialEq> PartialEq for Notification<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Next(a), Self::Next(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a.to_string() == b.to_string(),
            (Self::Completed, Self::Completed) => true,
            _ => false,
        }
    }
}

/// A notification and the time, in milliseconds, at which it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded<T> {
    pub at: u64,
    pub notification: Notification<T>,
}

pub fn on_next<T>(at: u64, value: T) -> Recorded<T> {
    Recorded {
        at,
        notification: Notification::Next(value),
    }
}

pub fn on_error<T>(at: u64, error: RippleError) -> Recorded<T> {
    Recorded {
        at,
        notification: Notification::Error(error),
    }
}

pub fn on_completed<T>(at: u64) -> Recorded<T> {
    Recorded {
        at,
        notification: Notification::Completed,
    }
}

/// [`Observer`] that records every notification with its time.
///
/// Clones share the same record, so one clone can be handed to a
/// subscription while the test keeps another to inspect it.
#[derive(Debug)]
pub struct RecordingObserver<T> {
    records: Arc<Mutex<Vec<Recorded<T>>>>,
    start: Instant,
}

impl<T> RecordingObserver<T> {
    /// Starts the clock now.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            start: Instant::now(),
        }
    }

    pub fn records(&self) -> Vec<Recorded<T>>
    where
        T: Clone,
    {
        self.records.lock().clone()
    }

    /// The recorded values, without their times.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.records
            .lock()
            .iter()
            .filter_map(|r| match &r.notification {
                Notification::Next(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&self, notification: Notification<T>) {
        let at = self.start.elapsed().as_millis() as u64;
        self.records.lock().push(Recorded { at, notification });
    }
}

impl<T> Clone for RecordingObserver<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            start: self.start,
        }
    }
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Observer<T> for RecordingObserver<T> {
    fn on_next(&mut self, value: T) {
        self.push(Notification::Next(value));
    }

    fn on_error(&mut self, error: RippleError) {
        self.push(Notification::Error(error));
    }

    fn on_completed(&mut self) {
        self.push(Notification::Completed);
    }
}

/// Polls `stream` on the current task until its first error or its end, and
/// returns what it emitted with timings.
pub async fn record<S, T>(stream: S) -> Vec<Recorded<T>>
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone,
{
    let mut observer = RecordingObserver::new();
    let mut stream = pin!(stream);

    loop {
        match stream.next().await {
            Some(StreamItem::Value(value)) => observer.on_next(value),
            Some(StreamItem::Error(error)) => {
                observer.on_error(error);
                break;
            }
            None => {
                observer.on_completed();
                break;
            }
        }
    }

    observer.records()
}
