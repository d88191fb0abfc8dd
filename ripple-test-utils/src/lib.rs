// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the ripple stream operators.
//!
//! This crate is for development and testing only.
//!
//! # Architecture
//!
//! Operators consume their source by value, while tests want to push values
//! imperatively. Channels bridge the two: the test keeps the sender, the
//! operator gets the receiving stream.
//!
//! For time-sensitive scenarios, [`cold_stream`] replays a scripted timeline of
//! notifications relative to its first poll, and [`RecordingObserver`] records
//! what it receives together with the elapsed time. Run them under
//! `#[tokio::test(start_paused = true)]` to get exact, instant virtual time:
//!
//! ```rust
//! use ripple_test_utils::{cold_stream, on_completed, on_next, record};
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let source = cold_stream(vec![on_next(100, 1), on_next(200, 2), on_completed(300)]);
//!
//! let records = record(source).await;
//!
//! assert_eq!(records, vec![on_next(100, 1), on_next(200, 2), on_completed(300)]);
//! # }
//! ```
//!
//! Spy diagnostics are captured with a [`RecordingSink`].
//!
//! # Module Organization
//!
//! - `cold` - scripted, timed source streams
//! - `recording_observer` - timed notification recording
//! - `recording_sink` - capture of spy trace lines
//! - `error_injection` - error injection into plain streams
//! - `helpers` - assertion and utility functions
//! - `person`, `test_data` - fixture type and its pre-built values

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cold;
pub mod error_injection;
pub mod helpers;
pub mod person;
pub mod recording_observer;
pub mod recording_sink;
pub mod test_data;

use futures::{Stream, StreamExt};
use ripple_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

// Re-export commonly used test utilities
pub use cold::cold_stream;
pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream, unwrap_value};
pub use person::Person;
pub use recording_observer::{
    on_completed, on_error, on_next, record, Notification, Recorded, RecordingObserver,
};
pub use recording_sink::RecordingSink;

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// # Example
///
/// ```rust
/// use ripple_test_utils::test_channel;
/// use ripple_test_utils::test_data::person_alice;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
///
/// // Send plain values
/// tx.send(person_alice()).unwrap();
///
/// // Receive StreamItem-wrapped values
/// let item = stream.next().await.unwrap().unwrap(); // Option -> StreamItem -> Value
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
///
/// # Example
///
/// ```rust
/// use ripple_test_utils::test_channel_with_errors;
/// use ripple_core::{StreamItem, RippleError};
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel_with_errors();
///
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(RippleError::stream_error("test error"))).unwrap();
///
/// let value = stream.next().await.unwrap();
/// let error = stream.next().await.unwrap();
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
