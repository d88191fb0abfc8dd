// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recording_observer::{Notification, Recorded};
use async_stream::stream;
use futures::Stream;
use ripple_core::StreamItem;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Replays `timeline` relative to the first poll of the returned stream.
///
/// Each notification is emitted at its `at` millisecond. An error is emitted
/// and ends the stream; a completion ends it at its time. Entries after either
/// are ignored. Times are expected in ascending order.
///
/// # Example
///
/// ```rust
/// use ripple_test_utils::{cold_stream, on_completed, on_next};
///
/// let source = cold_stream(vec![on_next(100, 'a'), on_next(250, 'b'), on_completed(300)]);
/// ```
pub fn cold_stream<T>(timeline: Vec<Recorded<T>>) -> impl Stream<Item = StreamItem<T>> + Send
where
    T: Send + 'static,
{
    stream! {
        let start = Instant::now();

        for Recorded { at, notification } in timeline {
            sleep_until(start + Duration::from_millis(at)).await;

            match notification {
                Notification::Next(value) => {
                    yield StreamItem::Value(value);
                }
                Notification::Error(error) => {
                    yield StreamItem::Error(error);
                    break;
                }
                Notification::Completed => break,
            }
        }
    }
}
