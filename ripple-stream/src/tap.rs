// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-effect operator for observing values without changing the stream.
//!
//! ```
//! use ripple_stream::prelude::*;
//! use ripple_core::StreamItem;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut seen = Vec::new();
//! let values: Vec<_> = stream::iter([1, 2])
//!     .map(StreamItem::Value)
//!     .tap(|value| seen.push(*value))
//!     .map(StreamItem::unwrap)
//!     .collect()
//!     .await;
//!
//! assert_eq!(values, vec![1, 2]);
//! assert_eq!(seen, vec![1, 2]);
//! # }
//! ```
//!
//! The tap function is only called for values. Errors and completion pass
//! through without invoking it.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::{ready, Stream};
use pin_project::pin_project;
use ripple_core::StreamItem;

/// Extension trait providing the [`tap`](Self::tap) operator.
pub trait TapExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Calls `f` with a reference to each value, then forwards the value unchanged.
    fn tap<F>(self, f: F) -> Tap<Self, F>
    where
        F: FnMut(&T);
}

impl<S, T> TapExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn tap<F>(self, f: F) -> Tap<Self, F>
    where
        F: FnMut(&T),
    {
        Tap { stream: self, f }
    }
}

/// Stream returned by [`tap`](TapExt::tap).
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Tap<S, F> {
    #[pin]
    stream: S,
    f: F,
}

impl<S, T, F> Stream for Tap<S, F>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnMut(&T),
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let item = ready!(this.stream.poll_next(cx));

        if let Some(StreamItem::Value(value)) = &item {
            (this.f)(value);
        }
        Poll::Ready(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}
