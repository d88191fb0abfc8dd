// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pairing operator that combines each value with its predecessor.
//!
//! [`pair_with_previous`](PairWithPreviousExt::pair_with_previous) calls a combiner with
//! the current value and the value emitted before it, and emits whatever the combiner
//! returns: exactly one output per input, in source order.
//!
//! # Behavior
//!
//! - First value: the combiner receives `previous = None`
//! - Later values: the combiner receives `previous = Some(&last_value)`
//! - Errors pass through unchanged and do not touch the remembered value
//! - Completion passes through unchanged
//!
//! The first value is never paired with a made-up default. When a default is
//! wanted, the combiner supplies it:
//!
//! ```rust
//! use ripple_stream::PairWithPreviousExt;
//! use ripple_core::StreamItem;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = stream::iter([1, 2, 3]).map(StreamItem::Value);
//!
//! let deltas: Vec<_> = source
//!     .pair_with_previous(|current, previous| current - previous.copied().unwrap_or_default())
//!     .map(StreamItem::unwrap)
//!     .collect()
//!     .await;
//!
//! assert_eq!(deltas, vec![1, 1, 1]);
//! # }
//! ```
//!
//! # Use Cases
//!
//! - Change detection (comparing consecutive values)
//! - Delta calculation (computing differences)
//! - State transitions (analyzing previous → current)

use crate::types::WithPrevious;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::{ready, Stream};
use pin_project::pin_project;
use ripple_core::{RippleError, StreamItem};

/// Combiner used by [`combine_with_previous`](PairWithPreviousExt::combine_with_previous).
pub type WithPreviousFn<T> = fn(&T, Option<&T>) -> WithPrevious<T>;

/// Stream returned by [`combine_with_previous`](PairWithPreviousExt::combine_with_previous).
pub type CombineWithPrevious<S, T> = PairWithPrevious<S, T, WithPreviousFn<T>>;

/// Extension trait providing the pairing operators.
pub trait PairWithPreviousExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emits `combiner(current, previous)` for every value of the source.
    ///
    /// See the [module-level documentation](crate::pair_with_previous) for details.
    fn pair_with_previous<R, F>(self, combiner: F) -> PairWithPrevious<Self, T, F>
    where
        F: FnMut(&T, Option<&T>) -> R;

    /// Like [`pair_with_previous`](Self::pair_with_previous), for combiners that can fail.
    ///
    /// A failure is emitted as [`RippleError::UserError`] in place of the value that
    /// caused it. That value still becomes the previous value of the next pairing.
    fn try_pair_with_previous<R, E, F>(self, combiner: F) -> TryPairWithPrevious<Self, T, F>
    where
        F: FnMut(&T, Option<&T>) -> Result<R, E>,
        E: std::error::Error + Send + Sync + 'static;

    /// Pairs each value with its predecessor as a [`WithPrevious`].
    ///
    /// ```rust
    /// use ripple_stream::PairWithPreviousExt;
    /// use ripple_core::StreamItem;
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let mut paired = stream::iter(["a", "b"]).map(StreamItem::Value).combine_with_previous();
    ///
    /// let first = paired.next().await.unwrap().unwrap();
    /// assert!(!first.has_previous());
    ///
    /// let second = paired.next().await.unwrap().unwrap();
    /// assert_eq!(second.as_pair(), Some((&"a", &"b")));
    /// # }
    /// ```
    fn combine_with_previous(self) -> CombineWithPrevious<Self, T>
    where
        T: Clone;
}

impl<S, T> PairWithPreviousExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn pair_with_previous<R, F>(self, combiner: F) -> PairWithPrevious<Self, T, F>
    where
        F: FnMut(&T, Option<&T>) -> R,
    {
        PairWithPrevious {
            stream: self,
            previous: None,
            combiner,
        }
    }

    fn try_pair_with_previous<R, E, F>(self, combiner: F) -> TryPairWithPrevious<Self, T, F>
    where
        F: FnMut(&T, Option<&T>) -> Result<R, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        TryPairWithPrevious {
            stream: self,
            previous: None,
            combiner,
        }
    }

    fn combine_with_previous(self) -> CombineWithPrevious<Self, T>
    where
        T: Clone,
    {
        self.pair_with_previous(with_previous::<T> as WithPreviousFn<T>)
    }
}

fn with_previous<T: Clone>(current: &T, previous: Option<&T>) -> WithPrevious<T> {
    WithPrevious::new(previous.cloned(), current.clone())
}

// Runs the combiner, then remembers `current` for the next pairing.
fn advance<T, R>(
    previous: &mut Option<T>,
    current: T,
    combiner: impl FnOnce(&T, Option<&T>) -> R,
) -> R {
    let paired = combiner(&current, previous.as_ref());
    *previous = Some(current);
    paired
}

/// Stream returned by [`pair_with_previous`](PairWithPreviousExt::pair_with_previous).
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct PairWithPrevious<S, T, F> {
    #[pin]
    stream: S,
    previous: Option<T>,
    combiner: F,
}

impl<S, T, R, F> Stream for PairWithPrevious<S, T, F>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnMut(&T, Option<&T>) -> R,
{
    type Item = StreamItem<R>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let item = ready!(this.stream.poll_next(cx));

        Poll::Ready(item.map(|item| {
            item.map(|current| advance(this.previous, current, &mut *this.combiner))
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

/// Stream returned by [`try_pair_with_previous`](PairWithPreviousExt::try_pair_with_previous).
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct TryPairWithPrevious<S, T, F> {
    #[pin]
    stream: S,
    previous: Option<T>,
    combiner: F,
}

impl<S, T, R, E, F> Stream for TryPairWithPrevious<S, T, F>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnMut(&T, Option<&T>) -> Result<R, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Item = StreamItem<R>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let item = ready!(this.stream.poll_next(cx));

        Poll::Ready(item.map(|item| match item {
            StreamItem::Value(current) => {
                match advance(this.previous, current, &mut *this.combiner) {
                    Ok(paired) => StreamItem::Value(paired),
                    Err(e) => StreamItem::Error(RippleError::user_error(e)),
                }
            }
            StreamItem::Error(e) => StreamItem::Error(e),
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}
