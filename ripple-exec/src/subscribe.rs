// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::observer::Observer;
use core::pin::pin;
use futures::stream::{Stream, StreamExt};
use ripple_core::{CancellationToken, Result, RippleError, StreamItem};
use tokio::task::JoinHandle;

/// Extension trait providing push-style subscriptions for streams.
pub trait SubscribeExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Drives the stream on a spawned tokio task and pushes every signal to `observer`.
    ///
    /// # Behavior
    ///
    /// - Values are delivered with [`Observer::on_next`] in stream order
    /// - The first error is delivered with [`Observer::on_error`] and ends the subscription
    /// - End of stream is delivered with [`Observer::on_completed`]
    /// - [`Subscription::dispose`] stops delivery before the next item
    ///
    /// The stream is dropped on the task as soon as the subscription ends, so the
    /// teardown of every operator in the pipeline runs there.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_core::StreamItem;
    /// use ripple_exec::{observer, SubscribeExt};
    /// use futures::{stream, StreamExt};
    /// use std::sync::{Arc, Mutex};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let received = Arc::new(Mutex::new(Vec::new()));
    /// let sink = received.clone();
    ///
    /// let subscription = stream::iter([1, 2, 3]).map(StreamItem::Value).subscribe(observer(
    ///     move |v: i32| sink.lock().unwrap().push(v),
    ///     |e| panic!("unexpected error: {e}"),
    ///     || {},
    /// ));
    ///
    /// subscription.join().await.unwrap();
    /// assert_eq!(*received.lock().unwrap(), vec![1, 2, 3]);
    /// # }
    /// ```
    fn subscribe<O>(self, observer: O) -> Subscription
    where
        O: Observer<T> + Send + 'static;
}

impl<S, T> SubscribeExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn subscribe<O>(self, observer: O) -> Subscription
    where
        O: Observer<T> + Send + 'static,
    {
        let token = CancellationToken::new();
        let task = tokio::spawn(drive(self, observer, token.clone()));
        Subscription { token, task }
    }
}

async fn drive<S, T, O>(stream: S, mut observer: O, token: CancellationToken)
where
    S: Stream<Item = StreamItem<T>>,
    O: Observer<T>,
{
    let mut stream = pin!(stream);

    loop {
        let item = tokio::select! {
            biased;
            _ = token.cancelled() => return,
            item = stream.next() => item,
        };

        match item {
            Some(StreamItem::Value(value)) => observer.on_next(value),
            Some(StreamItem::Error(error)) => {
                observer.on_error(error);
                return;
            }
            None => {
                observer.on_completed();
                return;
            }
        }
    }
}

/// Handle to a running subscription.
///
/// Dropping the handle detaches the subscription: it keeps running until the
/// stream ends.
#[must_use = "dropping a Subscription detaches it; call dispose() to cancel"]
#[derive(Debug)]
pub struct Subscription {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl Subscription {
    /// Cancels the subscription.
    ///
    /// Returns `true` if this call performed the cancellation, `false` if the
    /// subscription was already disposed.
    pub fn dispose(&self) -> bool {
        self.token.cancel()
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Token cancelled by [`dispose`](Self::dispose).
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Waits for the subscription task to finish and the stream to be dropped.
    ///
    /// # Errors
    ///
    /// Returns [`RippleError::SubscriptionError`] if the task panicked, for
    /// example because an operator or an observer callback panicked.
    pub async fn join(self) -> Result<()> {
        self.task.await.map_err(|e| {
            error!("subscription task failed: {}", e);
            RippleError::subscription_error(e.to_string())
        })
    }
}
