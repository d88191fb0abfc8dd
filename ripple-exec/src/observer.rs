// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::RippleError;

/// Receiver of the signals pushed by a subscription.
///
/// At most one of [`on_error`](Self::on_error) and [`on_completed`](Self::on_completed)
/// is called, and nothing is called after it.
pub trait Observer<T> {
    /// Called for every value, in stream order.
    fn on_next(&mut self, value: T);

    /// Called once when the stream yields an error. The subscription ends afterwards.
    fn on_error(&mut self, error: RippleError);

    /// Called once when the stream ends.
    fn on_completed(&mut self);
}

/// [`Observer`] assembled from three closures. Built with [`observer`].
#[derive(Clone)]
pub struct CallbackObserver<N, E, C> {
    on_next: N,
    on_error: E,
    on_completed: C,
}

/// Builds an [`Observer`] from closures.
///
/// ```
/// use ripple_exec::{observer, Observer};
///
/// let mut total = 0;
/// let mut sum = observer(|v: i32| total += v, |_| {}, || {});
/// sum.on_next(2);
/// sum.on_next(3);
/// drop(sum);
/// assert_eq!(total, 5);
/// ```
pub fn observer<T, N, E, C>(on_next: N, on_error: E, on_completed: C) -> CallbackObserver<N, E, C>
where
    N: FnMut(T),
    E: FnMut(RippleError),
    C: FnMut(),
{
    CallbackObserver {
        on_next,
        on_error,
        on_completed,
    }
}

impl<T, N, E, C> Observer<T> for CallbackObserver<N, E, C>
where
    N: FnMut(T),
    E: FnMut(RippleError),
    C: FnMut(),
{
    fn on_next(&mut self, value: T) {
        (self.on_next)(value);
    }

    fn on_error(&mut self, error: RippleError) {
        (self.on_error)(error);
    }

    fn on_completed(&mut self) {
        (self.on_completed)();
    }
}
