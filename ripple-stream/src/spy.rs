// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lifecycle tracing operator for debugging stream pipelines.
//!
//! [`spy`](SpyExt::spy) wraps a stream and reports what happens to it through a
//! [`SpyLogger`], while forwarding every value, error and completion untouched.
//!
//! # Trace lines
//!
//! Every line has the form `"<name>: <event> on Thread <id>"`:
//!
//! | Event | When |
//! |-------|------|
//! | `Evaluated` | the operator is applied, before anything is polled |
//! | `Subscription started` | first poll, before the source is polled |
//! | `Subscription complete` | the source's first poll returned (or panicked) |
//! | `OnNext(<value:?>)` | before a value is handed downstream |
//! | `OnError(<error>)` | before an error is handed downstream |
//! | `OnCompleted()` | the source ended |
//! | `Cleaned up` | the source was released: completion, [`Spy::dispose`] or drop |
//!
//! Without a name, the spy is named after its element type, e.g. `Stream<i32>`.
//!
//! # Example
//!
//! ```rust
//! use ripple_core::{SpyLogger, StreamItem};
//! use ripple_stream::SpyExt;
//! use futures::{stream, StreamExt};
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let lines = Arc::new(Mutex::new(Vec::<String>::new()));
//! let captured = lines.clone();
//! let logger = SpyLogger::new(move |line: &str| captured.lock().push(line.to_string()));
//!
//! let values: Vec<_> = stream::iter([1, 2])
//!     .map(StreamItem::Value)
//!     .spy_with_logger(Some("numbers"), logger)
//!     .collect()
//!     .await;
//!
//! assert_eq!(values, vec![StreamItem::Value(1), StreamItem::Value(2)]);
//! assert!(lines.lock()[3].starts_with("numbers: OnNext(1) on Thread "));
//! # }
//! ```
//!
//! # Errors
//!
//! Errors are traced and forwarded; they do not end the spy. Whether an error
//! terminates the subscription is up to the consumer.
//!
//! A panicking sink propagates out of the call that logged. If the sink panics
//! again while that panic unwinds through the spy, the line is lost and the
//! unwinding continues.

use core::fmt::{self, Debug};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use pin_project::{pin_project, pinned_drop};
use ripple_core::{current_thread_id, SpyLogger, StreamItem};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Extension trait providing the [`spy`](Self::spy) operator.
pub trait SpyExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Traces this stream's lifecycle through the default [`SpyLogger`].
    ///
    /// `name` identifies the spy in every line; `None` derives it from `T`.
    fn spy(self, name: Option<&str>) -> Spy<Self> {
        self.spy_with_logger(name, SpyLogger::default())
    }

    /// Traces this stream's lifecycle through `logger`.
    fn spy_with_logger(self, name: Option<&str>, logger: SpyLogger) -> Spy<Self>;
}

impl<S, T> SpyExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn spy_with_logger(self, name: Option<&str>, logger: SpyLogger) -> Spy<Self> {
        let name = name.map_or_else(default_name::<T>, Arc::<str>::from);
        Spy::new(self, name, logger)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SpyState {
    Evaluated,
    Subscribed,
    CleanedUp,
}

/// Stream returned by [`spy`](SpyExt::spy).
#[pin_project(PinnedDrop)]
#[must_use = "streams do nothing unless polled"]
pub struct Spy<S> {
    #[pin]
    source: Option<S>,
    name: Arc<str>,
    logger: SpyLogger,
    state: SpyState,
}

impl<S> Spy<S> {
    fn new(source: S, name: Arc<str>, logger: SpyLogger) -> Self {
        trace(&logger, &name, format_args!("Evaluated"));
        Self {
            source: Some(source),
            name,
            logger,
            state: SpyState::Evaluated,
        }
    }

    /// The name used in every trace line of this spy.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` once the source has been released.
    pub fn is_disposed(&self) -> bool {
        self.state == SpyState::CleanedUp
    }

    /// Releases the source now.
    ///
    /// Logs `Cleaned up` if the spy was subscribed. The spy ends afterwards without
    /// further trace lines. Calling it again does nothing.
    pub fn dispose(self: Pin<&mut Self>) {
        let mut this = self.project();
        this.source.set(None);
        if tear_down(this.state) {
            trace(this.logger, this.name, format_args!("Cleaned up"));
        }
    }
}

#[pinned_drop]
impl<S> PinnedDrop for Spy<S> {
    fn drop(self: Pin<&mut Self>) {
        let mut this = self.project();
        this.source.set(None);
        if tear_down(this.state) {
            trace_in_drop(this.logger, this.name, format_args!("Cleaned up"));
        }
    }
}

impl<S, T> Stream for Spy<S>
where
    S: Stream<Item = StreamItem<T>>,
    T: Debug,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        let name: &str = this.name;
        let logger: &SpyLogger = this.logger;

        let subscribing = match *this.state {
            SpyState::CleanedUp => return Poll::Ready(None),
            SpyState::Evaluated => {
                trace(logger, name, format_args!("Subscription started"));
                *this.state = SpyState::Subscribed;
                true
            }
            SpyState::Subscribed => false,
        };

        let polled = {
            let _scope = subscribing.then(|| SubscriptionScope { name, logger });
            match this.source.as_mut().as_pin_mut() {
                Some(source) => source.poll_next(cx),
                None => Poll::Ready(None),
            }
        };

        match &polled {
            Poll::Ready(Some(StreamItem::Value(value))) => {
                trace(logger, name, format_args!("OnNext({value:?})"));
            }
            Poll::Ready(Some(StreamItem::Error(error))) => {
                trace(logger, name, format_args!("OnError({error})"));
            }
            Poll::Ready(None) => {
                trace(logger, name, format_args!("OnCompleted()"));
                this.source.set(None);
                if tear_down(this.state) {
                    trace(logger, name, format_args!("Cleaned up"));
                }
            }
            Poll::Pending => {}
        }

        polled
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source
            .as_ref()
            .map_or((0, Some(0)), |source| source.size_hint())
    }
}

// Logs `Subscription complete` when the first poll of the source is left, by return or unwind.
struct SubscriptionScope<'a> {
    name: &'a str,
    logger: &'a SpyLogger,
}

impl Drop for SubscriptionScope<'_> {
    fn drop(&mut self) {
        trace_in_drop(self.logger, self.name, format_args!("Subscription complete"));
    }
}

// Marks the spy cleaned up; returns whether `Cleaned up` is due.
fn tear_down(state: &mut SpyState) -> bool {
    let subscribed = *state == SpyState::Subscribed;
    *state = SpyState::CleanedUp;
    subscribed
}

// A sink panic raised while the thread is already unwinding would abort the process,
// so during unwinding it is contained here.
fn trace_in_drop(logger: &SpyLogger, name: &str, event: fmt::Arguments<'_>) {
    if std::thread::panicking() {
        let _ = panic::catch_unwind(AssertUnwindSafe(|| trace(logger, name, event)));
    } else {
        trace(logger, name, event);
    }
}

fn trace(logger: &SpyLogger, name: &str, event: fmt::Arguments<'_>) {
    logger.log(&format!(
        "{name}: {event} on Thread {}",
        current_thread_id()
    ));
}

fn default_name<T>() -> Arc<str> {
    Arc::from(format!("Stream<{}>", short_type_name::<T>()))
}

// `type_name` without module paths: `alloc::vec::Vec<alloc::string::String>` -> `Vec<String>`.
fn short_type_name<T: ?Sized>() -> String {
    let full = core::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            segment.clear();
        } else if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else {
            short.push_str(&segment);
            segment.clear();
            short.push(c);
        }
    }
    short.push_str(&segment);
    short
}

#[cfg(test)]
mod tests {
    use super::short_type_name;

    #[test]
    fn test_short_type_name_keeps_primitives() {
        assert_eq!(short_type_name::<i32>(), "i32");
        assert_eq!(short_type_name::<(u8, bool)>(), "(u8, bool)");
    }

    #[test]
    fn test_short_type_name_strips_module_paths() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
        assert_eq!(
            short_type_name::<std::collections::HashMap<String, Vec<u8>>>(),
            "HashMap<String, Vec<u8>>"
        );
    }

    #[test]
    fn test_short_type_name_keeps_references() {
        assert_eq!(short_type_name::<&str>(), "&str");
    }
}
