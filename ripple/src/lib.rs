// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Ripple
//!
//! Two operators for streams of [`StreamItem`]:
//!
//! - [`pair_with_previous`](PairWithPreviousExt::pair_with_previous) feeds each
//!   value and the value before it to a combiner
//! - [`spy`](SpyExt::spy) reports a stream's lifecycle to a [`SpyLogger`] while
//!   forwarding everything unchanged
//!
//! plus [`subscribe`](SubscribeExt::subscribe) to push a stream into an
//! [`Observer`] on a tokio task.
//!
//! ## Quick Start
//!
//! ```rust
//! use ripple_rx::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let logger = SpyLogger::new(|line: &str| println!("{line}"));
//!
//! let deltas: Vec<i32> = stream::iter([10, 12, 11])
//!     .map(StreamItem::Value)
//!     .spy_with_logger(Some("prices"), logger)
//!     .pair_with_previous(|current, previous| current - previous.copied().unwrap_or(*current))
//!     .map(StreamItem::unwrap)
//!     .collect()
//!     .await;
//!
//! assert_eq!(deltas, vec![0, 2, -1]);
//! # }
//! ```
//!
//! ## Crates
//!
//! - `ripple-core`: [`StreamItem`], [`RippleError`], [`CancellationToken`], spy sinks
//! - `ripple-stream`: the operators
//! - `ripple-exec`: observers and subscriptions
//!
//! ## Features
//!
//! - `runtime-tokio` (default): [`SubscribeExt`] and [`Subscription`]
//! - `tracing`: route diagnostics through `tracing` instead of stderr

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub use ripple_core::{
    current_thread_id, CancellationToken, Result, RippleError, SpyLogger, SpySink, StreamItem,
    TracingSink,
};
pub use ripple_exec::{observer, CallbackObserver, Observer};
#[cfg(feature = "runtime-tokio")]
pub use ripple_exec::{SubscribeExt, Subscription};
pub use ripple_stream::{
    CombineWithPrevious, PairWithPrevious, PairWithPreviousExt, Spy, SpyExt, Tap, TapExt,
    TryPairWithPrevious, WithPrevious,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use ripple_core::{RippleError, SpyLogger, StreamItem};
    #[cfg(feature = "runtime-tokio")]
    pub use ripple_exec::SubscribeExt;
    pub use ripple_exec::{observer, Observer};
    pub use ripple_stream::prelude::*;
}
