// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push-style subscriptions for streams of [`StreamItem`](ripple_core::StreamItem).
//!
//! [`SubscribeExt::subscribe`] drives a stream on a tokio task and delivers its
//! values, its first error or its completion to an [`Observer`]. The returned
//! [`Subscription`] cancels delivery with [`dispose`](Subscription::dispose).

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[cfg(feature = "runtime-tokio")]
#[macro_use]
mod logging;
pub mod observer;
#[cfg(feature = "runtime-tokio")]
pub mod subscribe;

pub use observer::{observer, CallbackObserver, Observer};
#[cfg(feature = "runtime-tokio")]
pub use subscribe::{SubscribeExt, Subscription};
