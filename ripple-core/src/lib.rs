// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by the ripple operators.
//!
//! - [`StreamItem`]: a value or an in-band error travelling through a stream
//! - [`RippleError`]: the error type carried by [`StreamItem::Error`]
//! - [`CancellationToken`]: runtime-agnostic cancellation used by subscriptions
//! - [`SpySink`] / [`SpyLogger`]: the diagnostic side channel of the `spy` operator
//! - [`current_thread_id`]: numeric logical thread ids used in diagnostic lines

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod cancellation_token;
pub mod ripple_error;
pub mod spy_sink;
pub mod stream_item;
pub mod thread_id;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::ripple_error::{Result, RippleError};
pub use self::spy_sink::{SpyLogger, SpySink, TracingSink};
pub use self::stream_item::StreamItem;
pub use self::thread_id::current_thread_id;
