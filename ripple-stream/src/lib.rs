// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pairing and spying operators for streams of [`StreamItem`].
//!
//! Every operator is an extension trait implemented for any
//! `Stream<Item = StreamItem<T>>`, so operators chain like the ones in
//! `futures::StreamExt`. Each one runs inline in `poll_next`: no task is
//! spawned, nothing is buffered and no lock is taken on the data path.
//!
//! ## Operators
//!
//! | Operator | Emits | State |
//! |----------|-------|-------|
//! | [`pair_with_previous`] | `combiner(current, previous)` per value | last value |
//! | [`try_pair_with_previous`] | as above, failures as [`RippleError::UserError`] | last value |
//! | [`combine_with_previous`] | [`WithPrevious`] per value | last value |
//! | [`spy`] | the source unchanged, plus trace lines to a [`SpyLogger`] | lifecycle flag |
//! | [`tap`] | the source unchanged, after calling a side-effect function | none |
//!
//! Errors travel in-band as [`StreamItem::Error`]. None of the operators ends a
//! stream on error; that decision belongs to the consumer.
//!
//! ## Pattern: Change Detection With Tracing
//!
//! ```rust
//! use ripple_stream::prelude::*;
//! use ripple_core::{SpyLogger, StreamItem};
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let logger = SpyLogger::new(|line: &str| println!("{line}"));
//!
//! let changes: Vec<_> = stream::iter([1, 1, 2])
//!     .map(StreamItem::Value)
//!     .spy_with_logger(Some("readings"), logger)
//!     .pair_with_previous(|current, previous| previous != Some(current))
//!     .map(StreamItem::unwrap)
//!     .collect()
//!     .await;
//!
//! assert_eq!(changes, vec![true, false, true]);
//! # }
//! ```
//!
//! [`pair_with_previous`]: PairWithPreviousExt::pair_with_previous
//! [`try_pair_with_previous`]: PairWithPreviousExt::try_pair_with_previous
//! [`combine_with_previous`]: PairWithPreviousExt::combine_with_previous
//! [`spy`]: SpyExt::spy
//! [`tap`]: TapExt::tap

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod pair_with_previous;
pub mod prelude;
pub mod spy;
pub mod tap;
pub mod types;

pub use pair_with_previous::{
    CombineWithPrevious, PairWithPrevious, PairWithPreviousExt, TryPairWithPrevious,
    WithPreviousFn,
};
pub use ripple_core::{RippleError, SpyLogger, StreamItem};
pub use spy::{Spy, SpyExt};
pub use tap::{Tap, TapExt};
pub use types::WithPrevious;
