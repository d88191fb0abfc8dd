// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the operator traits and their types.
//!
//! ```ignore
//! use ripple_stream::prelude::*;
//!
//! let deltas = stream
//!     .spy(Some("prices"))
//!     .pair_with_previous(|current, previous| current - previous.copied().unwrap_or_default());
//! ```
//!
//! # Contents
//!
//! - [`PairWithPreviousExt`] - Pair each value with its predecessor
//! - [`SpyExt`] - Trace a stream's lifecycle
//! - [`TapExt`] - Side-effect observation for debugging
//! - [`WithPrevious`] - Pair of current and previous values

pub use crate::pair_with_previous::PairWithPreviousExt;
pub use crate::spy::SpyExt;
pub use crate::tap::TapExt;
pub use crate::types::WithPrevious;
