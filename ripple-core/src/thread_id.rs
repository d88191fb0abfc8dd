// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Numeric logical thread ids.
//!
//! `std::thread::ThreadId` has no stable numeric form, so each OS thread is
//! assigned a process-unique number the first time it asks for one.

use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// Returns the logical id of the calling thread.
///
/// Stable for the lifetime of the thread, never reused within the process.
///
/// ```
/// let id = ripple_core::current_thread_id();
/// assert_eq!(id, ripple_core::current_thread_id());
/// ```
pub fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| *id)
}
