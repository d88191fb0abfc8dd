// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the ripple operators.
//!
//! Errors travel in-band as [`StreamItem::Error`](crate::StreamItem::Error): operators
//! forward them untouched and never retry or swallow them.
//!
//! # Examples
//!
//! ```
//! use ripple_core::{Result, RippleError};
//!
//! fn connect() -> Result<()> {
//!     Err(RippleError::stream_error("upstream not ready"))
//! }
//!
//! assert!(connect().is_err());
//! ```

/// Root error type for all ripple operations.
#[derive(Debug, thiserror::Error)]
pub enum RippleError {
    /// An error reported by a source stream.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// An error returned by user code, such as a fallible pairing combiner.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The task driving a subscription failed.
    #[error("Subscription error: {context}")]
    SubscriptionError {
        /// Details about the subscription failure
        context: String,
    },
}

impl RippleError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Create a subscription error with the given context
    pub fn subscription_error(context: impl Into<String>) -> Self {
        Self::SubscriptionError {
            context: context.into(),
        }
    }

    /// Returns `true` if the error originated in user-supplied code.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::UserError(_))
    }
}

/// Specialized Result type for ripple operations.
pub type Result<T> = std::result::Result<T, RippleError>;

impl Clone for RippleError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed source cannot be cloned, keep its rendered message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::SubscriptionError { context } => Self::SubscriptionError {
                context: context.clone(),
            },
        }
    }
}
