// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::{Result, RippleError};
use std::io;

#[test]
fn test_error_display() {
    let err = RippleError::stream_error("processing failed");
    assert_eq!(
        err.to_string(),
        "Stream processing error: processing failed"
    );
}

#[test]
fn test_user_error_display() {
    let err = RippleError::user_error(io::Error::other("bad input"));
    assert_eq!(err.to_string(), "User error: bad input");
    assert!(err.is_user_error());
}

#[test]
fn test_subscription_error_display() {
    let err = RippleError::subscription_error("task panicked");
    assert_eq!(err.to_string(), "Subscription error: task panicked");
    assert!(!err.is_user_error());
}

#[test]
fn test_error_constructors() {
    assert!(matches!(
        RippleError::stream_error("x"),
        RippleError::StreamProcessingError { .. }
    ));
    assert!(matches!(
        RippleError::subscription_error("x"),
        RippleError::SubscriptionError { .. }
    ));
    assert!(matches!(
        RippleError::user_error(io::Error::other("x")),
        RippleError::UserError(_)
    ));
}

#[test]
fn test_user_error_keeps_source() {
    let err = RippleError::user_error(io::Error::other("bad input"));
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("bad input"));
}

#[test]
fn test_clone_preserves_structured_variants() {
    let err = RippleError::subscription_error("gone");
    let cloned = err.clone();
    assert!(matches!(
        cloned,
        RippleError::SubscriptionError { ref context } if context == "gone"
    ));
}

#[test]
fn test_clone_renders_user_error() {
    let err = RippleError::user_error(io::Error::other("bad input"));
    let cloned = err.clone();
    assert!(matches!(
        cloned,
        RippleError::StreamProcessingError { ref context } if context == "User error: bad input"
    ));
}

#[test]
fn test_result_alias_with_question_mark() {
    fn parse(input: &str) -> Result<i32> {
        input
            .parse::<i32>()
            .map_err(RippleError::user_error)
    }

    fn doubled(input: &str) -> Result<i32> {
        Ok(parse(input)? * 2)
    }

    assert_eq!(doubled("21").ok(), Some(42));
    assert!(doubled("x").is_err_and(|e| e.is_user_error()));
}

#[test]
fn test_error_converts_into_anyhow() -> anyhow::Result<()> {
    let result: Result<()> = Err(RippleError::stream_error("boom"));
    let err = anyhow::Error::from(result.unwrap_err());
    assert_eq!(err.to_string(), "Stream processing error: boom");
    Ok(())
}
