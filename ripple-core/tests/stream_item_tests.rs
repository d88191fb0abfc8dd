// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::{RippleError, StreamItem};

#[test]
fn test_stream_item_value_creation() {
    let item: StreamItem<i32> = StreamItem::Value(42);
    assert!(item.is_value());
    assert!(!item.is_error());
}

#[test]
fn test_stream_item_error_creation() {
    let item: StreamItem<i32> = StreamItem::Error(RippleError::stream_error("test error"));
    assert!(!item.is_value());
    assert!(item.is_error());
}

#[test]
fn test_stream_item_ok_extracts_value() {
    let item = StreamItem::Value(42);
    assert_eq!(item.ok(), Some(42));
}

#[test]
fn test_stream_item_ok_discards_error() {
    let item: StreamItem<i32> = StreamItem::Error(RippleError::stream_error("test"));
    assert_eq!(item.ok(), None);
}

#[test]
fn test_stream_item_err_extracts_error() {
    let item: StreamItem<i32> = StreamItem::Error(RippleError::stream_error("test error"));
    let extracted = item.err();
    assert!(matches!(
        extracted,
        Some(RippleError::StreamProcessingError { ref context }) if context == "test error"
    ));
}

#[test]
fn test_stream_item_err_discards_value() {
    let item = StreamItem::Value(42);
    assert!(item.err().is_none());
}

#[test]
fn test_stream_item_map_transforms_value() {
    let item = StreamItem::Value(5);
    let mapped = item.map(|x| x * 2);
    assert_eq!(mapped.ok(), Some(10));
}

#[test]
fn test_stream_item_map_propagates_error() {
    let item: StreamItem<i32> = StreamItem::Error(RippleError::stream_error("test"));
    let mapped = item.map(|x| x.to_string());
    assert!(mapped.is_error());
}

#[test]
fn test_stream_item_values_compare_by_value() {
    assert_eq!(StreamItem::Value(1), StreamItem::Value(1));
    assert_ne!(StreamItem::Value(1), StreamItem::Value(2));
}

#[test]
fn test_stream_item_errors_never_equal() {
    let a: StreamItem<i32> = StreamItem::Error(RippleError::stream_error("same"));
    let b: StreamItem<i32> = StreamItem::Error(RippleError::stream_error("same"));
    assert_ne!(a, b);
    assert_ne!(a, StreamItem::Value(0));
}

#[test]
fn test_stream_item_unwrap_returns_value() {
    assert_eq!(StreamItem::Value("x").unwrap(), "x");
}

#[test]
#[should_panic(expected = "called `StreamItem::unwrap()` on an `Error` value")]
fn test_stream_item_unwrap_panics_on_error() {
    let item: StreamItem<i32> = StreamItem::Error(RippleError::stream_error("test"));
    item.unwrap();
}

#[test]
#[should_panic(expected = "needed a value")]
fn test_stream_item_expect_panics_with_message() {
    let item: StreamItem<i32> = StreamItem::Error(RippleError::stream_error("test"));
    item.expect("needed a value");
}

#[test]
fn test_stream_item_from_result() {
    let ok: StreamItem<i32> = Ok(3).into();
    let err: StreamItem<i32> = Err(RippleError::stream_error("test")).into();
    assert_eq!(ok, StreamItem::Value(3));
    assert!(err.is_error());
}

#[test]
fn test_stream_item_into_result() {
    let ok: Result<i32, RippleError> = StreamItem::Value(3).into();
    let err: Result<i32, RippleError> =
        StreamItem::Error(RippleError::stream_error("test")).into();
    assert_eq!(ok.ok(), Some(3));
    assert!(err.is_err());
}
