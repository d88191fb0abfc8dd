// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Basic tests for `tap` operator.

use parking_lot::Mutex;
use ripple_core::{RippleError, StreamItem};
use ripple_stream::{PairWithPreviousExt, TapExt};
use ripple_test_utils::person::Person;
use ripple_test_utils::test_data::{person_alice, person_bob, person_charlie};
use ripple_test_utils::{
    assert_no_element_emitted, test_channel, test_channel_with_errors, unwrap_stream, unwrap_value,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[tokio::test]
async fn test_tap_values_pass_through_unchanged() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Person>();
    let mut result = stream.tap(|_| {});

    // Act & Assert
    tx.send(person_alice())?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        person_alice()
    );

    tx.send(person_bob())?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        person_bob()
    );

    Ok(())
}

#[tokio::test]
async fn test_tap_side_effect_called_for_each_value() -> anyhow::Result<()> {
    // Arrange
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();

    let (tx, stream) = test_channel::<Person>();
    let mut result = stream.tap(move |_| {
        counter_clone.fetch_add(1, Ordering::SeqCst);
    });

    // Act
    tx.send(person_alice())?;
    unwrap_stream(&mut result, 500).await;

    tx.send(person_bob())?;
    unwrap_stream(&mut result, 500).await;

    tx.send(person_charlie())?;
    unwrap_stream(&mut result, 500).await;

    // Assert
    assert_eq!(counter.load(Ordering::SeqCst), 3);

    Ok(())
}

#[tokio::test]
async fn test_tap_not_called_for_errors() -> anyhow::Result<()> {
    // Arrange
    let observed = Arc::new(Mutex::new(Vec::new()));
    let observed_clone = observed.clone();

    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = stream.tap(move |value| observed_clone.lock().push(*value));

    // Act
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Error(RippleError::stream_error("test error")))?;
    tx.send(StreamItem::Value(2))?;

    // Assert
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), 1);
    assert!(unwrap_stream(&mut result, 500).await.is_error());
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), 2);
    assert_eq!(*observed.lock(), vec![1, 2]);

    Ok(())
}

#[tokio::test]
async fn test_tap_no_emission_without_input() {
    // Arrange
    let (_tx, stream) = test_channel::<i32>();
    let mut result = stream.tap(|_| panic!("tap called without a value"));

    // Act & Assert
    assert_no_element_emitted(&mut result, 100).await;
}

#[tokio::test]
async fn test_tap_observes_pairs() -> anyhow::Result<()> {
    // Arrange
    let observed = Arc::new(Mutex::new(Vec::new()));
    let observed_clone = observed.clone();

    let (tx, stream) = test_channel::<i32>();
    let mut result = stream
        .pair_with_previous(|c, p| (*c, p.copied()))
        .tap(move |pair| observed_clone.lock().push(*pair));

    // Act
    tx.send(1)?;
    unwrap_stream(&mut result, 500).await;
    tx.send(2)?;
    unwrap_stream(&mut result, 500).await;

    // Assert
    assert_eq!(*observed.lock(), vec![(1, None), (2, Some(1))]);

    Ok(())
}
