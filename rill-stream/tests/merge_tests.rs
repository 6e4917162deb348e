// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Rill, RillError};
use rill_stream::{merge_all, merge_race, MergeExt};
use rill_test_utils::Recorder;

#[test]
fn test_merge_race_interleaves_values_in_arrival_order() {
    // Arrange
    let a = Rill::new();
    let b = Rill::new();
    let merged = merge_race(&[a.clone(), b.clone()]);
    let recorder = Recorder::attach(&merged);

    // Act
    a.publish(1);
    b.publish(10);
    a.publish(2);

    // Assert
    assert_eq!(recorder.values(), vec![1, 10, 2]);
}

#[test]
fn test_merge_race_ends_when_the_first_input_ends() {
    // Arrange
    let a = Rill::new();
    let b = Rill::new();
    let merged = merge_race(&[a.clone(), b.clone()]);
    let recorder = Recorder::attach(&merged);

    // Act
    a.publish(1);
    a.end();
    b.publish(10); // b is still active, the race is over regardless

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert!(merged.is_done());
    assert_eq!(recorder.terminal_count(), 1);
}

#[test]
fn test_merge_race_with_an_already_terminated_input_is_born_done() {
    // Arrange
    let a: Rill<i32> = Rill::new();
    let b: Rill<i32> = Rill::new();
    b.end();

    // Act
    let merged = merge_race(&[a.clone(), b]);

    // Assert
    assert!(merged.is_done());
}

#[test]
fn test_merge_all_ends_only_after_every_input_ends() {
    // Arrange
    let a = Rill::new();
    let b = Rill::new();
    let merged = merge_all(&[a.clone(), b.clone()]);
    let recorder = Recorder::attach(&merged);

    // Act
    a.publish(1);
    a.end();
    b.publish(10);

    // Assert: a is done, b still feeds the merge
    assert!(!merged.is_done());
    assert_eq!(recorder.values(), vec![1, 10]);

    // Act
    b.end();

    // Assert
    assert!(merged.is_done());
    assert_eq!(recorder.terminal_count(), 1);
}

#[test]
fn test_merge_all_with_all_inputs_already_terminated_is_born_done() {
    // Arrange
    let a: Rill<i32> = Rill::new();
    let b: Rill<i32> = Rill::new();
    a.end();
    b.end();

    // Act
    let merged = merge_all(&[a, b]);

    // Assert
    assert!(merged.is_done());
}

#[test]
fn test_merge_all_of_nothing_completes_immediately() {
    // Arrange / Act
    let merged: Rill<i32> = merge_all(&[]);

    // Assert: the empty conjunction holds
    assert!(merged.is_done());
}

#[test]
fn test_merge_race_of_nothing_stays_active() {
    // Arrange / Act
    let merged: Rill<i32> = merge_race(&[]);

    // Assert
    assert!(!merged.is_done());
}

#[test]
fn test_a_failing_input_fails_either_merge_immediately() {
    // Arrange
    let a: Rill<i32> = Rill::new();
    let b: Rill<i32> = Rill::new();
    let raced = merge_race(&[a.clone(), b.clone()]);
    let gathered = merge_all(&[a.clone(), b.clone()]);

    // Act: only one input failed, the other is still active
    a.fail(RillError::source_failure("feed lost"));

    // Assert
    assert!(raced.fault().is_some());
    assert!(gathered.fault().is_some());
}

#[test]
fn test_instance_sugar_matches_the_free_functions() {
    // Arrange
    let a = Rill::new();
    let b = Rill::new();
    let raced = a.merge_race_with(&[b.clone()]);
    let gathered = a.merge_all_with(&[b.clone()]);
    let race_recorder = Recorder::attach(&raced);
    let all_recorder = Recorder::attach(&gathered);

    // Act
    a.publish(1);
    b.publish(2);
    a.end();

    // Assert
    assert_eq!(race_recorder.values(), vec![1, 2]);
    assert!(raced.is_done());
    assert_eq!(all_recorder.values(), vec![1, 2]);
    assert!(!gathered.is_done());
}
