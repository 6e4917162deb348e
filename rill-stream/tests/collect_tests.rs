// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::Rill;
use rill_stream::collect;
use rill_test_utils::Recorder;

#[test]
fn test_collect_accumulates_published_cells() {
    // Arrange
    let sources: Rill<Rill<i32>> = Rill::new();
    let roster = collect(&sources);
    let first = Rill::new();
    let second = Rill::new();

    // Act
    sources.publish(first.clone());
    sources.publish(second.clone());

    // Assert
    let members = roster.value().unwrap_or_default();
    assert_eq!(members.len(), 2);
    assert!(members[0].same(&first));
    assert!(members[1].same(&second));
}

#[test]
fn test_collect_drops_a_member_when_it_terminates() {
    // Arrange
    let sources: Rill<Rill<i32>> = Rill::new();
    let roster = collect(&sources);
    let first = Rill::new();
    let second = Rill::new();
    sources.publish(first.clone());
    sources.publish(second.clone());

    // Act
    first.end();

    // Assert
    let members = roster.value().unwrap_or_default();
    assert_eq!(members.len(), 1);
    assert!(members[0].same(&second));
}

#[test]
fn test_collect_renotifies_when_a_member_publishes() {
    // Arrange
    let sources: Rill<Rill<i32>> = Rill::new();
    let roster = collect(&sources);
    let member = Rill::new();
    sources.publish(member.clone());
    let recorder = Recorder::attach(&roster);

    // Act
    member.publish(1);
    member.publish(2);

    // Assert: the roster itself did not change, subscribers were re-notified
    assert_eq!(recorder.values().len(), 2);
    assert!(recorder.values().iter().all(|members| members.len() == 1));
}

#[test]
fn test_collect_skips_cells_that_are_already_terminated() {
    // Arrange
    let sources: Rill<Rill<i32>> = Rill::new();
    let roster = collect(&sources);
    let dead = Rill::new();
    dead.end();

    // Act
    sources.publish(dead);

    // Assert
    assert_eq!(roster.value().unwrap_or_default().len(), 0);
}

#[test]
fn test_collect_terminates_with_its_source() {
    // Arrange
    let sources: Rill<Rill<i32>> = Rill::new();
    let roster = collect(&sources);

    // Act
    sources.end();

    // Assert
    assert!(roster.is_done());
}
