use std::sync::Arc;

use crate::sequence::prelude::*;

fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug)]
struct Handle(u32);

#[test]
fn ordered_search_returns_the_first_match() {
    let sequence = Sequence::<i32, Equatable>::from_data([4, 7, 1, 7, 7]);

    assert_eq!(sequence.ordered_search(&7), Some(1));
    assert_eq!(sequence.ordered_search(&4), Some(0));
    assert_eq!(sequence.ordered_search(&9), None);
    assert_eq!(sequence.ordered_search_ref(&1), Some(&1));
    assert!(sequence.contains_value(&1));
    assert!(!sequence.contains_value(&2));
}

#[test]
fn ordered_search_on_empty() {
    let sequence = Sequence::<i32, Ordered>::new();

    assert_eq!(sequence.ordered_search(&0), None);
    assert_eq!(sequence.ordered_search_ref(&0), None);
    assert!(!sequence.contains_value(&0));
}

#[test]
fn value_searches_need_a_capability() {
    let sequence = Sequence::<i32>::from_data([1, 2, 3]);

    assert_eq!(sequence.capability(), CapabilityKind::Opaque);
    assert!(!sequence.contains_value(&2));
    assert_eq!(sequence.ordered_search(&2), None);
    assert_eq!(sequence.search(&2), None);
    assert_eq!(sequence.search_ref(&2), None);
}

#[test]
fn identity_searches_work_without_a_capability() {
    let sequence = Sequence::<Handle>::from_data((0..10).map(Handle));
    let stored = sequence.at_ref(6);

    assert!(sequence.contains_ref(stored));
    assert_eq!(sequence.ordered_ref_search(stored), Some(6));
    assert_eq!(sequence.ref_search(stored), Some(6));
    assert!(std::ptr::eq(sequence.ref_search_ref(stored).unwrap(), stored));
    assert_eq!(sequence.ordered_ref_search_ref(stored).map(|handle| handle.0), Some(6));
}

#[test]
fn identity_ignores_equal_values_stored_elsewhere() {
    let sequence = Sequence::<i32, Equatable>::from_data([1, 2, 3]);
    let outsider = 2;

    assert!(sequence.contains_value(&outsider));
    assert!(!sequence.contains_ref(&outsider));
    assert_eq!(sequence.ordered_ref_search(&outsider), None);
    assert_eq!(sequence.ref_search(&outsider), None);
    assert_eq!(sequence.ref_search_ref(&outsider), None);
}

#[test]
fn concurrent_search_with_a_single_match_is_deterministic() {
    tracing_init();

    let sequence = Sequence::<u64, Equatable>::from_data(0..1_000_000);

    for value in [0, 1, 499_999, 999_998, 999_999] {
        assert_eq!(sequence.search(&value), Some(value as usize));
        assert_eq!(sequence.search_ref(&value), Some(&value));
    }

    assert_eq!(sequence.search(&1_000_000), None);
    assert_eq!(sequence.search_ref(&1_000_000), None);
}

#[test]
fn concurrent_search_with_many_matches_returns_one_of_them() {
    tracing_init();

    let mut sequence = Sequence::<u64, Ordered>::from_data(0..200_000);
    sequence.insert(10, 42).unwrap();
    sequence.push_back(42);

    let index = sequence.search(&42).unwrap();
    assert!(index == 10 || index == 43 || index == sequence.size() - 1, "index: {}", index);
    assert_eq!(sequence.at(index), 42);
    assert_eq!(sequence.ordered_search(&42), Some(10));
}

#[test]
fn concurrent_identity_search_over_every_chunk() {
    let sequence = Sequence::<Handle>::from_data((0..100_000).map(Handle));

    for index in [0, 33_333, 66_666, 99_999] {
        let stored = sequence.at_ref(index);
        assert_eq!(sequence.ref_search(stored), Some(index));
        assert_eq!(sequence.ref_search_ref(stored).map(|handle| handle.0), Some(index as u32));
    }
}

#[test]
fn concurrent_searches_on_empty() {
    let sequence = Sequence::<u64, Equatable>::new();
    let outsider = 0;

    assert_eq!(sequence.search(&0), None);
    assert_eq!(sequence.search_ref(&0), None);
    assert_eq!(sequence.ref_search(&outsider), None);
    assert_eq!(sequence.ref_search_ref(&outsider), None);
}

#[test]
fn searches_leave_the_sequence_untouched() {
    let sequence = Sequence::<u64, Equatable>::from_data(0..1_000);
    let before = sequence.clone();

    sequence.search(&500);
    sequence.ordered_search(&500);
    sequence.contains_value(&2_000);

    assert_eq!(sequence.data(), before.data());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_searches_from_many_tasks() -> anyhow::Result<()> {
    tracing_init();

    let sequence = Arc::new(Sequence::<u64, Equatable>::from_data(0..250_000));

    let mut handles = vec![];
    for task in 0..16u64 {
        let sequence = sequence.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let value = task * 15_000 + 7;
            (value, sequence.search(&value))
        }));
    }

    for joined in futures::future::join_all(handles).await {
        let (value, found) = joined?;
        assert_eq!(found, Some(value as usize));
    }

    Ok(())
}
