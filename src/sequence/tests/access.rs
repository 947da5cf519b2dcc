use std::ops::ControlFlow;

use crate::sequence::prelude::*;

#[test]
fn at_matches_source() {
    let source: Vec<u32> = (0..256).map(|_| rand::random::<u32>()).collect();
    let sequence = Sequence::<u32>::from(source.clone());

    for (index, value) in source.iter().enumerate() {
        assert_eq!(sequence.at(index), *value, "index: {}", index);
        assert_eq!(sequence[index], *value, "index: {}", index);
    }
}

#[test]
#[should_panic]
fn at_out_of_range_panics() {
    let sequence = Sequence::<i32>::from_data([1, 2, 3]);
    let _ = sequence.at(3);
}

#[test]
fn safe_at() -> anyhow::Result<()> {
    let sequence = Sequence::<i32>::from_data([1, 2, 3]);

    assert_eq!(sequence.safe_at(0)?, 1);
    assert_eq!(sequence.safe_at(2)?, 3);
    assert_eq!(*sequence.safe_at_ref(1)?, 2);

    assert_eq!(sequence.safe_at(3), Err(Error::IndexOutOfRange { index: 3, size: 3 }));
    assert_eq!(sequence.safe_at(-1), Err(Error::IndexOutOfRange { index: -1, size: 3 }));

    Ok(())
}

#[test]
fn safe_at_on_empty() {
    let mut sequence = Sequence::<i32>::new();

    assert_eq!(sequence.safe_at(0), Err(Error::EmptyContainer));
    assert_eq!(sequence.safe_at_ref(5), Err(Error::EmptyContainer));
    assert_eq!(sequence.safe_at_mut(-1).map(|value| *value), Err(Error::EmptyContainer));
}

#[test]
fn front_and_back() -> anyhow::Result<()> {
    let mut sequence = Sequence::<String>::from_data(["a".to_string(), "b".to_string(), "c".to_string()]);

    assert_eq!(sequence.front()?, "a");
    assert_eq!(sequence.back_ref()?, "c");

    sequence.front_mut()?.push('!');
    *sequence.back_mut()? = "z".to_string();
    assert_eq!(sequence.data(), &["a!", "b", "z"]);

    let empty = Sequence::<String>::new();
    assert_eq!(empty.front(), Err(Error::EmptyContainer));
    assert_eq!(empty.front_ref(), Err(Error::EmptyContainer));
    assert_eq!(empty.back(), Err(Error::EmptyContainer));
    assert_eq!(empty.back_ref(), Err(Error::EmptyContainer));

    Ok(())
}

#[test]
fn queries_do_not_mutate() {
    let sequence = Sequence::<i32>::from_data([4, 5, 6]);

    for _ in 0..3 {
        assert_eq!(sequence.size(), 3);
        assert!(!sequence.is_empty());
        assert_eq!(sequence.at(1), 5);
        assert_eq!(sequence.length(), 3);
    }

    assert_eq!(sequence.data(), &[4, 5, 6]);
}

#[test]
fn clone_is_deep() {
    let original = Sequence::<Vec<u8>>::from_data([vec![1], vec![2]]);
    let mut copy = original.clone();

    copy.at_mut(0).push(9);
    copy.push_back(vec![3]);

    assert_eq!(original.data(), &[vec![1], vec![2]]);
    assert_eq!(copy.data(), &[vec![1, 9], vec![2], vec![3]]);
    assert_ne!(original.at_ref(1) as *const Vec<u8>, copy.at_ref(1) as *const Vec<u8>);
}

#[test]
fn capability_follows_strategy() {
    assert_eq!(Sequence::<i32>::new().capability(), CapabilityKind::Opaque);
    assert_eq!(Sequence::<i32, Equatable>::new().capability(), CapabilityKind::Equality);
    assert_eq!(Sequence::<i32, Ordered>::new().capability(), CapabilityKind::Ordering);

    let converted = Sequence::<i32>::from_data([1, 2]).into_capability::<Equatable>();
    assert_eq!(converted.capability(), CapabilityKind::Equality);
    assert_eq!(converted.data(), &[1, 2]);
}

#[test]
fn visit_in_both_directions() {
    let sequence = Sequence::<i32>::from_data([1, 2, 3, 4]);

    let mut forward = vec![];
    sequence.visit(|value| {
        forward.push(*value);
        ControlFlow::Continue(())
    });
    assert_eq!(forward, vec![1, 2, 3, 4]);

    let mut backward = vec![];
    sequence.visit_reverse(|value| {
        backward.push(*value);
        ControlFlow::Continue(())
    });
    assert_eq!(backward, vec![4, 3, 2, 1]);
}

#[test]
fn visit_stops_on_break_and_restarts() {
    let sequence = Sequence::<i32>::from_data([1, 2, 3, 4]);

    for _ in 0..2 {
        let mut seen = vec![];
        sequence.visit(|value| {
            seen.push(*value);
            if *value == 2 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
        });
        assert_eq!(seen, vec![1, 2]);
    }

    let mut seen = vec![];
    sequence.visit_reverse(|value| {
        seen.push(*value);
        ControlFlow::Break(())
    });
    assert_eq!(seen, vec![4]);
}

#[test]
fn visit_mut_updates_elements() {
    let mut sequence = Sequence::<i32>::from_data([1, 2, 3]);

    sequence.visit_mut(|value| {
        *value *= 10;
        ControlFlow::Continue(())
    });
    assert_eq!(sequence.data(), &[10, 20, 30]);

    sequence.visit_reverse_mut(|value| {
        *value += 1;
        ControlFlow::Break(())
    });
    assert_eq!(sequence.data(), &[10, 20, 31]);
}

#[test]
fn visit_on_empty_never_calls() {
    let sequence = Sequence::<i32>::new();
    sequence.visit(|_| panic!("visitor called on empty sequence"));
    sequence.visit_reverse(|_| panic!("visitor called on empty sequence"));
}
