// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration tests against known listings.
//!
//! Positions and labels here are the ones the mode plots were published
//! under, so any change to pair order, sign order or interior lists shows
//! up as a mismatch.

mod common;

use common::labels;
use mode_search::enumerate::PairSelection;
use mode_search::sos::{find_pairs, generate_signs, has_decomposition, pairs_of, Pair};
use mode_search::{Enumerator, ModeError, SearchConfig};
use std::collections::BTreeMap;

#[test]
fn test_decomposition_agrees_with_pairs() {
    for k in 0..=200 {
        assert_eq!(
            has_decomposition(k).unwrap(),
            !find_pairs(k).unwrap().is_empty(),
            "k = {}",
            k
        );
    }
}

#[test]
fn test_pairs_of_twenty_five() {
    assert_eq!(
        find_pairs(25).unwrap(),
        vec![Pair::new(0, 5), Pair::new(3, 4), Pair::new(4, 3), Pair::new(5, 0)]
    );
    assert_eq!(find_pairs(2).unwrap(), vec![Pair::new(1, 1)]);
    assert!(find_pairs(3).unwrap().is_empty());
}

#[test]
fn test_negative_k_is_invalid() {
    assert!(matches!(find_pairs(-1), Err(ModeError::InvalidInput(_))));
    assert!(matches!(has_decomposition(-4), Err(ModeError::InvalidInput(_))));
}

#[test]
fn test_sign_generation_shapes() {
    let single = generate_signs(&[Pair::new(1, 1)]).unwrap();
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].values(), vec![1]);

    let triple = generate_signs(&find_pairs(50).unwrap()).unwrap();
    assert_eq!(triple.len(), 4);
    assert!(triple.iter().all(|s| s.values()[0] == 1));
    for (i, a) in triple.iter().enumerate() {
        for b in &triple[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_first_forty_positions() {
    let modes = Enumerator::default().count(40).unwrap();
    let expected_k = [
        0, 1, 1, 2, 4, 4, 5, 5, 8, 9, 9, 10, 10, 13, 13, 16, 16, 17, 17, 18, 20, 20, 25, 25, 25, 25,
        25, 25, 25, 25, 25, 25, 26, 26, 29, 29, 32, 34, 34, 36,
    ];
    let ks: Vec<u64> = modes.iter().map(|d| d.k).collect();
    assert_eq!(ks, expected_k);

    let positions: Vec<u64> = modes.iter().map(|d| d.position).collect();
    assert_eq!(positions, (1..=40).collect::<Vec<u64>>());

    // k = 25: eight full assignments, then two interior ones
    assert_eq!(modes[22].to_string(), "[(0, 5), (3, 4), (4, 3), (5, 0)] [1, 1, 1, 1]");
    assert_eq!(modes[29].to_string(), "[(0, 5), (3, 4), (4, 3), (5, 0)] [1, -1, -1, -1]");
    assert_eq!(modes[30].selection, PairSelection::Interior);
    assert_eq!(modes[30].to_string(), "[(3, 4), (4, 3)] [1, 1]");
    assert_eq!(modes[31].to_string(), "[(3, 4), (4, 3)] [1, -1]");
}

#[test]
fn test_k_is_monotone() {
    let modes = Enumerator::default().count(500).unwrap();
    assert!(modes.windows(2).all(|w| w[0].k <= w[1].k));
}

#[test]
fn test_per_k_counts() {
    let mut per_k: BTreeMap<u64, u64> = BTreeMap::new();
    for descriptor in Enumerator::default().with_k_limit(400).iter() {
        *per_k.entry(descriptor.k).or_default() += 1;
    }
    for k in 0..=400u64 {
        let len = pairs_of(k).len() as u32;
        let expected = match len {
            0 => 0,
            1 | 2 => 1 << (len - 1),
            _ => (1 << (len - 1)) + (1 << (len - 3)),
        };
        assert_eq!(per_k.get(&k).copied().unwrap_or(0), expected, "k = {}", k);
    }
}

#[test]
fn test_count_is_idempotent() {
    let enumerator = Enumerator::default();
    assert_eq!(enumerator.count(120).unwrap(), enumerator.count(120).unwrap());
}

#[test]
fn test_range_from_one_matches_count() {
    let enumerator = Enumerator::default();
    assert_eq!(enumerator.range(1, 90).unwrap(), enumerator.count(90).unwrap());
}

#[test]
fn test_range_is_a_window_of_count() {
    let enumerator = Enumerator::default();
    let all = enumerator.count(144).unwrap();
    let window = enumerator.range(73, 144).unwrap();
    assert_eq!(window.len(), 72);
    assert_eq!(window, all[72..].to_vec());
}

#[test]
fn test_reference_positions() {
    let modes = Enumerator::default().range(73, 144).unwrap();
    assert_eq!(
        modes[0].label(),
        "N = 73 | S = 65: [(1, 8), (4, 7), (7, 4), (8, 1)] [1, -1, -1, 1]"
    );
    assert_eq!(modes[27].label(), "N = 100 | S = 89: [(5, 8), (8, 5)] [1, 1]");
    let last = modes.last().unwrap();
    assert_eq!(last.label(), "N = 144 | S = 125: [(5, 10), (10, 5)] [1, -1]");
    assert_eq!(last.selection, PairSelection::Interior);
}

#[test]
fn test_selection_keeps_caller_order() {
    let picked = Enumerator::default()
        .select(&SearchConfig::default().selected)
        .unwrap();
    assert_eq!(
        labels(&picked),
        vec![
            "N = 21 | S = 20: [(2, 4), (4, 2)] [1, 1]",
            "N = 17 | S = 16: [(0, 4), (4, 0)] [1, -1]",
            "N = 33 | S = 26: [(1, 5), (5, 1)] [1, 1]",
            "N = 22 | S = 20: [(2, 4), (4, 2)] [1, -1]",
            "N = 62 | S = 58: [(3, 7), (7, 3)] [1, -1]",
            "N = 52 | S = 50: [(1, 7), (5, 5), (7, 1)] [1, 1, 1]",
            "N = 233 | S = 200: [(2, 14), (10, 10), (14, 2)] [1, 1, 1]",
        ]
    );
}

#[test]
fn test_selection_allows_duplicates() {
    let picked = Enumerator::default().select(&[5, 2, 5]).unwrap();
    let positions: Vec<u64> = picked.iter().map(|d| d.position).collect();
    assert_eq!(positions, vec![5, 2, 5]);
}

#[test]
fn test_count_of_one_is_origin() {
    let modes = Enumerator::default().count(1).unwrap();
    assert_eq!(modes.len(), 1);
    assert_eq!(modes[0].k, 0);
    assert_eq!(modes[0].pairs, vec![Pair::new(0, 0)]);
    assert_eq!(modes[0].signs.values(), vec![1]);
}

#[test]
fn test_invalid_requests() {
    let enumerator = Enumerator::default();
    assert_eq!(
        enumerator.range(10, 10).unwrap_err(),
        ModeError::InvalidRange { start: 10, end: 10 }
    );
    assert_eq!(
        enumerator.range(10, 5).unwrap_err(),
        ModeError::InvalidRange { start: 10, end: 5 }
    );
    assert!(matches!(enumerator.range(0, 5), Err(ModeError::InvalidInput(_))));
    assert!(matches!(enumerator.count(0), Err(ModeError::InvalidInput(_))));
    assert!(matches!(enumerator.count(-3), Err(ModeError::InvalidInput(_))));
    assert!(matches!(enumerator.select(&[]), Err(ModeError::InvalidInput(_))));
    assert!(matches!(enumerator.select(&[4, 0]), Err(ModeError::InvalidInput(_))));
}

#[test]
fn test_range_too_large() {
    let enumerator = Enumerator::new(10);
    assert_eq!(
        enumerator.range(1, 11).unwrap_err(),
        ModeError::RangeTooLarge {
            requested: 11,
            max: 10
        }
    );
    assert!(enumerator.range(1, 10).is_ok());
    assert!(matches!(
        enumerator.select(&[1; 11]),
        Err(ModeError::RangeTooLarge { requested: 11, .. })
    ));
}

#[test]
fn test_unreachable_with_limit() {
    let enumerator = Enumerator::default().with_k_limit(25);
    assert!(enumerator.range(20, 32).is_ok());
    assert_eq!(
        enumerator.range(20, 33).unwrap_err(),
        ModeError::UnreachableTarget {
            target: 33,
            k_limit: 25
        }
    );
    assert!(matches!(
        enumerator.select(&[3, 40]),
        Err(ModeError::UnreachableTarget { target: 40, .. })
    ));
}

#[test]
fn test_lazy_stream_from_offset() {
    let mut modes = Enumerator::default().iter_from(52).unwrap();
    let first = modes.next().unwrap();
    assert_eq!(first.position, 52);
    assert_eq!(first.k, 50);
    // the positions skipped before 52 were still visited
    assert_eq!(modes.position(), 52);
}
