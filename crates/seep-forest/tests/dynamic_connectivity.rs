//! Integration test: dynamic-connectivity client over a pair stream.
//!
//! Replays a fixed stream of `p q` pairs, recording which pairs joined
//! two previously separate components, and checks the final partition.

use seep_forest::DisjointSetForest;

const PAIRS: [(usize, usize); 11] = [
    (4, 3),
    (3, 8),
    (6, 5),
    (9, 4),
    (2, 1),
    (8, 9),
    (5, 0),
    (7, 2),
    (6, 1),
    (1, 0),
    (6, 7),
];

fn replay(forest: &mut DisjointSetForest) -> Vec<(usize, usize)> {
    let mut joined = Vec::new();
    for &(p, q) in &PAIRS {
        if forest.connected(p, q).unwrap() {
            continue;
        }
        forest.union(p, q).unwrap();
        joined.push((p, q));
    }
    joined
}

#[test]
fn ten_element_stream_leaves_two_components() {
    let mut forest = DisjointSetForest::new(10).unwrap();
    let joined = replay(&mut forest);

    assert_eq!(forest.count(), 2);
    assert_eq!(
        joined,
        vec![
            (4, 3),
            (3, 8),
            (6, 5),
            (9, 4),
            (2, 1),
            (5, 0),
            (7, 2),
            (6, 1),
        ]
    );

    // {0, 1, 2, 5, 6, 7} and {3, 4, 8, 9}
    for p in [1, 2, 5, 6, 7] {
        assert!(forest.connected(0, p).unwrap());
    }
    for p in [4, 8, 9] {
        assert!(forest.connected(3, p).unwrap());
    }
    assert!(!forest.connected(0, 3).unwrap());
    assert_eq!(forest.component_size(0).unwrap(), 6);
    assert_eq!(forest.component_size(9).unwrap(), 4);
}

#[test]
fn every_union_decrements_count_exactly_once() {
    let mut forest = DisjointSetForest::new(10).unwrap();
    let mut expected = 10;
    for &(p, q) in &PAIRS {
        if forest.union_roots(p, q).unwrap().is_some() {
            expected -= 1;
        }
        assert_eq!(forest.count(), expected);
    }
}

#[test]
fn single_element_forest() {
    let mut forest = DisjointSetForest::new(1).unwrap();
    assert_eq!(forest.count(), 1);
    assert_eq!(forest.find(0).unwrap(), 0);
    forest.union(0, 0).unwrap();
    assert_eq!(forest.count(), 1);
    assert!(forest.find(1).is_err());
}
