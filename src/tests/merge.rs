//! Merge stability: merging two sorted runs of a permutation must restore
//! the identity ordering.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use unittest::{assert, assert_eq, def_test, tests_name};

use crate::config::{MERGE_TEST_ROUNDS, MERGE_TEST_SIZE};
use crate::map::merge::companion_value;
use crate::map::{Pair, merge, sort_pairs, split_permutation};

#[def_test]
fn merge_reconstructs_identity() {
    let seed: u64 = rand::random();
    info!("merge_reconstructs_identity: seed {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut scratch = Vec::new();

    for round in 0..MERGE_TEST_ROUNDS {
        let split = rng.random_range(0..=MERGE_TEST_SIZE);
        let mut pairs = split_permutation(MERGE_TEST_SIZE, split, round);
        merge(&mut pairs, split, &mut scratch);
        for (k, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.key, k as u64, "round {} split {}", round, split);
            assert_eq!(pair.value, companion_value(k as u64), "round {}", round);
        }
    }
}

#[def_test]
fn merge_at_the_edges_is_a_no_op() {
    let mut scratch = Vec::new();
    for split in [0, MERGE_TEST_SIZE] {
        let mut pairs = split_permutation(MERGE_TEST_SIZE, split, 1);
        merge(&mut pairs, split, &mut scratch);
        assert!(pairs.iter().enumerate().all(|(k, p)| p.key == k as u64));
    }
}

#[def_test]
fn sort_keeps_equal_keys_in_insertion_order() {
    let mut pairs: Vec<Pair> = (0..64u64).map(|i| Pair::new(i % 5, i)).collect();
    sort_pairs(&mut pairs);
    for window in pairs.windows(2) {
        let (a, b) = (window[0], window[1]);
        assert!(a.key < b.key || (a.key == b.key && a.value < b.value));
    }
}

tests_name!(MERGE_TESTS;
    merge_reconstructs_identity,
    merge_at_the_edges_is_a_no_op,
    sort_keeps_equal_keys_in_insertion_order,
);
