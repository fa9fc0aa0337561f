//! Stable merge of key-ordered runs, and the merge sort built on it.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::Pair;

/// Merge the key-ordered runs `pairs[..mid]` and `pairs[mid..]` in place.
///
/// Equal keys keep left-before-right order. `scratch` holds a copy of the
/// left run and is reused across calls.
pub fn merge(pairs: &mut [Pair], mid: usize, scratch: &mut Vec<Pair>) {
    if mid == 0 || mid >= pairs.len() || pairs[mid - 1].key <= pairs[mid].key {
        return;
    }

    scratch.clear();
    scratch.extend_from_slice(&pairs[..mid]);

    let (mut left, mut right, mut out) = (0, mid, 0);
    while left < scratch.len() && right < pairs.len() {
        // `out` trails `right`, so no unread element is overwritten.
        if pairs[right].key < scratch[left].key {
            pairs[out] = pairs[right];
            right += 1;
        } else {
            pairs[out] = scratch[left];
            left += 1;
        }
        out += 1;
    }

    // Whatever remains of the right run is already in place.
    let rest = &scratch[left..];
    pairs[out..out + rest.len()].copy_from_slice(rest);
}

/// Bottom-up merge sort by key. Stable.
pub fn sort_pairs(pairs: &mut [Pair]) {
    let n = pairs.len();
    let mut scratch = Vec::new();
    let mut width = 1;
    while width < n {
        let mut start = 0;
        while start + width < n {
            let end = (start + 2 * width).min(n);
            merge(&mut pairs[start..end], width, &mut scratch);
            start = end;
        }
        width *= 2;
    }
}

/// Value paired with `key` in generated test data.
pub fn companion_value(key: u64) -> u64 {
    key * 2 + 1
}

/// Build `n` pairs whose keys are a permutation of `0..n`, split at `split`
/// into two independently sorted runs. The partition depends on `seed`.
pub fn split_permutation(n: usize, split: usize, seed: u64) -> Vec<Pair> {
    let split = split.min(n);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut keys: Vec<u64> = (0..n as u64).collect();
    keys.shuffle(&mut rng);
    let (left, right) = keys.split_at_mut(split);
    left.sort_unstable();
    right.sort_unstable();

    keys.into_iter()
        .map(|key| Pair::new(key, companion_value(key)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_restores_identity() {
        let mut scratch = Vec::new();
        for split in 0..=16 {
            let mut pairs = split_permutation(16, split, split as u64);
            merge(&mut pairs, split, &mut scratch);
            for (k, pair) in pairs.iter().enumerate() {
                assert_eq!(pair.key, k as u64);
                assert_eq!(pair.value, companion_value(k as u64));
            }
        }
    }

    #[test]
    fn test_merge_keeps_equal_keys_in_order() {
        // Values record the original position.
        let mut pairs = vec![
            Pair::new(1, 0),
            Pair::new(3, 1),
            Pair::new(3, 2),
            Pair::new(1, 3),
            Pair::new(3, 4),
        ];
        merge(&mut pairs, 3, &mut Vec::new());
        let order: Vec<u64> = pairs.iter().map(|p| p.value).collect();
        assert_eq!(order, [0, 3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_pairs_is_stable() {
        let mut pairs: Vec<Pair> = [5u64, 2, 5, 1, 2, 9, 0, 5]
            .iter()
            .enumerate()
            .map(|(i, &k)| Pair::new(k, i as u64))
            .collect();
        let mut expected = pairs.clone();
        expected.sort_by_key(|p| p.key);

        sort_pairs(&mut pairs);
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_sort_handles_tiny_inputs() {
        let mut empty: Vec<Pair> = Vec::new();
        sort_pairs(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![Pair::new(4, 4)];
        sort_pairs(&mut one);
        assert_eq!(one, [Pair::new(4, 4)]);
    }
}
