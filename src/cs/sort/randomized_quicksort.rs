use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::partition::{check_range, partition};

/// Swaps a uniformly chosen element of `arr[low..=high]` into the pivot slot
/// `high`, then partitions the range with [`partition`].
///
/// Returns the pivot's final index, with the same postcondition as [`partition`].
///
/// # Panics
/// Panics if `low > high` or `high >= arr.len()`.
pub fn partition_randomized<T, R>(arr: &mut [T], low: usize, high: usize, rng: &mut R) -> usize
where
    T: Ord,
    R: Rng + ?Sized,
{
    check_range(arr.len(), low, high);
    let pivot_index = rng.gen_range(low..=high);
    arr.swap(pivot_index, high);
    partition(arr, low, high)
}

/// Sorts a slice in place with randomized-pivot quicksort, drawing pivots from `rng`.
///
/// Expected O(n log n) comparisons regardless of input order. The result is
/// identical to [`quicksort`](super::quicksort::quicksort) for every `rng`.
pub fn randomized_quicksort_with_rng<T, R>(arr: &mut [T], rng: &mut R)
where
    T: Ord,
    R: Rng + ?Sized,
{
    if arr.len() > 1 {
        randomized_quicksort_range(arr, 0, arr.len() - 1, rng);
    }
}

/// Randomized counterpart of [`quicksort_range`](super::quicksort::quicksort_range).
///
/// Only the smaller side of each partition is recursed into, so the stack stays
/// O(log n) deep even on all-equal input, where every pivot lands on `high`.
pub fn randomized_quicksort_range<T, R>(
    arr: &mut [T],
    mut low: usize,
    mut high: usize,
    rng: &mut R,
) where
    T: Ord,
    R: Rng + ?Sized,
{
    while low < high {
        let q = partition_randomized(arr, low, high, rng);
        if q - low < high - q {
            if q > low {
                randomized_quicksort_range(arr, low, q - 1, rng);
            }
            low = q + 1;
        } else {
            randomized_quicksort_range(arr, q + 1, high, rng);
            if q == low {
                break;
            }
            high = q - 1;
        }
    }
}

/// Sorts a slice using pivots drawn from the thread-local generator.
pub fn randomized_quicksort<T: Ord>(arr: &mut [T]) {
    log::debug!("randomized_quicksort: {} elements", arr.len());
    randomized_quicksort_with_rng(arr, &mut rand::thread_rng());
}

/// Sorts a slice using a ChaCha20 generator seeded with `seed`, so the sequence
/// of pivots (and therefore the work done) is reproducible.
pub fn randomized_quicksort_seeded<T: Ord>(arr: &mut [T], seed: u64) {
    log::debug!("randomized_quicksort: {} elements, seed {seed}", arr.len());
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    randomized_quicksort_with_rng(arr, &mut rng);
}
