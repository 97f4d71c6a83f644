/// Lomuto partition of `arr[low..=high]` around the pivot `arr[high]`.
///
/// Every element `<=` the pivot is moved to the front of the range, then the
/// pivot is swapped into the slot right after them. Returns the pivot's final
/// index `q`:
///
/// - `arr[low..q]` holds only values `<= arr[q]`
/// - `arr[q]` is the value that was at `arr[high]` before the call
/// - `arr[q + 1..=high]` holds whatever remains, with no ordering promised
///
/// Only swaps are performed, so the multiset of values in the range is
/// preserved and elements outside the range are never touched.
///
/// # Panics
/// Panics if `low > high` or `high >= arr.len()`.
pub fn partition<T: Ord>(arr: &mut [T], low: usize, high: usize) -> usize {
    check_range(arr.len(), low, high);

    // `store` is the next free slot of the "<= pivot" region, i.e. boundary + 1.
    let mut store = low;
    for j in low..high {
        if arr[j] <= arr[high] {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, high);
    log::trace!("partition [{low}, {high}] -> pivot at {store}");
    store
}

/// Asserts that `[low, high]` is a non-empty inclusive range inside a slice of
/// length `len`.
pub(crate) fn check_range(len: usize, low: usize, high: usize) {
    assert!(
        low <= high,
        "partition range is inverted: low ({low}) > high ({high})"
    );
    assert!(
        high < len,
        "partition range [{low}, {high}] is out of bounds for slice of length {len}"
    );
}
