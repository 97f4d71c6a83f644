use super::partition::partition;
use crate::error::{Error, Result};

/// Sorts a slice in place with deterministic Lomuto quicksort.
///
/// The last element of every range is used as the pivot, so already sorted,
/// reverse sorted or all-equal input degrades to O(n^2) comparisons. Recursion
/// depth is O(log n) for every input. Not stable.
///
/// # Examples
/// ```
/// use lomuto::sort::quicksort;
///
/// let mut arr = vec![5, -3, 0, 0, 9];
/// quicksort(&mut arr);
/// assert_eq!(arr, vec![-3, 0, 0, 5, 9]);
/// ```
pub fn quicksort<T: Ord>(arr: &mut [T]) {
    log::debug!("quicksort: {} elements", arr.len());
    if arr.len() > 1 {
        quicksort_range(arr, 0, arr.len() - 1);
    }
}

/// Sorts the inclusive range `arr[low..=high]`, leaving the rest of the slice untouched.
///
/// A range with `low >= high` holds at most one element and is returned as is.
///
/// # Panics
/// Panics if `low < high` and `high >= arr.len()`.
pub fn quicksort_range<T: Ord>(arr: &mut [T], mut low: usize, mut high: usize) {
    while low < high {
        let q = partition(arr, low, high);
        // Recurse into the smaller side and loop on the larger one, so the stack
        // stays O(log n) deep. `q - 1` would underflow when the pivot lands on `low`.
        if q - low < high - q {
            if q > low {
                quicksort_range(arr, low, q - 1);
            }
            low = q + 1;
        } else {
            quicksort_range(arr, q + 1, high);
            if q == low {
                break;
            }
            high = q - 1;
        }
    }
}

/// Checked variant of [`quicksort_range`] that reports an invalid range
/// instead of panicking.
pub fn try_quicksort_range<T: Ord>(arr: &mut [T], low: usize, high: usize) -> Result<()> {
    if low > high || high >= arr.len() {
        return Err(Error::InvalidRange {
            low,
            high,
            len: arr.len(),
        });
    }
    quicksort_range(arr, low, high);
    Ok(())
}
