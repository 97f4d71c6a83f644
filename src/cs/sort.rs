//! In-place quicksort built on the Lomuto partition scheme.
//!
//! Two sorters share one partition primitive:
//! - [`quicksort`] always pivots on the last element of the range
//! - [`randomized_quicksort`] first swaps a uniformly chosen element into the
//!   pivot slot, which removes the O(n^2) behaviour on sorted input
//!
//! Both produce the same output for the same input. Neither is stable.
//!
//! # Examples
//!
//! ```rust
//! use lomuto::sort::{quicksort, randomized_quicksort_seeded};
//!
//! let mut a = vec![5, -3, 0, 0, 9, -100000, 100000];
//! let mut b = a.clone();
//!
//! quicksort(&mut a);
//! randomized_quicksort_seeded(&mut b, 2019);
//!
//! assert_eq!(a, vec![-100000, -3, 0, 0, 5, 9, 100000]);
//! assert_eq!(a, b);
//! ```

pub mod partition;
pub mod quicksort;
pub mod randomized_quicksort;

pub use partition::partition;
pub use quicksort::{quicksort, quicksort_range, try_quicksort_range};
pub use randomized_quicksort::{
    partition_randomized, randomized_quicksort, randomized_quicksort_range,
    randomized_quicksort_seeded, randomized_quicksort_with_rng,
};
