//! Benchmark harness around the sorting core.
//!
//! Populates lists with uniform random integers, times a sort over them and
//! formats the result for the console. The sorting functions themselves do no
//! timing or printing of their own.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::cs::sort::{quicksort, randomized_quicksort_with_rng};
use crate::error::{Error, Result};

/// Number of elements sorted by the benchmark program unless configured otherwise.
pub const DEFAULT_LIST_SIZE: usize = 50_000;

/// Seed used to populate the list and draw pivots, so runs are comparable.
pub const DEFAULT_SEED: u64 = 2019;

/// Smallest value produced by [`populate_list`] in the default configuration.
pub const DEFAULT_MIN_VALUE: i64 = -100_000;

/// Largest value produced by [`populate_list`] in the default configuration.
pub const DEFAULT_MAX_VALUE: i64 = 100_000;

/// Returns a list of `len` integers drawn uniformly from `min..=max`.
pub fn populate_list<R>(len: usize, min: i64, max: i64, rng: &mut R) -> Result<Vec<i64>>
where
    R: Rng + ?Sized,
{
    if min > max {
        return Err(Error::InvalidValueRange { min, max });
    }
    let dist = Uniform::new_inclusive(min, max);
    Ok((0..len).map(|_| dist.sample(rng)).collect())
}

/// The sorting algorithms the harness knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Last-element pivot.
    Deterministic,
    /// Uniformly random pivot.
    Randomized,
}

impl Algorithm {
    /// Human readable name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Deterministic => "Quick Sort",
            Algorithm::Randomized => "Quick Sort Randomized version",
        }
    }

    /// Sorts `arr` with this algorithm. `rng` is only consulted by the randomized variant.
    pub fn run<T, R>(&self, arr: &mut [T], rng: &mut R)
    where
        T: Ord,
        R: Rng + ?Sized,
    {
        match self {
            Algorithm::Deterministic => quicksort(arr),
            Algorithm::Randomized => randomized_quicksort_with_rng(arr, rng),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Deterministic => write!(f, "deterministic"),
            Algorithm::Randomized => write!(f, "randomized"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "deterministic" => Ok(Algorithm::Deterministic),
            "randomized" => Ok(Algorithm::Randomized),
            _ => Err(Error::InvalidAlgorithm(s.to_string())),
        }
    }
}

/// Outcome of a single timed sort.
#[derive(Debug, Clone, PartialEq)]
pub struct SortReport {
    pub algorithm: Algorithm,
    pub element_type: &'static str,
    pub len: usize,
    pub elapsed: Duration,
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Sorting an array of type Vec<{}> of {} elements.",
            self.element_type, self.len
        )?;
        writeln!(f, "Algorithm: {}", self.algorithm.label())?;
        write!(f, "Total Seconds : {}", self.elapsed.as_secs_f64())
    }
}

/// Sorts `arr` with `algorithm`, measuring wall-clock time, and checks the result.
///
/// Returns [`Error::NotSorted`] if the slice is out of order afterwards.
pub fn time_sort<T, R>(algorithm: Algorithm, arr: &mut [T], rng: &mut R) -> Result<SortReport>
where
    T: Ord,
    R: Rng + ?Sized,
{
    let start = Instant::now();
    algorithm.run(arr, rng);
    let elapsed = start.elapsed();

    check_sorted(arr)?;
    log::debug!(
        "{} sorted {} elements in {:?}",
        algorithm.label(),
        arr.len(),
        elapsed
    );

    Ok(SortReport {
        algorithm,
        element_type: std::any::type_name::<T>(),
        len: arr.len(),
        elapsed,
    })
}

/// Returns `Ok(())` if `arr` is in non-decreasing order.
pub fn check_sorted<T: Ord>(arr: &[T]) -> Result<()> {
    match arr.windows(2).position(|w| w[0] > w[1]) {
        Some(index) => Err(Error::NotSorted { index }),
        None => Ok(()),
    }
}

/// Renders a list between header and footer lines.
pub fn format_list<T: fmt::Debug>(arr: &[T]) -> String {
    format!("---- List ----\n{arr:?}\n---- ----")
}
