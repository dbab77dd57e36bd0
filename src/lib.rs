//! Bounded, time-windowed sample store with on-demand percentiles
//!
//! `WindowStats` keeps the observations of the last `window` seconds in a
//! fixed ring of per-second buckets: inserting is O(1) amortized, expiry is
//! a side effect of slot reuse, and any percentile over the retained samples
//! is computed when asked for, by copying the live values out and running a
//! partition-based selection.
//!
//! ```
//! use window_stats::F64Stats;
//!
//! let mut stats = F64Stats::new(60);
//! for value in &[10., 20., 30., 40., 50.] {
//!     stats.add_at(1_000, *value);
//! }
//! assert_eq!(stats.p70().unwrap().into_inner(), 50.);
//! ```
//!
//! Nothing here is synchronized: a store shared across threads needs
//! external mutual exclusion, and the borrow checker already rejects
//! mutating a store while a traversal borrows it.


pub mod clock;
mod error;
#[cfg(feature = "generator")]
pub mod generator;
mod window;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::EmptyWindow;
pub use window::{Sample, WindowIter, WindowStats, DEFAULT_WINDOW};

/// Store of `f64` observations with the default wall-clock time source
pub type F64Stats = WindowStats<ordered_float::OrderedFloat<f64>>;

/// Convert from percentile to the zero-based rank among `num` sorted values
/// using ceiling-biased unsigned arithmetic
/// Example, for num = 5:
/// p          -> rank
/// 0          -> 0
/// (0, 20]    -> 1
/// (20, 40]   -> 2
/// (40, 60]   -> 3
/// (60, 100]  -> 4 (the formula reaches 5 at p > 80; ranks past the last
///               value are clamped to it, so p = 100 selects the maximum)
pub fn percentile_to_rank(p: u32, num: usize) -> usize {
    assert!(num > 0, "Invalid num {}: no rank among zero values", num);
    let rank = (num as u64 * u64::from(p) + 99) / 100;
    (rank as usize).min(num - 1)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rank_steps() {
        assert_eq!(percentile_to_rank(0, 5), 0);
        assert_eq!(percentile_to_rank(1, 5), 1);
        assert_eq!(percentile_to_rank(20, 5), 1);
        assert_eq!(percentile_to_rank(21, 5), 2);
        assert_eq!(percentile_to_rank(40, 5), 2);
        assert_eq!(percentile_to_rank(60, 5), 3);
        assert_eq!(percentile_to_rank(70, 5), 4);
        assert_eq!(percentile_to_rank(80, 5), 4);
        assert_eq!(percentile_to_rank(100, 5), 4);
    }

    #[test]
    fn rank_clamps_above_100() {
        assert_eq!(percentile_to_rank(101, 5), 4);
        assert_eq!(percentile_to_rank(1_000, 5), 4);
    }

    #[test]
    fn rank_of_a_single_value() {
        assert_eq!(percentile_to_rank(0, 1), 0);
        assert_eq!(percentile_to_rank(50, 1), 0);
        assert_eq!(percentile_to_rank(100, 1), 0);
    }

    #[test]
    #[should_panic]
    fn rank_of_nothing() {
        percentile_to_rank(50, 0);
    }
}
