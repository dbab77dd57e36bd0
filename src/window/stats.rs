use super::bucket::Bucket;
use super::iter::WindowIter;
use super::sample::Sample;
use crate::clock::{Clock, SystemClock};
use crate::error::EmptyWindow;
use crate::percentile_to_rank;
use ordered_float::OrderedFloat;

/// Number of one-second slots kept by `WindowStats::default`
pub const DEFAULT_WINDOW: usize = 60;

/// Bounded, time-windowed sample store
///
/// Holds one bucket per second of the retention window, indexed by
/// `timestamp % window`. Inserting never scans the ring: a slot whose bucket
/// carries an older second is wiped the instant a newer second maps onto it,
/// which is the whole expiry mechanism. The total count is not tracked
/// separately, keeping inserts O(1) and making `len` O(window).
///
/// Nothing is synchronized; sharing a store across threads requires external
/// mutual exclusion.
#[derive(Debug)]
pub struct WindowStats<T = OrderedFloat<f64>, C = SystemClock> {
    buckets: Box<[Bucket<T>]>,
    clock: C,
}

impl<T> WindowStats<T, SystemClock> {
    /// Create a store retaining the last `window` seconds, timestamping
    /// implicit inserts with the wall clock
    pub fn new(window: usize) -> WindowStats<T, SystemClock> {
        WindowStats::with_clock(window, SystemClock)
    }
}

impl<T> Default for WindowStats<T> {
    fn default() -> WindowStats<T> {
        WindowStats::new(DEFAULT_WINDOW)
    }
}

impl<T, C> WindowStats<T, C> {
    /// Create a store with an injected time source
    pub fn with_clock(window: usize, clock: C) -> WindowStats<T, C> {
        assert!(
            window > 0,
            "Invalid window {}: must hold at least one second",
            window
        );
        WindowStats {
            buckets: (0..window).map(|_| Bucket::new()).collect(),
            clock,
        }
    }

    /// Retention window length in seconds, which is also the slot count
    pub fn window(&self) -> usize {
        self.buckets.len()
    }

    /// Insert a value with an explicit timestamp
    ///
    /// Timestamps are expected to be non-decreasing across calls; an older
    /// timestamp mapping onto a slot that holds newer samples wipes them.
    /// Complexity: O(1) amortized.
    pub fn add_at(&mut self, timestamp: u64, value: impl Into<T>) {
        let slot = (timestamp % self.buckets.len() as u64) as usize;
        self.buckets[slot].push(Sample {
            timestamp,
            value: value.into(),
        });
    }

    /// Number of samples physically stored, including any residue from
    /// seconds that have already slid out of the window. O(window).
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.is_empty())
    }

    /// Drop every stored sample, keeping slot allocations. O(window).
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
    }

    /// Oldest-to-newest traversal of the samples still inside the window
    ///
    /// The window bounds are computed once per call from the current
    /// contents, so re-iterating an unchanged store repeats the same
    /// sequence, while iterating after an insert reflects the new window.
    pub fn iter(&self) -> WindowIter<'_, T> {
        WindowIter::new(&self.buckets)
    }
}

impl<T, C: Clock> WindowStats<T, C> {
    /// Insert a value timestamped with the clock's current second.
    /// Complexity: O(1) amortized.
    pub fn add(&mut self, value: impl Into<T>) {
        let now = self.clock.now();
        self.add_at(now, value);
    }
}

impl<T: Ord + Copy, C> WindowStats<T, C> {
    /// Value at percentile `p` among the samples still inside the window
    ///
    /// The live values are copied out and a partition-based selection places
    /// the requested rank, expected O(n) per query. Nothing is maintained
    /// between queries; that trade keeps inserts O(1). A `p` of 100 or above
    /// selects the maximum.
    pub fn percentile(&self, p: u32) -> Result<T, EmptyWindow> {
        let mut values: Vec<T> = self.iter().map(|sample| sample.value).collect();
        if values.is_empty() {
            return Err(EmptyWindow);
        }
        let rank = percentile_to_rank(p, values.len());
        let (_, nth, _) = values.select_nth_unstable(rank);
        Ok(*nth)
    }

    /// The 70th percentile, the usual service-latency question
    pub fn p70(&self) -> Result<T, EmptyWindow> {
        self.percentile(70)
    }
}

impl<'a, T, C> IntoIterator for &'a WindowStats<T, C> {
    type Item = &'a Sample<T>;
    type IntoIter = WindowIter<'a, T>;

    fn into_iter(self) -> WindowIter<'a, T> {
        self.iter()
    }
}
