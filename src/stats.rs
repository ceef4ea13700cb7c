use std::fmt;

/// Work performed by a single instrumented sort call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Outer passes over the unsorted prefix, including the final pass that detected no swap.
    pub passes: usize,
    pub comparisons: u64,
    pub swaps: u64,
}

impl SortStats {
    /// Upper bound on comparisons for an input of `len` elements, n(n-1)/2.
    pub fn max_comparisons(len: usize) -> u64 {
        let len = len as u64;
        len * len.saturating_sub(1) / 2
    }
}

impl fmt::Display for SortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "passes: {} comparisons: {} swaps: {}",
            self.passes, self.comparisons, self.swaps
        )
    }
}
