//! Bubble sort with early exit.
//!
//! Each pass walks the unsorted prefix and swaps adjacent elements that are strictly out of
//! order, which moves the largest remaining element to the end of the prefix. A pass without a
//! single swap proves the prefix sorted and ends the sort. Only strict inequality swaps, so equal
//! elements keep their relative order.

use std::cmp::Ordering;

use crate::error::SortError;
use crate::stats::SortStats;

sort_impl!("bubble_stable");

/// Sorts `v` in place and returns it.
#[inline]
pub fn sort<T>(v: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    sort_by(v, |a, b| a.cmp(b))
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with_stats(v, compare);
    v
}

#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(v, |a, b| key(a).cmp(&key(b)))
}

/// Sorts `v` and reports how much work it took.
#[inline]
pub fn sort_with_stats<T>(v: &mut [T]) -> SortStats
where
    T: Ord,
{
    sort_by_with_stats(v, |a, b| a.cmp(b))
}

pub fn sort_by_with_stats<T, F>(v: &mut [T], mut compare: F) -> SortStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    match bubble_sort(v, &mut |a, b| Some(compare(a, b) == Ordering::Greater)) {
        Ok(stats) => stats,
        Err(_) => unreachable!("a total order always yields an ordering"),
    }
}

/// Sorts a slice of partially ordered elements, such as floats.
///
/// Fails with [`SortError::IncomparableElements`] on the first pair that has no ordering, e.g. a
/// `NaN`. The slice is then left partially sorted.
#[inline]
pub fn try_sort<T>(v: &mut [T]) -> Result<&mut [T], SortError>
where
    T: PartialOrd,
{
    try_sort_by(v, |a, b| a.partial_cmp(b))
}

pub fn try_sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<&mut [T], SortError>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    bubble_sort(v, &mut |a, b| compare(a, b).map(|ord| ord == Ordering::Greater))?;
    Ok(v)
}

/// `is_greater` returns `None` if the two elements cannot be ordered.
fn bubble_sort<T, F>(v: &mut [T], is_greater: &mut F) -> Result<SortStats, SortError>
where
    F: FnMut(&T, &T) -> Option<bool>,
{
    let len = v.len();
    let mut stats = SortStats::default();

    // A pass with index len - 1 would have nothing left to compare.
    for i in 0..len.saturating_sub(1) {
        stats.passes += 1;
        let mut swapped = false;

        // v[len - i..] already holds the i largest elements in their final positions.
        for j in 0..(len - i - 1) {
            stats.comparisons += 1;
            let greater = is_greater(&v[j], &v[j + 1])
                .ok_or(SortError::IncomparableElements { left: j, right: j + 1 })?;

            if greater {
                v.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    Ok(stats)
}
