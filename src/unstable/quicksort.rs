//! Hybrid quicksort: median-of-three pivot, a Hoare style partition and insertion sort for small
//! sub-slices.

use std::cmp::Ordering;
use std::mem;

sort_impl!("quicksort_unstable");

/// Sub-slices up to this length are finished with insertion sort.
pub const SMALL_SORT_THRESHOLD: usize = 16;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();

        if len <= SMALL_SORT_THRESHOLD {
            insertion_sort(v, is_less);
            return;
        }

        let pivot_pos = choose_pivot(v, is_less);
        v.swap(0, pivot_pos);
        let mid = partition(v, is_less);

        let (left, right) = mem::take(&mut v).split_at_mut(mid);
        // right[0] is the pivot, already in its final position.
        let right = &mut right[1..];

        // Recurse into the shorter side and loop on the longer one, this bounds the stack depth to
        // O(log(len)).
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Sorts `v` by shifting each element left until it meets a smaller or equal one.
pub fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Index of the median of the first, middle and last element.
fn choose_pivot<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 3);

    let a = 0;
    let b = v.len() / 2;
    let c = v.len() - 1;

    let ab = is_less(&v[a], &v[b]);
    let bc = is_less(&v[b], &v[c]);
    let ac = is_less(&v[a], &v[c]);

    if ab == bc {
        b
    } else if ab == ac {
        c
    } else {
        a
    }
}

/// Partitions `v` around the pivot stored at `v[0]` and returns the pivot's final index.
///
/// Afterwards no element left of the pivot is greater and no element right of it is less.
/// Elements equal to the pivot stop both scans, so runs of equal values are split evenly instead
/// of degrading to quadratic time.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len >= 2);

    // v[1..l] <= pivot and v[r + 1..] >= pivot.
    let mut l = 1;
    let mut r = len - 1;

    loop {
        while l <= r && is_less(&v[l], &v[0]) {
            l += 1;
        }
        while l <= r && is_less(&v[0], &v[r]) {
            r -= 1;
        }

        if l >= r {
            break;
        }

        v.swap(l, r);
        l += 1;
        r -= 1;
    }

    v.swap(0, l - 1);
    l - 1
}
