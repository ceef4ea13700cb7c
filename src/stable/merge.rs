//! Bottom-up merge sort on a permutation of indices, applied to the slice with swaps at the end.
//! Needs no `Clone` or unsafe moves, at the cost of two `usize` buffers of the input length.

use std::cmp::Ordering;

sort_impl!("merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        // These inputs are always sorted.
        return;
    }

    let perm = sorted_permutation(v, is_less);
    apply_permutation(v, perm);
}

/// Returns `perm` such that `v[perm[0]], v[perm[1]], ..` is the stably sorted order of `v`.
fn sorted_permutation<T, F>(v: &[T], is_less: &mut F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut perm: Vec<usize> = (0..len).collect();
    let mut buf = vec![0usize; len];

    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(
                v,
                &perm[start..mid],
                &perm[mid..end],
                &mut buf[start..end],
                is_less,
            );
            start = end;
        }

        std::mem::swap(&mut perm, &mut buf);
        width *= 2;
    }

    perm
}

/// Merges two runs of indices into `out`. Takes from `right` only if strictly less, which keeps
/// equal elements in their original order.
fn merge<T, F>(v: &[T], left: &[usize], right: &[usize], out: &mut [usize], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert_eq!(left.len() + right.len(), out.len());

    let mut l = 0;
    let mut r = 0;
    for slot in out.iter_mut() {
        let take_right =
            l == left.len() || (r < right.len() && is_less(&v[right[r]], &v[left[l]]));

        if take_right {
            *slot = right[r];
            r += 1;
        } else {
            *slot = left[l];
            l += 1;
        }
    }
}

/// Moves `v[perm[k]]` to position `k` for every `k`, one cycle at a time.
fn apply_permutation<T>(v: &mut [T], mut perm: Vec<usize>) {
    for start in 0..v.len() {
        if perm[start] == start {
            continue;
        }

        let mut cur = start;
        loop {
            let next = perm[cur];
            // Mark as placed.
            perm[cur] = cur;
            if next == start {
                break;
            }

            v.swap(cur, next);
            cur = next;
        }
    }
}
