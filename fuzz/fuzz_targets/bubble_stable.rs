#![no_main]

use libfuzzer_sys::fuzz_target;

use bubblesort::stable::bubble as test_sort;
use bubblesort::SortStats;

fuzz_target!(|data: &[u8]| {
    // Pair every byte with its position, sort on the byte alone and check the positions stayed
    // ascending among equal bytes.
    let mut v: Vec<(u8, usize)> = data.iter().copied().zip(0..).collect();
    let stats = test_sort::sort_by_with_stats(&mut v, |a, b| a.0.cmp(&b.0));

    assert!(v.windows(2).all(|w| w[0] <= w[1]));
    assert!(stats.comparisons <= SortStats::max_comparisons(v.len()));
    assert!(stats.swaps <= stats.comparisons);
});
