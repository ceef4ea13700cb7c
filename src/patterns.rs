//! Input patterns for testing, benchmarking and demonstrating the sorts. All random patterns draw
//! from a process-wide seed, so a failing run can be reproduced by printing
//! [`random_init_seed`] and feeding it back through [`set_seed`].

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;

/// Names accepted by [`by_name`].
pub const PATTERN_NAMES: [&str; 9] = [
    "random",
    "random_binary",
    "random_dense",
    "all_equal",
    "ascending",
    "descending",
    "saw_mixed",
    "pipe_organ",
    "demo",
];

/// Input used by the sorting demonstration.
pub const DEMO_VALUES: [i32; 7] = [64, 34, 25, 12, 22, 11, 90];

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..size).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; size]
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect()
}

pub fn ascending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saws(size, saw_count, |_| true)
}

pub fn descending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saws(size, saw_count, |_| false)
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let mut rng = new_rng();
    saws(size, saw_count, |_| rng.gen::<bool>())
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(size);
    let (first_half, second_half) = vals.split_at_mut(size / 2);
    first_half.sort();
    second_half.sort_by(|a, b| b.cmp(a));

    vals
}

/// Looks up a pattern by one of the names in [`PATTERN_NAMES`]. `"demo"` ignores `size`.
pub fn by_name(name: &str, size: usize) -> Option<Vec<i32>> {
    let vals = match name {
        "random" => random(size),
        "random_binary" => random_uniform(size, 0..=1),
        "random_dense" => random_uniform(size, 0..=dense_upper_bound(size)),
        "all_equal" => all_equal(size),
        "ascending" => ascending(size),
        "descending" => descending(size),
        "saw_mixed" => saw_mixed(size, log2_round(size)),
        "pipe_organ" => pipe_organ(size),
        "demo" => DEMO_VALUES.to_vec(),
        _ => return None,
    };

    Some(vals)
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);
static SEED: OnceCell<u64> = OnceCell::new();

/// Makes every call draw a fresh seed. Benchmarks want this, tests want the opposite.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// Pins the process-wide seed. Returns `false` if a seed was already drawn or set.
pub fn set_seed(seed: u64) -> bool {
    SEED.set(seed).is_ok()
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        *SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn log2_round(size: usize) -> usize {
    (size as f64).log2().round().max(1.0) as usize
}

fn dense_upper_bound(size: usize) -> i32 {
    log2_round(size) as i32
}

/// Random values in `saw_count` chunks, chunk `i` sorted ascending if `is_ascending(i)` and
/// descending otherwise.
fn saws(size: usize, saw_count: usize, mut is_ascending: impl FnMut(usize) -> bool) -> Vec<i32> {
    if size == 0 {
        return Vec::new();
    }

    let mut vals = random(size);
    let chunk_size = (size / saw_count.max(1)).max(1);

    for (i, chunk) in vals.chunks_mut(chunk_size).enumerate() {
        if is_ascending(i) {
            chunk.sort();
        } else {
            chunk.sort_by(|a, b| b.cmp(a));
        }
    }

    vals
}
