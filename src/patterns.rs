//! Input pattern generators for tests and benchmarks.
//!
//! All random patterns derive from one process-wide seed so a failing run can
//! be reproduced. Set the `OVERRIDE_SEED` environment variable to pin it.

use std::env;
use std::ops::Range;

use once_cell::sync::OnceCell;
use rand::distributions::Distribution;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

/// The seed used by all random patterns in this process.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed
            .parse()
            .expect("OVERRIDE_SEED must be a valid u64 seed"),
        Err(_) => thread_rng().gen(),
    })
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Full `i32` range random values.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Uniform random values from `range`. Narrow ranges produce duplicates.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipf-distributed values, low values dominate. Commonly used to model
/// skewed real-world key distributions.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let mut rng = rng();
    let dist = ZipfDistribution::new(len.max(1), exponent)
        .expect("zipf exponent must be positive");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// `0..len`, already sorted.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// `len..0`, fully reversed.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// A single repeated value.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}
