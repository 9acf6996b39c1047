use std::ops::Range;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

/// Sequence lengths shared by the traversal benches.
pub const LENGTHS: [usize; 4] = [1_000, 16_000, 256_000, 4_096_000];

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<T, R>(rng: &mut R, len: usize, range: Range<T>) -> Vec<T>
where
    T: SampleUniform + PartialOrd + Clone,
    R: Rng + ?Sized,
{
    (0..len).map(|_| rng.random_range(range.clone())).collect()
}

pub fn sorted_values<T, R>(rng: &mut R, len: usize, range: Range<T>) -> Vec<T>
where
    T: SampleUniform + PartialOrd + Ord + Clone,
    R: Rng + ?Sized,
{
    let mut values = random_values(rng, len, range);
    values.sort_unstable();
    values
}
