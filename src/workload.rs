//! Random request workloads.
//!
//! Draws distinct cylinders uniformly from the disk, for quick
//! experiments and demos. The caller owns the RNG, so a seeded
//! generator gives reproducible workloads.

use rand::seq::index;
use rand::Rng;

/// Fewest requests in a random workload.
pub const MIN_RANDOM_REQUESTS: usize = 5;
/// Most requests in a random workload.
pub const MAX_RANDOM_REQUESTS: usize = 15;

/// Generates between 5 and 15 distinct cylinders in ascending order.
///
/// On a disk smaller than the drawn count, every cylinder is returned.
pub fn random_requests<R: Rng + ?Sized>(rng: &mut R, disk_size: u32) -> Vec<i64> {
    let count = rng.random_range(MIN_RANDOM_REQUESTS..=MAX_RANDOM_REQUESTS);
    random_requests_n(rng, disk_size, count)
}

/// Generates `count` distinct cylinders in ascending order.
///
/// `count` is clamped to `disk_size`.
pub fn random_requests_n<R: Rng + ?Sized>(rng: &mut R, disk_size: u32, count: usize) -> Vec<i64> {
    let length = disk_size as usize;
    let mut requests: Vec<i64> = index::sample(rng, length, count.min(length))
        .into_iter()
        .map(|i| i as i64)
        .collect();
    requests.sort_unstable();
    requests
}
