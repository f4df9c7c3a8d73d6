#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use planar_kernel::{Envelope, PackedSequence, Shape};

//// Utility functions

pub(crate) fn get_random_envelopes(bounds: Envelope, n: usize, seed: u64) -> Vec<Envelope> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Envelope::new(
            rng.gen_range(bounds.min_x(), bounds.max_x()),
            rng.gen_range(bounds.min_x(), bounds.max_x()),
            rng.gen_range(bounds.min_y(), bounds.max_y()),
            rng.gen_range(bounds.min_y(), bounds.max_y()),
        ));
    }

    results
}

pub(crate) fn get_random_points(bounds: Envelope, n: usize, seed: u64) -> Vec<Shape> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Shape::point(
            rng.gen_range(bounds.min_x(), bounds.max_x()),
            rng.gen_range(bounds.min_y(), bounds.max_y()),
        ));
    }

    results
}

/// `n` independent uniformly drawn points inside `bounds`.
pub(crate) fn get_random_sequence(bounds: Envelope, n: usize, seed: u64) -> PackedSequence {
    let mut rng = SmallRng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| {
            (
                rng.gen_range(bounds.min_x(), bounds.max_x()),
                rng.gen_range(bounds.min_y(), bounds.max_y()),
            )
        })
        .collect();
    PackedSequence::from_xy(points)
}
