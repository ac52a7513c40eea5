//! Random points scattered around a curve.
//!
//! Every sample is a point on the curve at a uniformly drawn `t`, moved by exactly
//! `max_distance` into a uniformly drawn direction.

use std::f64::consts::TAU;

use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::debug;

use crate::curve::{ControlPoints, Point};
use crate::error::{Error, Result};

/// Draws points around a curve from the generator it owns.
///
/// Two samplers constructed from the same seed produce the same points for the same arguments.
/// Samplers are not shared between threads, give each thread its own one instead.
#[derive(Clone, Debug)]
pub struct PointSampler<R = Pcg64> {
    rng: R,
}

impl<R: Rng> PointSampler<R> {
    /// Wrap an existing random number generator
    pub fn new(rng: R) -> Self {
        PointSampler { rng }
    }

    /// Consumes the sampler returning its generator
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Generates `count` points each lying exactly `max_distance` away from some point on `curve`.
    ///
    /// A `count` of zero yields an empty vector.
    /// A negative or non finite `max_distance` is rejected before the generator is touched.
    pub fn sample(
        &mut self,
        curve: &ControlPoints,
        count: usize,
        max_distance: f64,
    ) -> Result<Vec<Point>> {
        check_distance(max_distance)?;

        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let (_, point) = self.draw(curve, max_distance);
            points.push(point);
        }

        debug!(count, max_distance, "sampled points around curve");
        Ok(points)
    }

    /// Draws a single sample and the curve parameter it originated from.
    fn draw(&mut self, curve: &ControlPoints, max_distance: f64) -> (f64, Point) {
        let t = Uniform::new_inclusive(0.0, 1.0).sample(&mut self.rng);
        let on_curve = curve.evaluate(t);

        let theta = Uniform::new(0.0, TAU).sample(&mut self.rng);
        let offset = Point::new(theta.cos(), theta.sin()) * max_distance;

        (t, on_curve + offset)
    }
}

impl PointSampler<Pcg64> {
    /// Sampler with a reproducible generator
    pub fn seeded(seed: u64) -> Self {
        PointSampler::new(Pcg64::seed_from_u64(seed))
    }

    /// Sampler seeded from the operating system
    pub fn from_entropy() -> Self {
        PointSampler::new(Pcg64::from_entropy())
    }
}

/// Generates `count` points around the curve with endpoints `a`, `b` and interior point `c`.
///
/// Uses the current thread's generator, so repeated calls yield different points.
/// Use a [`PointSampler`] for reproducible output.
pub fn sample(
    a: Point,
    b: Point,
    c: Point,
    count: usize,
    max_distance: f64,
) -> Result<Vec<Point>> {
    let curve = ControlPoints::new(a, b, c);
    PointSampler::new(rand::thread_rng()).sample(&curve, count, max_distance)
}

fn check_distance(max_distance: f64) -> Result<()> {
    if !max_distance.is_finite() {
        return Err(Error::invalid(
            "max_distance",
            format!("expected a finite number, got {}", max_distance),
        ));
    }
    if max_distance < 0.0 {
        return Err(Error::invalid(
            "max_distance",
            format!("must not be negative, got {}", max_distance),
        ));
    }
    Ok(())
}
