//! One pass from parameters to outputs: sample, draw, bundle.

use rand::Rng;
use tracing::info;

use crate::config::Parameters;
use crate::draw::svg::SVG;
use crate::draw::Plot;
use crate::export::Handover;
use crate::error::Result;
use crate::sampler::PointSampler;

/// What a single run produces
pub struct Outcome {
    /// Record for the density estimation stage
    pub handover: Handover,
    /// Scatter and curve plot
    pub svg: SVG,
}

/// Validates `params`, samples points with `sampler` and composes the outputs.
pub fn run<R: Rng>(params: &Parameters, sampler: &mut PointSampler<R>) -> Result<Outcome> {
    params.validate()?;
    let count = params.point_count()?;
    let curve = params.control_points();

    let points = sampler.sample(&curve, count, params.max_distance)?;
    let line = curve.polyline(params.curve_steps);
    info!(
        points = points.len(),
        curve_steps = line.len(),
        max_distance = params.max_distance,
        "sampled curve"
    );

    let mut plot = Plot::new(params.window);
    plot.add_scatter(&points, "blue", "Generated Points");
    plot.add_curve(&line, "red", "Bezier Curve");

    Ok(Outcome {
        handover: Handover::new(params, &points, &line),
        svg: plot.finish(),
    })
}
