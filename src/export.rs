//! The record handed to an external density estimator.
//!
//! Samples and the reference curve are plain `[x, y]` pairs. Kernel, bandwidth and the
//! evaluation grid (window, resolution, contour levels) are copied from the [`Parameters`]
//! unchanged.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::config::{Kernel, Parameters, Window};
use crate::curve::Point;
use crate::error::Result;

/// Sampled points plus the settings the density estimator should use on them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Handover {
    /// Kernel name, not interpreted here
    pub kernel: Kernel,
    /// Bandwidth, not interpreted here
    pub bandwidth: f64,
    /// Area to evaluate the density on, the plotted window
    pub window: Window,
    /// Evaluation grid points per axis, spread evenly over the window including its edges
    pub grid_resolution: usize,
    /// Contour levels spread evenly between the smallest and largest density on the grid
    pub contour_levels: usize,
    /// The scattered samples
    pub points: Vec<[f64; 2]>,
    /// The generating curve sampled at uniformly spaced `t`
    pub curve: Vec<[f64; 2]>,
}

impl Handover {
    /// Bundle the results of one run.
    pub fn new(params: &Parameters, points: &[Point], curve: &[Point]) -> Self {
        Handover {
            kernel: params.kernel,
            bandwidth: params.bandwidth,
            window: params.window,
            grid_resolution: params.grid_resolution,
            contour_levels: params.contour_levels,
            points: points.iter().map(|p| [p.x, p.y]).collect(),
            curve: curve.iter().map(|p| [p.x, p.y]).collect(),
        }
    }

    /// Writes the record as pretty printed json.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
