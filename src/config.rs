//! Parameters collected from the user before sampling and plotting.
//!
//! Every field has a default matching the tool's initial settings, so a parameter file only
//! needs to list what it changes:
//!
//! ```json
//! { "c": [5.0, 2.0], "num_points": 300, "kernel": "gaussian" }
//! ```

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::curve::{ControlPoints, Point, DEFAULT_STEPS};
use crate::error::{Error, Result};

/// Smoothing function requested from the density estimation stage.
///
/// Only the name is ever looked at here, the kernel itself is evaluated downstream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kernel {
    /// Triangular kernel
    #[default]
    Linear,
    /// Parabolic kernel
    Epanechnikov,
    /// Uniform kernel
    Tophat,
    /// Normal distribution kernel
    Gaussian,
    /// Laplace kernel
    Exponential,
    /// Cosine arch kernel
    Cosine,
}

impl Kernel {
    /// All kernels in the order a selector would list them
    pub const ALL: [Kernel; 6] = [
        Kernel::Linear,
        Kernel::Epanechnikov,
        Kernel::Tophat,
        Kernel::Gaussian,
        Kernel::Exponential,
        Kernel::Cosine,
    ];

    /// The kernel's name as understood by the density estimation stage
    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Linear => "linear",
            Kernel::Epanechnikov => "epanechnikov",
            Kernel::Tophat => "tophat",
            Kernel::Gaussian => "gaussian",
            Kernel::Exponential => "exponential",
            Kernel::Cosine => "cosine",
        }
    }
}

impl Display for Kernel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kernel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Kernel::ALL
            .into_iter()
            .find(|kernel| kernel.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Kernel::ALL.iter().map(Kernel::name).collect();
                Error::invalid(
                    "kernel",
                    format!("unknown kernel `{}`, expected one of {}", s, names.join(", ")),
                )
            })
    }
}

/// The rectangle of the plane shown in the plot
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(missing_docs)]
pub struct Window {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Window {
    fn default() -> Self {
        Window {
            x_min: -5.0,
            x_max: 15.0,
            y_min: -5.0,
            y_max: 15.0,
        }
    }
}

impl Window {
    /// Width and height
    pub fn size(&self) -> (f64, f64) {
        (self.x_max - self.x_min, self.y_max - self.y_min)
    }
}

/// Density evaluation grid points per axis unless configured otherwise
pub const DEFAULT_GRID_RESOLUTION: usize = 500;

/// Contour levels between the smallest and largest density unless configured otherwise
pub const DEFAULT_CONTOUR_LEVELS: usize = 100;

/// Everything needed for one run of sampling and plotting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// Start of the curve
    pub a: [f64; 2],
    /// End of the curve
    pub b: [f64; 2],
    /// Interior control point
    pub c: [f64; 2],
    /// Number of points to sample.
    ///
    /// Signed so a negative value in a file is reported instead of failing to parse.
    pub num_points: i64,
    /// Distance between every sample and the curve point it was generated from
    pub max_distance: f64,
    /// Passed through to the density estimation stage
    pub kernel: Kernel,
    /// Passed through to the density estimation stage
    pub bandwidth: f64,
    /// Seed for reproducible runs, fresh entropy otherwise
    pub seed: Option<u64>,
    /// Number of points used to draw the reference curve
    pub curve_steps: usize,
    /// Visible part of the plane, also the area the density is evaluated on
    pub window: Window,
    /// Passed through to the density estimation stage: grid points per axis
    pub grid_resolution: usize,
    /// Passed through to the density estimation stage: number of contour levels
    pub contour_levels: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            a: [0.0, 0.0],
            b: [10.0, 10.0],
            c: [3.0, 8.0],
            num_points: 100,
            max_distance: 1.0,
            kernel: Kernel::default(),
            bandwidth: 0.5,
            seed: None,
            curve_steps: DEFAULT_STEPS,
            window: Window::default(),
            grid_resolution: DEFAULT_GRID_RESOLUTION,
            contour_levels: DEFAULT_CONTOUR_LEVELS,
        }
    }
}

impl Parameters {
    /// Parses parameters from json, missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a json parameter file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Parameters::from_json(&json)
    }

    /// The curve's control points
    pub fn control_points(&self) -> ControlPoints {
        ControlPoints::new(
            Point::from(self.a),
            Point::from(self.b),
            Point::from(self.c),
        )
    }

    /// Number of points to sample, rejecting negative counts
    pub fn point_count(&self) -> Result<usize> {
        usize::try_from(self.num_points).map_err(|_| {
            Error::invalid(
                "num_points",
                format!("must not be negative, got {}", self.num_points),
            )
        })
    }

    /// Checks everything the sampler and the plot rely on.
    ///
    /// `kernel`, `bandwidth`, `grid_resolution` and `contour_levels` are not inspected.
    pub fn validate(&self) -> Result<()> {
        self.point_count()?;

        if !(self.max_distance >= 0.0 && self.max_distance.is_finite()) {
            return Err(Error::invalid(
                "max_distance",
                format!("must be a finite non negative number, got {}", self.max_distance),
            ));
        }

        for (name, point) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !point.iter().all(|v| v.is_finite()) {
                return Err(Error::invalid(name, format!("non finite coordinate in {:?}", point)));
            }
        }

        if self.curve_steps < 2 {
            return Err(Error::invalid(
                "curve_steps",
                format!("need at least 2 steps to draw a curve, got {}", self.curve_steps),
            ));
        }

        let (width, height) = self.window.size();
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(Error::invalid(
                "window",
                format!("must have a finite positive width and height, got {:?}", self.window),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = Parameters::default();
        let curve = params.control_points();
        assert_eq!(curve.a, Point::new(0.0, 0.0));
        assert_eq!(curve.b, Point::new(10.0, 10.0));
        assert_eq!(curve.c, Point::new(3.0, 8.0));
        assert_eq!(params.point_count().unwrap(), 100);
        assert_eq!(params.max_distance, 1.0);
        assert_eq!(params.kernel, Kernel::Linear);
        assert_eq!(params.bandwidth, 0.5);
        assert_eq!(params.curve_steps, 100);
        assert_eq!(params.window.size(), (20.0, 20.0));
        assert_eq!(params.grid_resolution, 500);
        assert_eq!(params.contour_levels, 100);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn partial_json() {
        let params = Parameters::from_json(
            r#"{ "c": [5.0, 2.0], "num_points": 300, "kernel": "gaussian", "seed": 17 }"#,
        )
        .unwrap();
        assert_eq!(params.c, [5.0, 2.0]);
        assert_eq!(params.num_points, 300);
        assert_eq!(params.kernel, Kernel::Gaussian);
        assert_eq!(params.seed, Some(17));
        assert_eq!(params.a, Parameters::default().a);
    }

    #[test]
    fn unknown_fields() {
        assert!(matches!(
            Parameters::from_json(r#"{ "points": 3 }"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            Parameters::from_json(r#"{ "kernel": "triangle" }"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn negative_count() {
        let params = Parameters::from_json(r#"{ "num_points": -4 }"#).unwrap();
        match params.validate() {
            Err(Error::InvalidArgument { name, .. }) => assert_eq!(name, "num_points"),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn negative_distance() {
        let params = Parameters {
            max_distance: -1.0,
            ..Default::default()
        };
        match params.validate() {
            Err(Error::InvalidArgument { name, .. }) => assert_eq!(name, "max_distance"),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn degenerate_window() {
        let params = Parameters {
            window: Window {
                x_min: 1.0,
                x_max: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn unbounded_window() {
        // Finite bounds whose span overflows to infinity
        let params = Parameters::from_json(
            r#"{ "window": { "x_min": -1e308, "x_max": 1e308, "y_min": -5.0, "y_max": 15.0 } }"#,
        )
        .unwrap();
        match params.validate() {
            Err(Error::InvalidArgument { name, .. }) => assert_eq!(name, "window"),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn density_grid_settings() {
        let params =
            Parameters::from_json(r#"{ "grid_resolution": 64, "contour_levels": 12 }"#).unwrap();
        assert_eq!(params.grid_resolution, 64);
        assert_eq!(params.contour_levels, 12);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn kernel_names() {
        for kernel in Kernel::ALL {
            assert_eq!(kernel.to_string().parse::<Kernel>().unwrap(), kernel);
            assert_eq!(
                serde_json::to_string(&kernel).unwrap(),
                format!("\"{}\"", kernel)
            );
        }
        assert!("Gaussian".parse::<Kernel>().is_err());
        assert!("".parse::<Kernel>().is_err());
    }
}
