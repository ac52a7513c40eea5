use curvekde::curve::{ControlPoints, Point};
use once_cell::sync::Lazy;

/// Control points covering the range of the interactive sliders
pub static CURVES: Lazy<Vec<ControlPoints>> = Lazy::new(|| vec![
    ControlPoints::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(3.0, 8.0)),
    ControlPoints::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0), Point::new(5.0, 5.0)),
    ControlPoints::new(Point::new(2.5, 1.0), Point::new(2.5, 9.0), Point::new(10.0, 5.0)),
    ControlPoints::new(Point::new(4.0, 4.0), Point::new(4.0, 4.0), Point::new(4.0, 4.0)),
]);
