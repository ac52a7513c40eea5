//! Evaluation of the quadratic curve spanned by three control points.
//!
//! The control points keep the naming of the interactive tool this crate grew out of:
//! `a` and `b` are the curve's **endpoints** (at `t = 0` and `t = 1`) while `c` is the
//! **interior** control point pulling the curve's midsection.
//! In the usual bezier notation the curve is therefore `{a, c, b}` in that order.

use nalgebra::{Matrix2x3, Vector2};

/// A point in the plane
pub type Point = Vector2<f64>;

/// Number of samples [`ControlPoints::polyline`] is usually called with
pub const DEFAULT_STEPS: usize = 100;

/// Get the point at position `t` on the quadratic curve with endpoints `a`, `b` and interior
/// control point `c`.
///
/// ```text
/// x(t) = (1-t)² a.x + 2(1-t)t c.x + t² b.x
/// y(t) = (1-t)² a.y + 2(1-t)t c.y + t² b.y
/// ```
///
/// `a` and `b` receive the endpoint coefficients, `c` always the cross term.
/// This function doesn't check `t` to be between 0 and 1, any real number is evaluated.
pub fn evaluate(t: f64, a: Point, b: Point, c: Point) -> Point {
    let t_inv = 1.0 - t;
    let x = t_inv.powi(2) * a.x + 2.0 * t_inv * t * c.x + t.powi(2) * b.x;
    let y = t_inv.powi(2) * a.y + 2.0 * t_inv * t * c.y + t.powi(2) * b.y;
    Point::new(x, y)
}

/// The three points defining a curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControlPoints {
    /// Start of the curve (`t = 0`)
    pub a: Point,
    /// End of the curve (`t = 1`)
    pub b: Point,
    /// Interior control point
    pub c: Point,
}

impl ControlPoints {
    /// Bundle three control points. See the [module docs](self) for their roles.
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        ControlPoints { a, b, c }
    }

    /// Get the point on the curve at position `t`.
    ///
    /// Shorthand for [`evaluate`].
    pub fn evaluate(&self, t: f64) -> Point {
        evaluate(t, self.a, self.b, self.c)
    }

    /// Samples the curve at `steps` uniformly spaced values of `t`, including both ends.
    ///
    /// A single step yields just the start point and zero steps yield nothing.
    pub fn polyline(&self, steps: usize) -> Vec<Point> {
        match steps {
            0 => Vec::new(),
            1 => vec![self.evaluate(0.0)],
            _ => {
                let last = (steps - 1) as f64;
                (0..steps)
                    .map(|i| self.evaluate(i as f64 / last))
                    .collect()
            }
        }
    }

    /// The curve as a matrix whose columns are the control points in drawing order `a, c, b`.
    pub fn to_matrix(&self) -> Matrix2x3<f64> {
        Matrix2x3::from_columns(&[self.a, self.c, self.b])
    }

    /// Get the point on the curve at position `t` using De Casteljau's algorithm
    /// (`castlejau` is the name this library's bezier code has always used for it).
    ///
    /// Yields the same points as [`ControlPoints::evaluate`] up to rounding, which makes it a
    /// cross-check for the closed form.
    pub fn castlejau_eval(&self, t: f64) -> Point {
        let t_inv = 1.0 - t;
        let matrix = self.to_matrix();

        let p = matrix.column(0) * t_inv + matrix.column(1) * t;
        let q = matrix.column(1) * t_inv + matrix.column(2) * t;
        p * t_inv + q * t
    }
}
