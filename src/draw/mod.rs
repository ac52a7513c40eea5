//! Composes the scatter plot of the samples and their generating curve as an svg.
//!
//! Layers are drawn in the order they are added. The legend lists them in the same order.
//!
//! ```
//! use curvekde::config::Window;
//! use curvekde::curve::{ControlPoints, Point};
//! use curvekde::draw::Plot;
//!
//! let curve = ControlPoints::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(3.0, 8.0));
//! let mut plot = Plot::new(Window::default());
//! plot.add_curve(&curve.polyline(100), "red", "Bezier Curve");
//! let svg = plot.finish().to_string();
//! assert!(svg.contains("Bezier Curve"));
//! ```

use crate::config::Window;
use crate::curve::Point;

use self::svg::{Anchor, Circle, Group, Line, Path, PathInstructions, Text, SVG};

#[allow(missing_docs)]
pub mod svg;

/// Rendered width and height in pixels
const PIXELS: u32 = 800;

/// Distance between grid lines in plane units for windows up to `MAX_GRID_LINES` steps wide
const GRID_STEP: f64 = 5.0;

/// Wider windows multiply the grid step by powers of ten until at most this many lines fit
const MAX_GRID_LINES: f64 = 50.0;

/// Space around the window for tick and axis labels, in plane units
const MARGIN: f64 = 2.0;

enum Mark {
    Dot,
    Stroke,
}

/// A plot under construction
pub struct Plot {
    window: Window,
    /// Plane coordinates with the y axis pointing up
    data: Group,
    legend: Vec<(Mark, &'static str, String)>,
}

impl Plot {
    /// Starts an empty plot showing `window` with a grid every 5 units.
    ///
    /// Wide windows get a coarser grid so no more than 51 lines are drawn per axis.
    pub fn new(window: Window) -> Self {
        let mut plot = Plot {
            window,
            data: Group {
                transform: "scale(1,-1)".to_string(),
                elements: Vec::new(),
            },
            legend: Vec::new(),
        };
        plot.add_grid();
        plot
    }

    /// Size of one pixel in plane units
    fn pixel(&self) -> f64 {
        let (width, height) = self.window.size();
        width.max(height) / PIXELS as f64
    }

    /// Distance between grid lines, [`GRID_STEP`] times a power of ten
    fn grid_step(&self) -> f64 {
        let (width, height) = self.window.size();
        let span = width.max(height);
        let mut step = GRID_STEP;
        while span / step > MAX_GRID_LINES {
            step *= 10.0;
        }
        step
    }

    /// Multiples of `step` between `min` and `max`, never more than `MAX_GRID_LINES + 1`
    fn grid_lines(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
        let first = (min / step).ceil();
        let count = ((max / step).floor() - first + 1.0).clamp(0.0, MAX_GRID_LINES + 1.0) as usize;
        (0..count).map(move |i| (first + i as f64) * step)
    }

    fn add_grid(&mut self) {
        let Window {
            x_min,
            x_max,
            y_min,
            y_max,
        } = self.window;
        let width = self.pixel();
        let step = self.grid_step();

        for x in Plot::grid_lines(x_min, x_max, step) {
            self.data.add_elem(Line {
                from: Point::new(x, y_min),
                to: Point::new(x, y_max),
                width: Some(width),
                color: "#cccccc",
            });
        }
        for y in Plot::grid_lines(y_min, y_max, step) {
            self.data.add_elem(Line {
                from: Point::new(x_min, y),
                to: Point::new(x_max, y),
                width: Some(width),
                color: "#cccccc",
            });
        }

        let mut frame = Path::polyline(&[
            Point::new(x_min, y_min),
            Point::new(x_max, y_min),
            Point::new(x_max, y_max),
            Point::new(x_min, y_max),
        ]);
        frame.instructions.push(PathInstructions::Close);
        frame.width = width;
        self.data.add_elem(frame);
    }

    /// Adds the points as filled dots.
    pub fn add_scatter(&mut self, points: &[Point], color: &'static str, label: &str) {
        let radius = 3.0 * self.pixel();
        for &center in points {
            self.data.add_elem(Circle {
                center,
                radius,
                color,
            });
        }
        self.legend.push((Mark::Dot, color, label.to_string()));
    }

    /// Adds a line through the points, 2 pixels wide.
    pub fn add_curve(&mut self, line: &[Point], color: &'static str, label: &str) {
        let mut path = Path::polyline(line);
        path.stroke_color = color;
        path.width = 2.0 * self.pixel();
        self.data.add_elem(path);
        self.legend.push((Mark::Stroke, color, label.to_string()));
    }

    /// Adds axis labels and the legend and returns the finished document.
    pub fn finish(self) -> SVG {
        let Window {
            x_min,
            x_max,
            y_min,
            y_max,
        } = self.window;
        let (width, height) = self.window.size();
        let pixel = self.pixel();
        let step = self.grid_step();
        let font = 14.0 * pixel;

        // Outside of the flipped group y grows downwards
        let mut svg = SVG {
            view_box: (
                x_min - MARGIN,
                -y_max - MARGIN,
                width + 2.0 * MARGIN,
                height + 2.0 * MARGIN,
            ),
            size: (PIXELS, PIXELS),
            elements: Vec::with_capacity(4 + self.legend.len() * 2),
        };
        svg.add_elem(self.data);

        for x in Plot::grid_lines(x_min, x_max, step) {
            svg.add_elem(Text {
                position: Point::new(x, -y_min + font * 1.2),
                content: x.to_string(),
                size: font,
                anchor: Anchor::Middle,
                color: "black",
            });
        }
        for y in Plot::grid_lines(y_min, y_max, step) {
            svg.add_elem(Text {
                position: Point::new(x_min - font * 0.4, -y + font * 0.35),
                content: y.to_string(),
                size: font,
                anchor: Anchor::End,
                color: "black",
            });
        }
        svg.add_elem(Text {
            position: Point::new(x_min + width / 2.0, -y_min + MARGIN * 0.9),
            content: "X".to_string(),
            size: font,
            anchor: Anchor::Middle,
            color: "black",
        });
        svg.add_elem(Text {
            position: Point::new(x_min - MARGIN * 0.8, -y_min - height / 2.0),
            content: "Y".to_string(),
            size: font,
            anchor: Anchor::Middle,
            color: "black",
        });

        // Legend in the upper left corner
        let left = x_min + font;
        for (i, (mark, color, label)) in self.legend.into_iter().enumerate() {
            let y = -y_max + font * (1.5 + 1.5 * i as f64);
            match mark {
                Mark::Dot => svg.add_elem(Circle {
                    center: Point::new(left + font * 0.5, y),
                    radius: 3.0 * pixel,
                    color,
                }),
                Mark::Stroke => svg.add_elem(Line {
                    from: Point::new(left, y),
                    to: Point::new(left + font, y),
                    width: Some(2.0 * pixel),
                    color,
                }),
            }
            svg.add_elem(Text {
                position: Point::new(left + font * 1.5, y + font * 0.35),
                content: label,
                size: font,
                anchor: Anchor::Start,
                color: "black",
            });
        }

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Parameters;

    #[test]
    fn grid_positions() {
        let lines: Vec<_> = Plot::grid_lines(-5.0, 15.0, GRID_STEP).collect();
        assert_eq!(lines, vec![-5.0, 0.0, 5.0, 10.0, 15.0]);
        let lines: Vec<_> = Plot::grid_lines(-1.0, 4.0, GRID_STEP).collect();
        assert_eq!(lines, vec![0.0]);
        assert_eq!(Plot::grid_lines(1.0, 4.0, GRID_STEP).count(), 0);
        assert_eq!(Plot::grid_lines(-1e300, 1e300, GRID_STEP).size_hint().1, Some(51));
    }

    #[test]
    fn grid_step_widens_with_window() {
        assert_eq!(Plot::new(Window::default()).grid_step(), GRID_STEP);

        let wide = Window {
            x_min: -1e12,
            x_max: 1e12,
            ..Default::default()
        };
        let step = Plot::new(wide).grid_step();
        assert_eq!(step, 5e10);
        assert_eq!(Plot::grid_lines(wide.x_min, wide.x_max, step).count(), 41);
    }

    #[test]
    fn huge_window_stays_small() {
        let params = Parameters::from_json(
            r#"{ "window": { "x_min": -1e300, "x_max": 1e300, "y_min": -5.0, "y_max": 15.0 } }"#,
        )
        .unwrap();
        assert!(params.validate().is_ok());

        let markup = Plot::new(params.window).finish().to_string();
        // Grid lines on both axes, bounded by the line limit
        assert!(markup.matches("<line").count() <= 2 * (MAX_GRID_LINES as usize + 1));
        assert!(markup.matches("<text").count() <= 2 * (MAX_GRID_LINES as usize + 1) + 2);
    }

    #[test]
    fn layers_and_legend() {
        let points = [
            Point::new(1.0, 1.0),
            Point::new(2.0, 3.0),
            Point::new(7.5, -2.0),
        ];
        let mut plot = Plot::new(Window::default());
        plot.add_scatter(&points, "blue", "Generated Points");
        plot.add_curve(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0)], "red", "Bezier Curve");
        let markup = plot.finish().to_string();

        // One dot per point plus the legend's
        assert_eq!(markup.matches("<circle").count(), points.len() + 1);
        assert!(markup.contains("cx=\"7.5\" cy=\"-2\""));
        assert!(markup.contains("stroke=\"red\""));
        assert!(markup.contains(">Generated Points</text>"));
        assert!(markup.contains(">Bezier Curve</text>"));
        assert!(markup.contains(">X</text>"));
        assert!(markup.contains(">Y</text>"));

        // Legend follows insertion order
        let scatter = markup.find("Generated Points").unwrap();
        let curve = markup.find("Bezier Curve").unwrap();
        assert!(scatter < curve);
    }

    #[test]
    fn view_box_covers_window() {
        let svg = Plot::new(Window::default()).finish();
        assert_eq!(svg.view_box, (-7.0, -17.0, 24.0, 24.0));
    }
}
