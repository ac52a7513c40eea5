//! Minimal svg elements used to compose the plot.
//!
//! Every element implements [`Display`] producing its svg markup.

use std::fmt::{Display, Formatter};

use crate::curve::Point;

type Rect = (f64, f64, f64, f64);

/// Root `<svg>` element
pub struct SVG {
    /// `min-x min-y width height`
    pub view_box: Rect,
    /// Rendered size in pixels
    pub size: (u32, u32),
    /// Children in drawing order
    pub elements: Vec<Box<dyn Display>>,
}

impl SVG {
    /// Append an element, drawing it on top of all previous ones
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }
}

impl Display for SVG {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.view_box.0, self.view_box.1, self.view_box.2, self.view_box.3, self.size.0, self.size.1
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")?;
        return Ok(());
    }
}

/// `<g>` element applying a transform to its children
pub struct Group {
    pub transform: String,
    pub elements: Vec<Box<dyn Display>>,
}

impl Group {
    /// Append an element to the group
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<g transform=\"{}\">", self.transform)?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</g>")
    }
}

pub struct Line {
    pub from: Point,
    pub to: Point,
    pub width: Option<f64>,
    pub color: &'static str,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"",
            self.from[0], self.from[1], self.to[0], self.to[1], self.color
        )?;
        if let Some(width) = self.width {
            write!(f, " stroke-width=\"{}\"", width)?;
        }
        writeln!(f, "/>")?;
        return Ok(());
    }
}

pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub color: &'static str,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"",
            self.center[0], self.center[1], self.radius, self.color
        )?;
        writeln!(f, "/>")?;
        return Ok(());
    }
}

/// Horizontal alignment of a [`Text`]
#[derive(Copy, Clone, Debug)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

pub struct Text {
    pub position: Point,
    pub content: String,
    pub size: f64,
    pub anchor: Anchor,
    pub color: &'static str,
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let anchor = match self.anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        write!(
            f,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{}\" fill=\"{}\">",
            self.position[0], self.position[1], self.size, anchor, self.color
        )?;
        // Labels are plain text, escape what xml cares about
        for c in self.content.chars() {
            match c {
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '&' => f.write_str("&amp;")?,
                c => write!(f, "{}", c)?,
            }
        }
        writeln!(f, "</text>")
    }
}

pub struct Path {
    pub stroke_color: &'static str,
    pub fill_color: &'static str,
    pub width: f64,
    pub instructions: Vec<PathInstructions>,
}
impl Default for Path {
    fn default() -> Self {
        Path {
            stroke_color: "black",
            fill_color: "none",
            width: 1.0,
            instructions: Vec::with_capacity(2),
        }
    }
}

impl Path {
    /// Path connecting `points` with straight lines
    pub fn polyline(points: &[Point]) -> Self {
        let mut instructions = Vec::with_capacity(points.len());
        let mut points = points.iter().copied();
        if let Some(first) = points.next() {
            instructions.push(PathInstructions::MoveTo(first));
            instructions.extend(points.map(PathInstructions::LineTo));
        }
        Path {
            instructions,
            ..Default::default()
        }
    }
}

/// Absolute path commands
pub enum PathInstructions {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<path stroke=\"{}\" fill=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\" d=\"",
            self.stroke_color, self.fill_color, self.width
        )?;
        for instruction in self.instructions.iter() {
            use PathInstructions::*;
            match instruction {
                MoveTo(p) => write!(f, "M {} {} ", p[0], p[1]),
                LineTo(p) => write!(f, "L {} {} ", p[0], p[1]),
                Close => write!(f, "Z"),
            }?
        }
        writeln!(f, "\"/>")?;
        Ok(())
    }
}
