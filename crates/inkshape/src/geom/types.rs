//! Basic ink types and the tolerances used by the passes.
//!
//! - `ShapeCfg`: centralizes collinearity, pressure and shape tolerances.
//! - `Point`: `(x, y)` with an optional pressure sample.
//! - `Stroke`, `Circle`, `Rectangle`, `TextBox`: the four item kinds, wrapped
//!   by `Item`.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Shape recognition configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeCfg {
    /// A middle point is collinear when `|cos|` of its turn exceeds this.
    pub collinear_cos: f64,
    /// Collinear points carrying pressure are removed only when both
    /// neighbors are strictly closer than this in pressure.
    pub pressure_tol: f64,
    /// Maximum absolute deviation of any point from the estimated radius.
    pub circle_tol: f64,
    /// Strokes shorter than this are never circles.
    pub min_circle_points: usize,
    /// Reject rectangles whose corners share an x or y coordinate.
    pub reject_degenerate_rectangles: bool,
}

impl Default for ShapeCfg {
    fn default() -> Self {
        Self {
            collinear_cos: 0.998,
            pressure_tol: 0.1,
            circle_tol: 2.0,
            min_circle_points: 6,
            reject_degenerate_rectangles: true,
        }
    }
}

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Pen sample. `pressure` is absent on devices without a width channel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            pressure: None,
        }
    }
    #[inline]
    pub fn with_pressure(x: f64, y: f64, pressure: f64) -> Self {
        Self {
            x,
            y,
            pressure: Some(pressure),
        }
    }
    #[inline]
    pub fn xy(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    /// Coordinate equality; pressure is ignored.
    #[inline]
    pub fn same_position(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.pressure.map_or(true, f64::is_finite)
    }
}

/// Raw freehand pen path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn new(color: Rgba, width: f64, points: Vec<Point>) -> Self {
        Self {
            color,
            width,
            points,
        }
    }

    /// Builds a pressure-less stroke from `(x, y)` pairs.
    pub fn from_xy(color: Rgba, width: f64, xy: &[(f64, f64)]) -> Self {
        let points = xy.iter().map(|&(x, y)| Point::new(x, y)).collect();
        Self::new(color, width, points)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last points coincide. A single-point stroke is closed.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.same_position(last),
            _ => false,
        }
    }
}

/// Circle given by center and radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub color: Rgba,
    pub width: f64,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.cx, self.cy)
    }
}

/// Axis-aligned box from two opposite corners. Corners are stored as
/// detected; `normalized` orders them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub color: Rgba,
    pub width: f64,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rectangle {
    /// Returns the box with `(x1, y1)` as its minimum corner.
    pub fn normalized(&self) -> Rectangle {
        Rectangle {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
            ..*self
        }
    }
    #[inline]
    pub fn extent(&self) -> (f64, f64) {
        ((self.x2 - self.x1).abs(), (self.y2 - self.y1).abs())
    }
}

/// Text item. Carried through the pipeline untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub color: Rgba,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub font: String,
    pub text: String,
}

/// Drawable unit of a layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Stroke(Stroke),
    Circle(Circle),
    Rectangle(Rectangle),
    TextBox(TextBox),
}

impl Item {
    #[inline]
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Item::Stroke(s) => Some(s),
            _ => None,
        }
    }
    #[inline]
    pub fn color(&self) -> Rgba {
        match self {
            Item::Stroke(s) => s.color,
            Item::Circle(c) => c.color,
            Item::Rectangle(r) => r.color,
            Item::TextBox(t) => t.color,
        }
    }
    /// Short tag used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Item::Stroke(_) => "stroke",
            Item::Circle(_) => "circle",
            Item::Rectangle(_) => "rectangle",
            Item::TextBox(_) => "text_box",
        }
    }
}

impl From<Stroke> for Item {
    fn from(s: Stroke) -> Self {
        Item::Stroke(s)
    }
}
impl From<Circle> for Item {
    fn from(c: Circle) -> Self {
        Item::Circle(c)
    }
}
impl From<Rectangle> for Item {
    fn from(r: Rectangle) -> Self {
        Item::Rectangle(r)
    }
}
impl From<TextBox> for Item {
    fn from(t: TextBox) -> Self {
        Item::TextBox(t)
    }
}
