//! Ink geometry: points, strokes and the recognized primitives.
//!
//! Purpose
//! - Value types shared by the simplifier, the detectors and renderers.
//! - `Item` is the closed set of things a layer can hold; passes match on it
//!   and only the `Stroke` arm does work.
//!
//! Numerics
//! - Coordinates are `f64` in document units. Point equality used by the
//!   closed-path tests is exact on `(x, y)` and ignores pressure.
//! - `turn_cosine` is the collinearity measure; see `util` for its
//!   degenerate-segment policy.

mod types;
mod util;

pub use types::{Circle, Item, Point, Rectangle, Rgba, ShapeCfg, Stroke, TextBox};
pub use util::{distance, turn_cosine};
