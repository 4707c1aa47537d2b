//! Shape detectors.
//!
//! Each detector has a stroke-level core returning `Option<Shape>` and an
//! item-level wrapper that substitutes the shape on a match and otherwise
//! returns the item untouched. Detectors never mutate their input.

pub mod circle;
pub mod rectangle;

pub use circle::{circle_from_stroke, detect_circle};
pub use rectangle::{detect_rectangle, rectangle_from_stroke};
