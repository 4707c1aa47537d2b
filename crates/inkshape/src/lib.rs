//! Stroke simplification and shape detection for freehand ink.
//!
//! Pipeline per item: `simplify` → `detect_circle` → `detect_rectangle`.
//! The document model (`Document`/`Page`/`Layer`) is traversal scaffolding
//! only; parsing and rendering live outside this crate.
//!
//! API Policy
//! - Every pass is total: a stroke that does not match a shape comes back
//!   unchanged, other item kinds pass through untouched.
//! - Tolerances live in `ShapeCfg`; `ShapeCfg::default()` is tuned for pen
//!   input in page units (cos 0.998, pressure 0.1, radius 2.0).

pub mod detect;
pub mod document;
pub mod geom;
pub mod optimize;
pub mod simplify;
pub mod synth;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use document::{Document, ItemPath, Layer, ModelError, Page};
pub use geom::{Circle, Item, Point, Rectangle, Rgba, ShapeCfg, Stroke, TextBox};
pub use optimize::{optimize_document, optimize_item, run_all, OptimizeStats};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::detect::{
        circle_from_stroke, detect_circle, detect_rectangle, rectangle_from_stroke,
    };
    pub use crate::document::{Document, Layer, ModelError, Page};
    pub use crate::geom::{Circle, Item, Point, Rectangle, Rgba, ShapeCfg, Stroke, TextBox};
    pub use crate::optimize::{optimize_document, optimize_item, run_all, OptimizeStats};
    pub use crate::simplify::{simplify, simplify_stroke};
}
