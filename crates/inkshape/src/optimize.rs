//! Optimization driver: simplify → circle → rectangle on every item.
//!
//! Single deterministic pass. Items are replaced positionally; nothing is
//! reordered, added or dropped, so page, layer and item counts survive.

use serde::Serialize;
use tracing::{debug, info};

use crate::detect::{detect_circle, detect_rectangle};
use crate::document::Document;
use crate::geom::{Item, ShapeCfg};
use crate::simplify::simplify_stroke;

/// Counters collected during one document pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OptimizeStats {
    pub pages: usize,
    pub layers: usize,
    /// Per-item pipeline compositions performed.
    pub items: usize,
    /// Items that entered the pipeline as strokes.
    pub strokes: usize,
    pub points_removed: usize,
    pub circles: usize,
    pub rectangles: usize,
}

/// Runs the pipeline over the whole document with default tolerances.
pub fn run_all(doc: &mut Document) {
    optimize_document(doc, &ShapeCfg::default());
}

/// Runs the pipeline over the whole document, in place.
pub fn optimize_document(doc: &mut Document, cfg: &ShapeCfg) -> OptimizeStats {
    let mut stats = OptimizeStats::default();
    for (pi, page) in doc.pages.iter_mut().enumerate() {
        stats.pages += 1;
        for (li, layer) in page.layers.iter_mut().enumerate() {
            stats.layers += 1;
            layer.items = std::mem::take(&mut layer.items)
                .into_iter()
                .enumerate()
                .map(|(ii, item)| {
                    let out = optimize_item(item, cfg, &mut stats);
                    debug!(page = pi, layer = li, item = ii, kind = out.kind(), "item");
                    out
                })
                .collect();
        }
    }
    info!(
        pages = stats.pages,
        layers = stats.layers,
        items = stats.items,
        points_removed = stats.points_removed,
        circles = stats.circles,
        rectangles = stats.rectangles,
        "optimized document"
    );
    stats
}

/// Composes the three passes for one item and updates `stats`.
pub fn optimize_item(item: Item, cfg: &ShapeCfg, stats: &mut OptimizeStats) -> Item {
    stats.items += 1;
    let mut stroke = match item {
        Item::Stroke(s) => s,
        other => return other,
    };
    stats.strokes += 1;
    let removed = simplify_stroke(&mut stroke, cfg);
    stats.points_removed += removed;
    if removed > 0 {
        debug!(removed, left = stroke.len(), "simplified stroke");
    }

    let item = detect_circle(Item::Stroke(stroke), cfg);
    if let Item::Circle(c) = &item {
        stats.circles += 1;
        debug!(cx = c.cx, cy = c.cy, radius = c.radius, "detected circle");
    }
    let was_stroke = matches!(item, Item::Stroke(_));
    let item = detect_rectangle(item, cfg);
    if let (true, Item::Rectangle(r)) = (was_stroke, &item) {
        stats.rectangles += 1;
        debug!(x1 = r.x1, y1 = r.y1, x2 = r.x2, y2 = r.y2, "detected rectangle");
    }
    item
}
