//! Rectangle detection for 5-sample closed strokes (4 corners + return).
//!
//! Every edge must be exactly horizontal or exactly vertical. Corners 0 and
//! 2 become the rectangle's opposite corners. With
//! `reject_degenerate_rectangles` a box of zero width or height is refused.

use crate::geom::{Item, Rectangle, ShapeCfg, Stroke};

const RECT_POINTS: usize = 5;

pub fn rectangle_from_stroke(stroke: &Stroke, cfg: &ShapeCfg) -> Option<Rectangle> {
    let pts = &stroke.points;
    if pts.len() != RECT_POINTS || !stroke.is_closed() {
        return None;
    }
    let axis_aligned = pts.windows(2).all(|e| e[0].x == e[1].x || e[0].y == e[1].y);
    if !axis_aligned {
        return None;
    }
    let (a, c) = (pts[0], pts[2]);
    if cfg.reject_degenerate_rectangles && (a.x == c.x || a.y == c.y) {
        return None;
    }
    Some(Rectangle {
        color: stroke.color,
        width: stroke.width,
        x1: a.x,
        y1: a.y,
        x2: c.x,
        y2: c.y,
    })
}

/// Replaces a matching stroke by a `Rectangle`; anything else passes through.
pub fn detect_rectangle(item: Item, cfg: &ShapeCfg) -> Item {
    match item {
        Item::Stroke(s) => match rectangle_from_stroke(&s, cfg) {
            Some(r) => Item::Rectangle(r),
            None => Item::Stroke(s),
        },
        other => other,
    }
}
