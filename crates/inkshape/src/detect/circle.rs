//! Circle detection for closed strokes.
//!
//! Model
//! - A hand-traced circle starts and ends at the same sample, and the sample
//!   halfway through the trace sits roughly opposite the start. Their
//!   midpoint estimates the center, the distance to the start the radius.
//! - Acceptance: every sample lies within `circle_tol` of that radius.
//!   Single pass, no least-squares fit.

use crate::geom::{distance, Circle, Item, ShapeCfg, Stroke};

/// Classifies a closed stroke as a circle.
///
/// Pre: `stroke.len() >= cfg.min_circle_points` and the stroke is closed.
/// Post: `Some` with the stroke's color and width when all samples pass.
pub fn circle_from_stroke(stroke: &Stroke, cfg: &ShapeCfg) -> Option<Circle> {
    let pts = &stroke.points;
    let n = pts.len();
    if n < cfg.min_circle_points.max(2) || !stroke.is_closed() {
        return None;
    }
    let first = pts[0].xy();
    let opposite = pts[(n - 1).div_ceil(2)].xy();
    let center = first + (opposite - first) / 2.0;
    let radius = distance(center, first);
    if !(center.x.is_finite() && center.y.is_finite() && radius.is_finite()) {
        return None;
    }
    let round = pts
        .iter()
        .all(|p| (distance(center, p.xy()) - radius).abs() <= cfg.circle_tol);
    if !round {
        return None;
    }
    Some(Circle {
        color: stroke.color,
        width: stroke.width,
        cx: center.x,
        cy: center.y,
        radius,
    })
}

/// Replaces a matching stroke by a `Circle`; anything else passes through.
pub fn detect_circle(item: Item, cfg: &ShapeCfg) -> Item {
    match item {
        Item::Stroke(s) => match circle_from_stroke(&s, cfg) {
            Some(c) => Item::Circle(c),
            None => Item::Stroke(s),
        },
        other => other,
    }
}
