//! Collinear point removal.
//!
//! A sliding window over `(p[i], p[i+1], p[i+2])` drops the middle sample
//! when the turn at it is nearly straight (`|cos| > collinear_cos`). The
//! cursor never advances on a removal; it steps back one so the previous
//! triple is re-tested against its new right neighbor. One pass therefore
//! ends at a fixpoint and a second pass removes nothing. Reversals count as
//! straight too (`|cos|`).
//!
//! Pressure
//! - A middle sample with pressure is only dropped when both neighbors carry
//!   pressure and all three are pairwise strictly within `pressure_tol`. A
//!   width change inside a straight run survives.

use crate::geom::{turn_cosine, Item, Point, ShapeCfg, Stroke};

/// Simplifies the stroke in place and returns how many points were removed.
/// Strokes with fewer than three points are left alone.
pub fn simplify_stroke(stroke: &mut Stroke, cfg: &ShapeCfg) -> usize {
    let before = stroke.points.len();
    let pts = &mut stroke.points;
    let mut i = 0;
    while i + 2 < pts.len() {
        if removable(&pts[i], &pts[i + 1], &pts[i + 2], cfg) {
            pts.remove(i + 1);
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
    before - pts.len()
}

/// Item-level form of [`simplify_stroke`]; non-strokes pass through.
pub fn simplify(item: Item, cfg: &ShapeCfg) -> Item {
    match item {
        Item::Stroke(mut s) => {
            simplify_stroke(&mut s, cfg);
            Item::Stroke(s)
        }
        other => other,
    }
}

fn removable(prev: &Point, mid: &Point, next: &Point, cfg: &ShapeCfg) -> bool {
    let c = turn_cosine(prev, mid, next);
    if !c.is_finite() || c.abs() <= cfg.collinear_cos {
        return false;
    }
    match mid.pressure {
        None => true,
        Some(pm) => match (prev.pressure, next.pressure) {
            (Some(pa), Some(pb)) => {
                let tol = cfg.pressure_tol;
                (pa - pm).abs() < tol && (pb - pm).abs() < tol && (pa - pb).abs() < tol
            }
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rgba;

    fn stroke(points: Vec<Point>) -> Stroke {
        Stroke::new(Rgba::BLACK, 1.0, points)
    }

    #[test]
    fn straight_triple_loses_middle() {
        let mut s = Stroke::from_xy(Rgba::BLACK, 1.0, &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(simplify_stroke(&mut s, &ShapeCfg::default()), 1);
        assert_eq!(s.points, vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)]);
    }

    #[test]
    fn right_angle_is_kept() {
        let mut s = Stroke::from_xy(Rgba::BLACK, 1.0, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(simplify_stroke(&mut s, &ShapeCfg::default()), 0);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn long_straight_run_collapses_to_endpoints() {
        let xy: Vec<(f64, f64)> = (0..50).map(|k| (k as f64, 2.0 * k as f64)).collect();
        let mut s = Stroke::from_xy(Rgba::BLACK, 1.0, &xy);
        assert_eq!(simplify_stroke(&mut s, &ShapeCfg::default()), 48);
        assert_eq!(s.points.first(), Some(&Point::new(0.0, 0.0)));
        assert_eq!(s.points.last(), Some(&Point::new(49.0, 98.0)));
    }

    #[test]
    fn removal_retests_new_neighbors() {
        // After (1,0) goes, (2,0) sits between (0,0) and (2,2): a right turn.
        let mut s = Stroke::from_xy(
            Rgba::BLACK,
            1.0,
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (2.0, 4.0)],
        );
        simplify_stroke(&mut s, &ShapeCfg::default());
        assert_eq!(
            s.points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 4.0)
            ]
        );
    }

    #[test]
    fn pressure_guard() {
        let cfg = ShapeCfg::default();
        let mut same = stroke(vec![
            Point::with_pressure(0.0, 0.0, 1.0),
            Point::with_pressure(1.0, 0.0, 1.0),
            Point::with_pressure(2.0, 0.0, 1.0),
        ]);
        assert_eq!(simplify_stroke(&mut same, &cfg), 1);

        let mut jump = stroke(vec![
            Point::with_pressure(0.0, 0.0, 1.0),
            Point::with_pressure(1.0, 0.0, 5.0),
            Point::with_pressure(2.0, 0.0, 1.0),
        ]);
        assert_eq!(simplify_stroke(&mut jump, &cfg), 0);
    }

    #[test]
    fn pressure_ramp_across_neighbors_keeps_point() {
        // Each neighbor is within 0.1 of the middle, but not of each other.
        let mut s = stroke(vec![
            Point::with_pressure(0.0, 0.0, 0.94),
            Point::with_pressure(1.0, 0.0, 1.0),
            Point::with_pressure(2.0, 0.0, 1.06),
        ]);
        assert_eq!(simplify_stroke(&mut s, &ShapeCfg::default()), 0);
    }

    #[test]
    fn pressure_on_middle_only_keeps_point() {
        let mut s = stroke(vec![
            Point::new(0.0, 0.0),
            Point::with_pressure(1.0, 0.0, 1.0),
            Point::new(2.0, 0.0),
        ]);
        assert_eq!(simplify_stroke(&mut s, &ShapeCfg::default()), 0);
    }

    #[test]
    fn pressure_on_neighbors_only_still_removes() {
        let mut s = stroke(vec![
            Point::with_pressure(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::with_pressure(2.0, 0.0, 3.0),
        ]);
        assert_eq!(simplify_stroke(&mut s, &ShapeCfg::default()), 1);
    }

    #[test]
    fn duplicates_collapse_without_nan() {
        let mut s = Stroke::from_xy(
            Rgba::BLACK,
            1.0,
            &[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (3.0, 1.0)],
        );
        simplify_stroke(&mut s, &ShapeCfg::default());
        assert_eq!(s.points, vec![Point::new(0.0, 0.0), Point::new(3.0, 1.0)]);
    }

    #[test]
    fn non_finite_points_are_kept() {
        let mut s = Stroke::from_xy(
            Rgba::BLACK,
            1.0,
            &[(0.0, 0.0), (f64::NAN, 0.0), (2.0, 0.0)],
        );
        assert_eq!(simplify_stroke(&mut s, &ShapeCfg::default()), 0);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn short_strokes_unchanged() {
        let cfg = ShapeCfg::default();
        let mut one = Stroke::from_xy(Rgba::BLACK, 1.0, &[(0.0, 0.0)]);
        let mut two = Stroke::from_xy(Rgba::BLACK, 1.0, &[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(simplify_stroke(&mut one, &cfg), 0);
        assert_eq!(simplify_stroke(&mut two, &cfg), 0);
    }

    #[test]
    fn second_pass_removes_nothing() {
        let cfg = ShapeCfg::default();
        let mut s = Stroke::from_xy(
            Rgba::BLACK,
            1.0,
            &[(0.0, 0.0), (1.0, 0.01), (2.0, 0.0), (2.5, 1.0), (3.0, 2.0), (0.0, 0.0)],
        );
        simplify_stroke(&mut s, &cfg);
        let once = s.clone();
        assert_eq!(simplify_stroke(&mut s, &cfg), 0);
        assert_eq!(s, once);
    }

    #[test]
    fn removal_retests_previous_triple() {
        // (10,0) first looks like a 3.7° turn and survives; once the wobble
        // sample goes, the turn toward the far point is nearly straight.
        let heading = |deg: f64| (deg.to_radians().cos(), deg.to_radians().sin());
        let (ax, ay) = heading(3.7);
        let (bx, by) = heading(0.2);
        let wobble = (10.0 + ax, ay);
        let far = (wobble.0 + 10.0 * bx, wobble.1 + 10.0 * by);
        let mut s = Stroke::from_xy(Rgba::BLACK, 1.0, &[(0.0, 0.0), (10.0, 0.0), wobble, far]);
        let cfg = ShapeCfg::default();
        assert_eq!(simplify_stroke(&mut s, &cfg), 2);
        assert_eq!(s.points, vec![Point::new(0.0, 0.0), Point::new(far.0, far.1)]);
        assert_eq!(simplify_stroke(&mut s, &cfg), 0);
    }

    #[test]
    fn item_wrapper_passes_circles_through() {
        let c = Item::Circle(crate::geom::Circle {
            color: Rgba::BLACK,
            width: 1.0,
            cx: 0.0,
            cy: 0.0,
            radius: 1.0,
        });
        assert_eq!(simplify(c.clone(), &ShapeCfg::default()), c);
    }
}
