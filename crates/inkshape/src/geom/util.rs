use nalgebra::Vector2;

use super::types::Point;

/// Euclidean distance between two positions.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Cosine of the turn at `b` between segments `a→b` and `b→c`.
///
/// 1.0 means straight ahead, -1.0 a full reversal. When either segment has
/// zero length the turn is undefined and 1.0 is returned, so a duplicated
/// sample reads as collinear. Non-finite input yields a non-finite result.
#[inline]
pub fn turn_cosine(a: &Point, b: &Point, c: &Point) -> f64 {
    let u = b.xy() - a.xy();
    let v = c.xy() - b.xy();
    let denom = u.norm() * v.norm();
    if denom == 0.0 {
        return 1.0;
    }
    u.dot(&v) / denom
}
