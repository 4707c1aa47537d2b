//! Synthetic hand-drawn strokes (seeded jitter + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for tests, benches and the CLI `demo` command that
//!   look like pen traces: dense samples, small wobble, an exact closing
//!   sample on closed shapes.
//!
//! Model
//! - Circles: `n` equally spaced angles with bounded radial jitter, then a
//!   copy of the first sample. An even `n` puts the halfway sample exactly
//!   opposite the start.
//! - Rectangles: dense samples along each edge, jittered only along the edge
//!   so every edge stays axis-exact.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::document::{Document, Layer, Page};
use crate::geom::{Item, Point, Rgba, Stroke};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Circle trace configuration.
#[derive(Clone, Copy, Debug)]
pub struct CircleTrace {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Samples before the closing copy. Rounded up to an even count.
    pub samples: usize,
    /// Absolute radial wobble, uniform in `[-jitter, jitter]`.
    pub jitter: f64,
    pub pressure: Option<f64>,
}

impl Default for CircleTrace {
    fn default() -> Self {
        Self {
            cx: 100.0,
            cy: 100.0,
            radius: 40.0,
            samples: 32,
            jitter: 0.2,
            pressure: None,
        }
    }
}

/// Draws a closed, slightly wobbly circle.
pub fn circle_stroke(cfg: CircleTrace, color: Rgba, width: f64, tok: ReplayToken) -> Stroke {
    let mut rng = tok.to_std_rng();
    let n = (cfg.samples.max(6) + 1) & !1;
    let j = cfg.jitter.abs();
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut pts: Vec<Point> = (0..n)
        .map(|k| {
            let t = phase + std::f64::consts::TAU * k as f64 / n as f64;
            let r = if k == 0 || k == n / 2 {
                cfg.radius
            } else {
                cfg.radius + rng.gen_range(-j..=j)
            };
            Point {
                x: cfg.cx + r * t.cos(),
                y: cfg.cy + r * t.sin(),
                pressure: cfg.pressure,
            }
        })
        .collect();
    pts.push(pts[0]);
    Stroke::new(color, width, pts)
}

/// Draws an axis-aligned box from `(x1, y1)` with `per_edge` samples per edge.
pub fn rectangle_stroke(
    (x1, y1): (f64, f64),
    (x2, y2): (f64, f64),
    per_edge: usize,
    color: Rgba,
    width: f64,
    tok: ReplayToken,
) -> Stroke {
    let mut rng = tok.to_std_rng();
    let per_edge = per_edge.max(1);
    let corners = [(x1, y1), (x2, y1), (x2, y2), (x1, y2)];
    let mut pts = Vec::with_capacity(4 * per_edge + 1);
    for k in 0..4 {
        let (ax, ay) = corners[k];
        let (bx, by) = corners[(k + 1) % 4];
        pts.push(Point::new(ax, ay));
        for j in 1..per_edge {
            let wobble = rng.gen_range(-0.3..0.3);
            let t = ((j as f64 + wobble) / per_edge as f64).clamp(0.0, 1.0);
            // Only the moving coordinate is interpolated so edges stay exact.
            let p = if ay == by {
                Point::new(ax + (bx - ax) * t, ay)
            } else {
                Point::new(ax, ay + (by - ay) * t)
            };
            pts.push(p);
        }
    }
    pts.push(pts[0]);
    Stroke::new(color, width, pts)
}

/// Straight line with linearly ramped pressure.
pub fn line_stroke(
    from: (f64, f64),
    to: (f64, f64),
    samples: usize,
    pressure: (f64, f64),
    color: Rgba,
    width: f64,
) -> Stroke {
    let samples = samples.max(2);
    let pts = (0..samples)
        .map(|k| {
            let t = k as f64 / (samples - 1) as f64;
            Point::with_pressure(
                from.0 + (to.0 - from.0) * t,
                from.1 + (to.1 - from.1) * t,
                pressure.0 + (pressure.1 - pressure.0) * t,
            )
        })
        .collect();
    Stroke::new(color, width, pts)
}

/// Open freehand wiggle that matches no primitive.
pub fn scribble_stroke(origin: (f64, f64), samples: usize, color: Rgba, tok: ReplayToken) -> Stroke {
    let mut rng = tok.to_std_rng();
    let (mut x, mut y) = origin;
    let mut heading: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
    let pts = (0..samples.max(2))
        .map(|_| {
            let p = Point::new(x, y);
            heading += rng.gen_range(0.3..1.2);
            x += 4.0 * heading.cos();
            y += 4.0 * heading.sin();
            p
        })
        .collect();
    Stroke::new(color, 1.0, pts)
}

/// A small document with `pages` pages mixing circles, boxes, lines and
/// scribbles on two layers each.
pub fn demo_document(seed: u64, pages: usize) -> Document {
    let blue = Rgba::new(0, 0, 255, 255);
    let red = Rgba::new(255, 0, 0, 255);
    let pages = (0..pages)
        .map(|p| {
            let tok = |i: u64| ReplayToken::new(seed, (p as u64) * 16 + i);
            let shapes = Layer::new(vec![
                Item::Stroke(circle_stroke(CircleTrace::default(), blue, 1.41, tok(0))),
                Item::Stroke(rectangle_stroke(
                    (200.0, 50.0),
                    (320.0, 130.0),
                    20,
                    Rgba::BLACK,
                    2.26,
                    tok(1),
                )),
            ]);
            let ink = Layer::new(vec![
                Item::Stroke(line_stroke(
                    (20.0, 300.0),
                    (400.0, 300.0),
                    40,
                    (1.0, 1.0),
                    Rgba::BLACK,
                    1.41,
                )),
                Item::Stroke(line_stroke(
                    (20.0, 340.0),
                    (400.0, 340.0),
                    40,
                    (0.5, 8.0),
                    red,
                    1.41,
                )),
                Item::Stroke(scribble_stroke((60.0, 420.0), 30, red, tok(2))),
            ]);
            Page::new(vec![shapes, ink])
        })
        .collect();
    Document::new(pages)
}
