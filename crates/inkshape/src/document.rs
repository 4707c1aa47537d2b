//! Document → pages → layers → items.
//!
//! Pure traversal scaffolding: the passes never look at page or layer
//! metadata. `validate` is the gate for untrusted input (e.g. JSON loaded by
//! the CLI); the passes themselves tolerate anything.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geom::Item;

/// Ordered items; order is z-order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub items: Vec<Item>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub layers: Vec<Layer>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

/// Location of an item inside a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemPath {
    pub page: usize,
    pub layer: usize,
    pub item: usize,
}

impl std::fmt::Display for ItemPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "page {} layer {} item {}", self.page, self.layer, self.item)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("{at}: stroke has no points")]
    EmptyStroke { at: ItemPath },
    #[error("{at}: point {index} has a non-finite coordinate or pressure")]
    NonFinitePoint { at: ItemPath, index: usize },
    #[error("{at}: width {width} is not a finite non-negative number")]
    BadWidth { at: ItemPath, width: f64 },
    #[error("{at}: circle radius {radius} is not a finite non-negative number")]
    BadRadius { at: ItemPath, radius: f64 },
    #[error("{at}: {kind} has a non-finite position")]
    NonFiniteShape { at: ItemPath, kind: &'static str },
}

impl Layer {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl Page {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Total number of items across all pages and layers.
    pub fn item_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| &p.layers)
            .map(|l| l.items.len())
            .sum()
    }

    /// Items in document order with their location.
    pub fn items(&self) -> impl Iterator<Item = (ItemPath, &Item)> + '_ {
        self.pages.iter().enumerate().flat_map(|(pi, page)| {
            page.layers.iter().enumerate().flat_map(move |(li, layer)| {
                layer.items.iter().enumerate().map(move |(ii, item)| {
                    let at = ItemPath {
                        page: pi,
                        layer: li,
                        item: ii,
                    };
                    (at, item)
                })
            })
        })
    }

    /// Checks every item for empty strokes, bad widths or radii, and
    /// non-finite positions (points, circle centers, rectangle corners, text
    /// anchors). Stops at the first problem.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (at, item) in self.items() {
            match item {
                Item::Stroke(s) => {
                    check_width(at, s.width)?;
                    if s.points.is_empty() {
                        return Err(ModelError::EmptyStroke { at });
                    }
                    if let Some(index) = s.points.iter().position(|p| !p.is_finite()) {
                        return Err(ModelError::NonFinitePoint { at, index });
                    }
                }
                Item::Circle(c) => {
                    check_width(at, c.width)?;
                    check_finite(at, item, &[c.cx, c.cy])?;
                    if !(c.radius.is_finite() && c.radius >= 0.0) {
                        return Err(ModelError::BadRadius {
                            at,
                            radius: c.radius,
                        });
                    }
                }
                Item::Rectangle(r) => {
                    check_width(at, r.width)?;
                    check_finite(at, item, &[r.x1, r.y1, r.x2, r.y2])?;
                }
                Item::TextBox(t) => check_finite(at, item, &[t.x, t.y])?,
            }
        }
        Ok(())
    }
}

fn check_width(at: ItemPath, width: f64) -> Result<(), ModelError> {
    if width.is_finite() && width >= 0.0 {
        Ok(())
    } else {
        Err(ModelError::BadWidth { at, width })
    }
}

fn check_finite(at: ItemPath, item: &Item, coords: &[f64]) -> Result<(), ModelError> {
    if coords.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ModelError::NonFiniteShape {
            at,
            kind: item.kind(),
        })
    }
}
