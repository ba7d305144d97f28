//! Freehand stroke shape.

use super::{Point, ShapeId};

/// A freehand stroke: an append-only series of points in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub(crate) id: ShapeId,
    pub(crate) name: String,
    /// CSS color string.
    pub color: String,
    /// Brush size.
    pub size: f64,
    pub(crate) points: Vec<Point>,
}

impl Stroke {
    /// Start a stroke in slot `index` (0-based) of the stroke collection, seeded with one point.
    pub(crate) fn start(index: usize, id: ShapeId, origin: Point, size: f64, color: String) -> Self {
        Self {
            id,
            name: format!("Trace {}", index + 1),
            color,
            size,
            points: vec![origin],
        }
    }

    /// Get the caller-supplied identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display name (`Trace N`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Append a point to the end of the stroke.
    pub(crate) fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the stroke has no points. Never true for strokes held by a document.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the most recently appended point.
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }
}
