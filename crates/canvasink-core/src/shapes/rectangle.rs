//! Rectangle shape.

use super::{Point, ShapeId};

/// An axis-aligned rectangle. Immutable once placed in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    pub(crate) name: String,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// CSS color string.
    pub color: String,
}

impl Rectangle {
    /// Build the rectangle occupying slot `index` (0-based) of the rectangle collection.
    pub(crate) fn at_index(
        index: usize,
        position: Point,
        width: f64,
        height: f64,
        color: String,
    ) -> Self {
        Self {
            id: format!("rect-{}", index + 1),
            name: format!("Rectangle {}", index + 1),
            position,
            width,
            height,
            color,
        }
    }

    /// Get the identifier (`rect-N`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display name (`Rectangle N`).
    pub fn name(&self) -> &str {
        &self.name
    }
}
