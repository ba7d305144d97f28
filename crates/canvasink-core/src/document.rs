//! Document store: the ordered rectangle and stroke collections.

use crate::shapes::{Point, Rectangle, ShapeId, Stroke};
use std::collections::HashMap;

/// Owns every shape of the canvas.
///
/// Strokes live in an append-only arena. `active` maps the id of each stroke
/// still being drawn to its arena slot, so incremental updates never scan.
/// Finishing a stroke drops its index entry only; the arena is never
/// compacted, which keeps every stored slot valid.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    rectangles: Vec<Rectangle>,
    strokes: Vec<Stroke>,
    active: HashMap<ShapeId, usize>,
}

impl DocumentStore {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rectangle. Its id and name derive from the rectangle count at insertion.
    pub fn add_rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: impl Into<String>,
    ) -> &Rectangle {
        let index = self.rectangles.len();
        let rect = Rectangle::at_index(index, Point::new(x, y), width, height, color.into());
        log::debug!("added rectangle {}", rect.id);
        self.rectangles.push(rect);
        &self.rectangles[index]
    }

    /// Start a new active stroke seeded with a single point.
    ///
    /// If `id` already names an active stroke, that stroke is finished first:
    /// it keeps its points and stays in the document, and `id` now refers to
    /// the new stroke.
    pub fn start_stroke(
        &mut self,
        id: impl Into<ShapeId>,
        x: f64,
        y: f64,
        size: f64,
        color: impl Into<String>,
    ) -> &Stroke {
        let id = id.into();
        let slot = self.strokes.len();
        if let Some(previous) = self.active.insert(id.clone(), slot) {
            log::warn!("stroke id {id} restarted while active; finishing slot {previous}");
        }
        let stroke = Stroke::start(slot, id, Point::new(x, y), size, color.into());
        log::debug!("started stroke {} ({})", stroke.id, stroke.name);
        self.strokes.push(stroke);
        &self.strokes[slot]
    }

    /// Append a point to an active stroke.
    /// Returns false (and changes nothing) if `id` is not active.
    pub fn append_to_stroke(&mut self, id: &str, x: f64, y: f64) -> bool {
        let Some(&slot) = self.active.get(id) else {
            log::trace!("ignored update for inactive stroke {id}");
            return false;
        };
        match self.strokes.get_mut(slot) {
            Some(stroke) => {
                stroke.add_point(Point::new(x, y));
                true
            }
            None => false,
        }
    }

    /// Revoke a stroke's eligibility for further points.
    /// Returns false if `id` was not active.
    pub fn finish_stroke(&mut self, id: &str) -> bool {
        match self.active.remove(id) {
            Some(slot) => {
                log::debug!("finished stroke {id} at slot {slot}");
                true
            }
            None => {
                log::trace!("ignored finish for inactive stroke {id}");
                false
            }
        }
    }

    /// Rectangles in creation order.
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// Strokes in creation order, finished or not.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Get the active stroke with this id.
    pub fn active_stroke(&self, id: &str) -> Option<&Stroke> {
        self.active.get(id).and_then(|&slot| self.strokes.get(slot))
    }

    /// Check whether `id` names a stroke that can still receive points.
    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains_key(id)
    }

    /// Number of strokes still being drawn.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Total number of shapes.
    pub fn len(&self) -> usize {
        self.rectangles.len() + self.strokes.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty() && self.strokes.is_empty()
    }
}
