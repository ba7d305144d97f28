//! Shape definitions for the canvas document.

mod rectangle;
mod stroke;

pub use rectangle::Rectangle;
pub use stroke::Stroke;

pub use kurbo::Point;

/// Identifier of a shape within its own collection.
pub type ShapeId = String;
