//! Renderable state snapshots.

use crate::document::DocumentStore;
use crate::presence::{Presence, PresenceTracker};
use crate::shapes::{Point, Rectangle, Stroke};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of the whole engine state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub document: DocumentSnapshot,
    /// Tracked cursors, in no particular order.
    pub presences: Vec<Presence>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub id: String,
    pub name: String,
    /// All rectangles in creation order, then all strokes in creation order.
    pub shapes: Vec<ShapeSnapshot>,
}

/// A shape as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSnapshot {
    Rectangle {
        id: String,
        name: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    Stroke {
        id: String,
        name: String,
        color: String,
        size: f64,
        points: Vec<Point>,
    },
}

impl ShapeSnapshot {
    /// Get the shape identifier.
    pub fn id(&self) -> &str {
        match self {
            ShapeSnapshot::Rectangle { id, .. } | ShapeSnapshot::Stroke { id, .. } => id,
        }
    }

    /// Get the shape display name.
    pub fn name(&self) -> &str {
        match self {
            ShapeSnapshot::Rectangle { name, .. } | ShapeSnapshot::Stroke { name, .. } => name,
        }
    }

    /// The `kind` tag this shape serializes with.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeSnapshot::Rectangle { .. } => "rectangle",
            ShapeSnapshot::Stroke { .. } => "stroke",
        }
    }
}

impl From<&Rectangle> for ShapeSnapshot {
    fn from(rect: &Rectangle) -> Self {
        ShapeSnapshot::Rectangle {
            id: rect.id().to_string(),
            name: rect.name().to_string(),
            x: rect.position.x,
            y: rect.position.y,
            width: rect.width,
            height: rect.height,
            color: rect.color.clone(),
        }
    }
}

impl From<&Stroke> for ShapeSnapshot {
    fn from(stroke: &Stroke) -> Self {
        ShapeSnapshot::Stroke {
            id: stroke.id().to_string(),
            name: stroke.name().to_string(),
            color: stroke.color.clone(),
            size: stroke.size,
            points: stroke.points().to_vec(),
        }
    }
}

impl StateSnapshot {
    /// Copy the current document and presence state.
    pub fn capture(
        document_id: &str,
        document_name: &str,
        document: &DocumentStore,
        presences: &PresenceTracker,
    ) -> Self {
        let shapes = document
            .rectangles()
            .iter()
            .map(ShapeSnapshot::from)
            .chain(document.strokes().iter().map(ShapeSnapshot::from))
            .collect();

        Self {
            document: DocumentSnapshot {
                id: document_id.to_string(),
                name: document_name.to_string(),
                shapes,
            },
            presences: presences.iter().cloned().collect(),
        }
    }

    /// Serialize the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize the snapshot to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
