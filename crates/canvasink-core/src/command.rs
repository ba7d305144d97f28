//! Commands and pointer events accepted by the engine.
//!
//! Both are JSON objects tagged by `"type"`:
//! ```json
//! { "type": "createRectangle", "x": 0, "y": 0, "width": 40, "height": 20, "color": "#f97316" }
//! { "type": "startStroke", "id": "s1", "x": 1, "y": 2, "size": 3, "color": "red" }
//! { "type": "updateStroke", "id": "s1", "x": 4, "y": 5 }
//! { "type": "finishStroke", "id": "s1" }
//! { "type": "pointerMove", "pointerId": 3, "x": 10, "y": 20 }
//! ```
//! Unrecognized kinds decode successfully and are ignored.

use serde::{Deserialize, Serialize};

/// A document edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    CreateRectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    StartStroke {
        id: String,
        x: f64,
        y: f64,
        size: f64,
        color: String,
    },
    UpdateStroke { id: String, x: f64, y: f64 },
    FinishStroke { id: String },
    /// Any command kind this engine does not know.
    #[serde(other)]
    Unknown,
}

/// A pointer event from a participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerEvent {
    PointerMove {
        #[serde(rename = "pointerId")]
        pointer_id: i32,
        x: f64,
        y: f64,
    },
    /// Any other pointer event kind.
    #[serde(other)]
    Other,
}

impl Command {
    /// Decode a command from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The wire name of this command kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::CreateRectangle { .. } => "createRectangle",
            Command::StartStroke { .. } => "startStroke",
            Command::UpdateStroke { .. } => "updateStroke",
            Command::FinishStroke { .. } => "finishStroke",
            Command::Unknown => "unknown",
        }
    }
}

impl PointerEvent {
    /// Decode a pointer event from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
