//! Engine facade: the only entry point that mutates canvas state.

use crate::command::{Command, PointerEvent};
use crate::config::EngineConfig;
use crate::document::DocumentStore;
use crate::error::{EngineError, EngineResult};
use crate::presence::{Presence, PresenceTracker};
use crate::snapshot::StateSnapshot;

/// Logical canvas dimensions. Stored for the renderer, never read by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Build a size from signed dimensions, clamping negatives to zero.
    pub fn clamped(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0).unsigned_abs(),
            height: height.max(0).unsigned_abs(),
        }
    }
}

/// Owns the document and presence state of one canvas.
#[derive(Debug, Clone)]
pub struct Engine {
    size: CanvasSize,
    document_id: String,
    document_name: String,
    document: DocumentStore,
    presences: PresenceTracker,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with an empty canvas of size zero.
    pub fn new() -> Self {
        Self::from_config(EngineConfig::default())
    }

    /// Create an engine and immediately [`resize`](Self::resize) it.
    pub fn with_size(width: i32, height: i32) -> Self {
        let mut engine = Self::new();
        engine.resize(width, height);
        engine
    }

    /// Create an engine from explicit settings.
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            size: CanvasSize {
                width: config.width,
                height: config.height,
            },
            document_id: config.document_id,
            document_name: config.document_name,
            document: DocumentStore::new(),
            presences: PresenceTracker::new(),
        }
    }

    /// Set the logical canvas size. Negative dimensions become 0.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.size = CanvasSize::clamped(width, height);
        log::debug!("resized canvas to {}x{}", self.size.width, self.size.height);
    }

    /// Get the logical canvas size.
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Apply one command. Unknown kinds and inactive stroke ids are no-ops.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::CreateRectangle {
                x,
                y,
                width,
                height,
                color,
            } => {
                self.document.add_rectangle(x, y, width, height, color);
            }
            Command::StartStroke {
                id,
                x,
                y,
                size,
                color,
            } => {
                self.document.start_stroke(id, x, y, size, color);
            }
            Command::UpdateStroke { id, x, y } => {
                self.document.append_to_stroke(&id, x, y);
            }
            Command::FinishStroke { id } => {
                self.document.finish_stroke(&id);
            }
            Command::Unknown => {
                log::trace!("ignored unknown command");
            }
        }
    }

    /// Apply one pointer event. Only pointer moves have an effect.
    pub fn pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::PointerMove { pointer_id, x, y } => {
                self.presences.observe_move(pointer_id, x, y);
            }
            PointerEvent::Other => {
                log::trace!("ignored pointer event");
            }
        }
    }

    /// Forget a participant's cursor, e.g. when their connection closes.
    pub fn remove_presence(&mut self, pointer_id: i32) -> Option<Presence> {
        self.presences.remove(pointer_id)
    }

    /// Produce a snapshot of the current state. Has no side effects.
    pub fn tick(&self) -> StateSnapshot {
        StateSnapshot::capture(
            &self.document_id,
            &self.document_name,
            &self.document,
            &self.presences,
        )
    }

    /// Decode and apply a JSON command. On decode failure nothing changes.
    pub fn execute_json(&mut self, json: &str) -> EngineResult<()> {
        let command = Command::from_json(json).map_err(EngineError::Decode)?;
        self.execute(command);
        Ok(())
    }

    /// Decode and apply a JSON pointer event. On decode failure nothing changes.
    pub fn pointer_event_json(&mut self, json: &str) -> EngineResult<()> {
        let event = PointerEvent::from_json(json).map_err(EngineError::Decode)?;
        self.pointer_event(event);
        Ok(())
    }

    /// Snapshot the current state as JSON.
    pub fn tick_json(&self) -> EngineResult<String> {
        self.tick().to_json().map_err(EngineError::Encode)
    }

    /// Read-only access to the shapes.
    pub fn document(&self) -> &DocumentStore {
        &self.document
    }

    /// Read-only access to the tracked cursors.
    pub fn presences(&self) -> &PresenceTracker {
        &self.presences
    }
}
