//! CanvasInk Core Library
//!
//! Authoritative in-memory state for a collaborative 2D canvas: rectangles,
//! freehand strokes and live cursors. Commands mutate it one at a time and
//! [`Engine::tick`] returns an owned snapshot for rendering.
//!
//! The engine is single-threaded and takes `&mut self` for every mutation.
//! Callers on a concurrent host must serialize access themselves.

pub mod command;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod presence;
pub mod shapes;
pub mod snapshot;

pub use command::{Command, PointerEvent};
pub use config::EngineConfig;
pub use document::DocumentStore;
pub use engine::{CanvasSize, Engine};
pub use error::{EngineError, EngineResult};
pub use presence::{Presence, PresenceTracker, color_for_pointer};
pub use shapes::{Point, Rectangle, Stroke};
pub use snapshot::{DocumentSnapshot, ShapeSnapshot, StateSnapshot};
