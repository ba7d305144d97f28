//! Presence tracking for remote cursors.
//!
//! Only the latest cursor position of each pointer is kept. Entries are
//! never expired here; connection teardown belongs to whoever owns the
//! connections, and it can call [`PresenceTracker::remove`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cursor colors, indexed by pointer id.
pub const PALETTE: [&str; 6] = [
    "#22d3ee", "#f97316", "#a855f7", "#facc15", "#34d399", "#ef4444",
];

/// Deterministic display color for a pointer id.
pub fn color_for_pointer(pointer_id: i32) -> &'static str {
    PALETTE[pointer_id.unsigned_abs() as usize % PALETTE.len()]
}

/// A participant's cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presence {
    pub id: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
}

/// Maps pointer ids to their last known cursor.
#[derive(Debug, Clone, Default)]
pub struct PresenceTracker {
    presences: HashMap<i32, Presence>,
}

impl PresenceTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move. The first move for a pointer assigns its color;
    /// later moves only update the position.
    pub fn observe_move(&mut self, pointer_id: i32, x: f64, y: f64) {
        let presence = self.presences.entry(pointer_id).or_insert_with(|| {
            log::debug!("tracking pointer {pointer_id}");
            Presence {
                id: pointer_id.to_string(),
                color: color_for_pointer(pointer_id).to_string(),
                x,
                y,
            }
        });
        presence.x = x;
        presence.y = y;
    }

    /// Stop tracking a pointer.
    pub fn remove(&mut self, pointer_id: i32) -> Option<Presence> {
        let removed = self.presences.remove(&pointer_id);
        if removed.is_some() {
            log::debug!("dropped pointer {pointer_id}");
        }
        removed
    }

    /// Get the presence of a pointer.
    pub fn get(&self, pointer_id: i32) -> Option<&Presence> {
        self.presences.get(&pointer_id)
    }

    /// Iterate over tracked presences in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Presence> {
        self.presences.values()
    }

    /// Number of tracked pointers.
    pub fn len(&self) -> usize {
        self.presences.len()
    }

    /// Check if no pointer is tracked.
    pub fn is_empty(&self) -> bool {
        self.presences.is_empty()
    }
}
