//! Persistence seam.
//!
//! The annotation subsystem persists nothing itself: every mutation is
//! handed to an external store through this narrow interface. The
//! in-memory sink exists for tests and for embedding without a backend.

use crate::frame::{Frame, FrameId};
use std::collections::HashMap;

/// Receives the frame after every mutation. Implementations decide
/// where (and whether) the state actually lands.
pub trait PersistenceSink {
    fn frame_changed(&mut self, frame: &Frame);
}

/// Sink that keeps the latest JSON snapshot per frame in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    snapshots: HashMap<FrameId, String>,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot for a frame, if one was recorded.
    pub fn snapshot(&self, id: FrameId) -> Option<&str> {
        self.snapshots.get(&id).map(String::as_str)
    }

    /// Number of change notifications received.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PersistenceSink for MemorySink {
    fn frame_changed(&mut self, frame: &Frame) {
        self.writes += 1;
        if let Ok(json) = frame.to_json() {
            self.snapshots.insert(frame.id, json);
        }
    }
}
