//! Storyboard frame and its symbol store.
//!
//! A frame owns an ordered list of symbols. Placement invariants (the
//! per-frame capacity and the one-instance rule for singleton
//! categories) are enforced at [`Frame::add`] time only; geometry
//! mutations go through [`Frame::mutate`] and never re-validate them.
//! Rejections are ordinary error values, the frame is left untouched.

use crate::config::EditorConfig;
use crate::symbol::{Symbol, SymbolCategory, SymbolId};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for frames.
pub type FrameId = Uuid;

/// Placement rejections surfaced to the caller. Non-fatal; the store is
/// unchanged when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("frame already holds the maximum of {max} symbols")]
    CapacityExceeded { max: usize },
    #[error("frame already holds a {category:?} symbol")]
    CategoryConflict { category: SymbolCategory },
}

/// Partial update applied to a symbol by [`Frame::mutate`]. Absent
/// fields leave the symbol untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub text: Option<String>,
    pub description: Option<String>,
}

impl SymbolPatch {
    /// Patch carrying the full geometry of a symbol value.
    pub fn geometry_of(symbol: &Symbol) -> Self {
        Self {
            x: Some(symbol.x),
            y: Some(symbol.y),
            width: Some(symbol.width),
            height: Some(symbol.height),
            rotation: Some(symbol.rotation),
            text: None,
            description: None,
        }
    }
}

/// A storyboard frame: its identity, its position in the board, and the
/// ordered symbol list. The frame itself is created upstream; this
/// subsystem only ever touches the symbol list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub id: FrameId,
    /// 1-based position in the storyboard.
    pub number: u32,
    symbols: Vec<Symbol>,
}

impl Frame {
    /// Create an empty frame at the given board position.
    pub fn new(number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            number,
            symbols: Vec::new(),
        }
    }

    /// Add a symbol, enforcing the placement invariants. Atomic: on any
    /// rejection the symbol list is unchanged.
    pub fn add(&mut self, symbol: Symbol, config: &EditorConfig) -> Result<SymbolId, StoreError> {
        if self.symbols.len() >= config.max_symbols_per_frame {
            warn!(
                "frame {}: rejecting {:?} symbol, capacity {} reached",
                self.number,
                symbol.category(),
                config.max_symbols_per_frame
            );
            return Err(StoreError::CapacityExceeded {
                max: config.max_symbols_per_frame,
            });
        }

        let category = symbol.category();
        if !category.allows_duplicates() && self.symbols.iter().any(|s| s.category() == category) {
            warn!("frame {}: rejecting duplicate {:?} symbol", self.number, category);
            return Err(StoreError::CategoryConflict { category });
        }

        let id = symbol.id();
        debug!("frame {}: add {:?} symbol {}", self.number, category, id);
        self.symbols.push(symbol);
        Ok(id)
    }

    /// Remove a symbol by id. No-op when absent.
    pub fn remove(&mut self, id: SymbolId) -> Option<Symbol> {
        let pos = self.symbols.iter().position(|s| s.id() == id)?;
        debug!("frame {}: remove symbol {}", self.number, id);
        Some(self.symbols.remove(pos))
    }

    /// Apply a partial update to a symbol. Capacity/category invariants
    /// are add-time only and deliberately not re-checked here; rotation
    /// and dialogue text still go through their normalizing setters.
    /// Returns false when the id is unknown.
    pub fn mutate(&mut self, id: SymbolId, patch: &SymbolPatch) -> bool {
        let Some(symbol) = self.symbols.iter_mut().find(|s| s.id() == id) else {
            return false;
        };
        if let Some(x) = patch.x {
            symbol.x = x;
        }
        if let Some(y) = patch.y {
            symbol.y = y;
        }
        if let Some(width) = patch.width {
            symbol.width = width;
        }
        if let Some(height) = patch.height {
            symbol.height = height;
        }
        if let Some(rotation) = patch.rotation {
            symbol.set_rotation(rotation);
        }
        if let Some(ref text) = patch.text {
            symbol.set_text(text.clone());
        }
        if let Some(ref description) = patch.description {
            symbol.description = Some(description.clone());
        }
        true
    }

    /// Get a symbol by id.
    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id() == id)
    }

    /// Symbols in insertion order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Symbols in front-to-back order (latest insertion on top), for
    /// pointer hit testing.
    pub fn symbols_topmost_first(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Serialize the frame to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a frame from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
