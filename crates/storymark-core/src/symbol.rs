//! Symbol definitions for the storyboard canvas.
//!
//! A symbol is a typed annotation overlay placed on a picture frame. Its
//! geometry lives in canvas percent space (the frame is a 100×100 unit
//! surface) so that symbols stay anchored when the rendered canvas
//! resizes. Icons are closed tagged variants rather than loose strings;
//! a symbol's category is derived from its icon so the two can never
//! disagree.

use crate::geometry::{self, IntensityBucket, PositionZone};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for symbols.
pub type SymbolId = Uuid;

/// Maximum dialogue text length, in characters (dialogue is often CJK,
/// so this counts chars, not bytes).
pub const MAX_DIALOGUE_CHARS: usize = 15;

/// The closed classification of a symbol. Placement rules and directive
/// generation both dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolCategory {
    Reference,
    Camera,
    Action,
    Dialogue,
    Emotion,
    Custom,
}

impl SymbolCategory {
    /// Categories that may appear more than once per frame.
    pub fn allows_duplicates(&self) -> bool {
        matches!(self, SymbolCategory::Dialogue | SymbolCategory::Custom)
    }
}

/// Named camera operations. One directive each, independent of geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraMove {
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    TiltUp,
    TiltDown,
    Tracking,
    DollyZoom,
}

/// Movement trajectory, keyed by the arrow icon variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trajectory {
    Linear,
    Parabolic,
    Circular,
    Wave,
}

/// Named subject actions for the non-arrow action icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionVerb {
    Walk,
    Jump,
    Turn,
    Fight,
    Fall,
}

/// Action icons: directional arrows carry a trajectory, the rest map to
/// a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionIcon {
    Arrow(Trajectory),
    Verb(ActionVerb),
}

/// Dialogue bubble icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogueIcon {
    SpeechBubble,
    ThoughtBubble,
}

/// Emotion icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionIcon {
    Happy,
    Sad,
    Angry,
    Surprised,
    Scared,
}

/// The full icon space, one variant group per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolIcon {
    Reference,
    Camera(CameraMove),
    Action(ActionIcon),
    Dialogue(DialogueIcon),
    Emotion(EmotionIcon),
    Custom,
}

impl SymbolIcon {
    /// The category this icon belongs to.
    pub fn category(&self) -> SymbolCategory {
        match self {
            SymbolIcon::Reference => SymbolCategory::Reference,
            SymbolIcon::Camera(_) => SymbolCategory::Camera,
            SymbolIcon::Action(_) => SymbolCategory::Action,
            SymbolIcon::Dialogue(_) => SymbolCategory::Dialogue,
            SymbolIcon::Emotion(_) => SymbolCategory::Emotion,
            SymbolIcon::Custom => SymbolCategory::Custom,
        }
    }
}

/// A typed, positioned annotation overlay on a storyboard frame.
///
/// `x`/`y` is the top-left corner and `width`/`height` the extent, all in
/// canvas percent. `rotation` is degrees, kept normalized to `[0, 360)`
/// by [`Symbol::set_rotation`]. `text` is only meaningful for dialogue
/// symbols.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    pub(crate) id: SymbolId,
    /// Display name shown in the palette and inspector.
    pub name: String,
    /// The typed icon; the category is derived from it.
    pub icon: SymbolIcon,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, normalized to `[0, 360)`.
    #[serde(default)]
    pub rotation: f64,
    /// Dialogue text (dialogue symbols only), at most
    /// [`MAX_DIALOGUE_CHARS`] characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Optional free-text note appended to the symbol's directive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Symbol {
    /// Create a new symbol with the given geometry.
    pub fn new(name: impl Into<String>, icon: SymbolIcon, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            icon,
            x,
            y,
            width,
            height,
            rotation: 0.0,
            text: None,
            description: None,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> SymbolId {
        self.id
    }

    /// The symbol's category, derived from its icon.
    pub fn category(&self) -> SymbolCategory {
        self.icon.category()
    }

    /// Bounding box in canvas percent coordinates.
    pub fn bounds_percent(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Center point in canvas percent coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Fraction of the canvas covered, as a percentage.
    pub fn area_percent(&self) -> f64 {
        geometry::area_percent(self.width, self.height)
    }

    /// Coarse location of the symbol's top-left anchor.
    pub fn position_zone(&self) -> PositionZone {
        PositionZone::from_point(self.x, self.y)
    }

    /// Intensity classification derived from the covered area.
    pub fn intensity(&self) -> IntensityBucket {
        IntensityBucket::from_area(self.area_percent())
    }

    /// Set the rotation, storing it normalized to `[0, 360)`.
    pub fn set_rotation(&mut self, deg: f64) {
        self.rotation = geometry::normalize_rotation(deg);
    }

    /// Set the dialogue text, truncating to [`MAX_DIALOGUE_CHARS`]
    /// characters.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text: String = text.into();
        self.text = Some(text.chars().take(MAX_DIALOGUE_CHARS).collect());
    }

    /// Check if a point (in canvas percent coordinates) hits this
    /// symbol's bounding box. `tolerance` is in percent units.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds_percent()
            .inflate(tolerance, tolerance)
            .contains(point)
    }
}

/// Typed message delivered when a palette entry is dropped on the canvas.
///
/// The surrounding application serializes this into the drag event;
/// malformed or missing payloads decode to `None` and are silently
/// discarded by the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragPayload {
    pub name: String,
    pub icon: SymbolIcon,
}

impl DragPayload {
    /// Decode a drop payload. Returns `None` for anything that is not a
    /// well-formed payload message.
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Encode for the drag source side.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
