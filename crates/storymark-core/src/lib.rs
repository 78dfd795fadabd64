//! Storymark Core Library
//!
//! Data structures and interaction logic for the storyboard canvas
//! annotator: percent-space geometry, typed symbols, the per-frame
//! symbol store, and the pointer-driven transform state machine.

pub mod config;
pub mod editor;
pub mod frame;
pub mod geometry;
pub mod interaction;
pub mod storage;
pub mod symbol;

pub use config::{AspectRatio, EditorConfig, ProjectConfig};
pub use editor::{Editor, SessionState};
pub use frame::{Frame, FrameId, StoreError, SymbolPatch};
pub use geometry::{
    CompassDirection, HorizontalZone, IntensityBucket, IntensityLevel, PositionZone, VerticalZone,
};
pub use interaction::{CanvasMetrics, Corner, Gesture, Handle, HandleKind, TransformMode};
pub use storage::{MemorySink, PersistenceSink};
pub use symbol::{
    ActionIcon, ActionVerb, CameraMove, DialogueIcon, DragPayload, EmotionIcon, Symbol,
    SymbolCategory, SymbolIcon, SymbolId, Trajectory,
};
