//! Pointer-driven transform machinery: handles, gestures, and the
//! move/resize/rotate math.
//!
//! A gesture snapshots the symbol at pointer-down and every subsequent
//! update re-derives the full geometry from that snapshot plus the
//! accumulated pointer delta, so repeated updates cannot drift. The
//! gesture owns the whole interaction: it is created on pointer-down and
//! dissolved on every exit path (release or cancel), which is what keeps
//! move/resize/rotate mutually exclusive.

use crate::config::EditorConfig;
use crate::frame::SymbolPatch;
use crate::symbol::{Symbol, SymbolId};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Handle hit tolerance in screen pixels.
pub const HANDLE_HIT_TOLERANCE: f64 = 12.0;
/// Distance from the symbol's top edge to the rotate handle, in pixels.
pub const ROTATE_HANDLE_OFFSET: f64 = 24.0;

/// Current pixel size of the rendered canvas. Supplied by the
/// surrounding application per event; pointer deltas are converted to
/// canvas percent against it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasMetrics {
    pub width_px: f64,
    pub height_px: f64,
}

impl CanvasMetrics {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self { width_px, height_px }
    }

    /// Convert a pixel delta to a percent delta.
    pub fn delta_to_percent(&self, delta_px: Vec2) -> Vec2 {
        Vec2::new(
            delta_px.x / self.width_px * 100.0,
            delta_px.y / self.height_px * 100.0,
        )
    }

    /// Convert a percent-space point to pixels.
    pub fn percent_to_px(&self, p: Point) -> Point {
        Point::new(p.x / 100.0 * self.width_px, p.y / 100.0 * self.height_px)
    }

    /// Convert a pixel-space point to percent.
    pub fn px_to_percent(&self, p: Point) -> Point {
        Point::new(p.x / self.width_px * 100.0, p.y / self.height_px * 100.0)
    }
}

/// Corner positions, named by compass shorthand as the resize modes are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

/// The mutually exclusive transform modes of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformMode {
    Move,
    Resize(Corner),
    Rotate,
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// The symbol body (starts a move).
    Body,
    /// One of the four corner resize handles.
    Resize(Corner),
    /// The rotate handle above the top edge.
    Rotate,
}

/// A manipulation handle with its screen position.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    pub kind: HandleKind,
    /// Position in pixels.
    pub position: Point,
}

impl Handle {
    pub fn new(kind: HandleKind, position: Point) -> Self {
        Self { kind, position }
    }

    /// Check if a pointer position (pixels) hits this handle.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }
}

/// Compute the manipulation handles for a symbol: four corners plus the
/// rotate handle above top-center, all rotated with the symbol around
/// its center. Positions are in pixels for the given canvas size.
pub fn handles(symbol: &Symbol, metrics: &CanvasMetrics) -> Vec<Handle> {
    let bounds = symbol.bounds_percent();
    let center = metrics.percent_to_px(bounds.center());
    let half_w = bounds.width() / 100.0 * metrics.width_px / 2.0;
    let half_h = bounds.height() / 100.0 * metrics.height_px / 2.0;
    let rot = symbol.rotation.to_radians();
    let (sin_r, cos_r) = rot.sin_cos();

    let rotate_point = |dx: f64, dy: f64| -> Point {
        Point::new(
            center.x + dx * cos_r - dy * sin_r,
            center.y + dx * sin_r + dy * cos_r,
        )
    };

    vec![
        Handle::new(HandleKind::Resize(Corner::NorthWest), rotate_point(-half_w, -half_h)),
        Handle::new(HandleKind::Resize(Corner::NorthEast), rotate_point(half_w, -half_h)),
        Handle::new(HandleKind::Resize(Corner::SouthWest), rotate_point(-half_w, half_h)),
        Handle::new(HandleKind::Resize(Corner::SouthEast), rotate_point(half_w, half_h)),
        Handle::new(
            HandleKind::Rotate,
            rotate_point(0.0, -half_h - ROTATE_HANDLE_OFFSET),
        ),
    ]
}

/// Resolve a pointer position to the handle it hits, if any. Corner and
/// rotate handles take precedence over the body.
pub fn hit_test_handles(symbol: &Symbol, point_px: Point, metrics: &CanvasMetrics) -> Option<HandleKind> {
    for handle in handles(symbol, metrics) {
        if handle.hit_test(point_px, HANDLE_HIT_TOLERANCE) {
            return Some(handle.kind);
        }
    }
    if symbol.hit_test(metrics.px_to_percent(point_px), 0.0) {
        return Some(HandleKind::Body);
    }
    None
}

/// Apply one transform step: snapshot geometry plus the pointer delta
/// since the gesture anchor. Pure; the same snapshot and delta always
/// yield the same result.
///
/// Move and resize consume the delta in percent space; rotation is
/// driven by horizontal pixel displacement alone at the configured
/// sensitivity. The per-axis size floor applies on every resize update,
/// never to axes a corner does not control.
pub fn apply_transform(
    snapshot: &Symbol,
    mode: TransformMode,
    delta_px: Vec2,
    metrics: &CanvasMetrics,
    config: &EditorConfig,
) -> SymbolPatch {
    let d = metrics.delta_to_percent(delta_px);
    let min = config.min_symbol_size_pct;
    let mut patch = SymbolPatch::default();

    match mode {
        TransformMode::Move => {
            // No clamping during the drag; symbols may land off-canvas.
            patch.x = Some(snapshot.x + d.x);
            patch.y = Some(snapshot.y + d.y);
        }
        TransformMode::Resize(Corner::SouthEast) => {
            patch.width = Some((snapshot.width + d.x).max(min));
            patch.height = Some((snapshot.height + d.y).max(min));
        }
        TransformMode::Resize(Corner::NorthWest) => {
            patch.x = Some(snapshot.x + d.x);
            patch.y = Some(snapshot.y + d.y);
            patch.width = Some((snapshot.width - d.x).max(min));
            patch.height = Some((snapshot.height - d.y).max(min));
        }
        TransformMode::Resize(Corner::NorthEast) => {
            patch.y = Some(snapshot.y + d.y);
            patch.width = Some((snapshot.width + d.x).max(min));
            patch.height = Some((snapshot.height - d.y).max(min));
        }
        TransformMode::Resize(Corner::SouthWest) => {
            patch.x = Some(snapshot.x + d.x);
            patch.width = Some((snapshot.width - d.x).max(min));
            patch.height = Some((snapshot.height + d.y).max(min));
        }
        TransformMode::Rotate => {
            patch.rotation = Some(snapshot.rotation + delta_px.x * config.rotate_sensitivity);
        }
    }

    patch
}

/// One pointer interaction, from pointer-down to pointer-up.
///
/// Holds the symbol id, the snapshot taken at gesture start, and the
/// anchor pointer position. The gesture is consumed on release or
/// cancel; there is no exit path that leaves one active.
#[derive(Debug, Clone)]
pub struct Gesture {
    symbol_id: SymbolId,
    mode: TransformMode,
    anchor_px: Point,
    snapshot: Symbol,
}

impl Gesture {
    /// Begin a gesture over the given symbol, snapshotting it.
    pub fn begin(symbol: &Symbol, mode: TransformMode, anchor_px: Point) -> Self {
        Self {
            symbol_id: symbol.id(),
            mode,
            anchor_px,
            snapshot: symbol.clone(),
        }
    }

    pub fn symbol_id(&self) -> SymbolId {
        self.symbol_id
    }

    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    pub fn snapshot(&self) -> &Symbol {
        &self.snapshot
    }

    /// Geometry for the current pointer position, derived from the
    /// snapshot.
    pub fn update(&self, current_px: Point, metrics: &CanvasMetrics, config: &EditorConfig) -> SymbolPatch {
        let delta = Vec2::new(current_px.x - self.anchor_px.x, current_px.y - self.anchor_px.y);
        apply_transform(&self.snapshot, self.mode, delta, metrics, config)
    }
}
