//! Editor facade: selection, gesture lifecycle, and drop handling for
//! one storyboard frame.
//!
//! The editor is the single owner of the active gesture, so only one
//! symbol can be mid-transform at a time. Pointer events arrive in
//! pixels together with the canvas's current metrics; everything the
//! editor writes back into the frame goes through [`Frame::mutate`] as a
//! fresh value derived from the gesture snapshot.

use crate::config::EditorConfig;
use crate::frame::{Frame, StoreError};
use crate::interaction::{hit_test_handles, CanvasMetrics, Gesture, HandleKind, TransformMode};
use crate::storage::PersistenceSink;
use crate::symbol::{DragPayload, Symbol, SymbolId};
use kurbo::Point;
use log::{debug, warn};

/// Observable state of the interaction session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Selected(SymbolId),
    Transforming { symbol: SymbolId, mode: TransformMode },
}

/// Per-frame annotation editor.
pub struct Editor {
    frame: Frame,
    config: EditorConfig,
    selected: Option<SymbolId>,
    gesture: Option<Gesture>,
    /// Whether the active gesture has seen a pointer move.
    gesture_moved: bool,
    /// One-shot: swallow the background click that immediately follows
    /// a drag release, so releasing a drag never deselects.
    suppress_background_click: bool,
    sink: Option<Box<dyn PersistenceSink>>,
}

impl Editor {
    /// Create an editor over the given frame.
    pub fn new(frame: Frame, config: EditorConfig) -> Self {
        Self {
            frame,
            config,
            selected: None,
            gesture: None,
            gesture_moved: false,
            suppress_background_click: false,
            sink: None,
        }
    }

    /// Attach a persistence sink; it is notified after every mutation.
    pub fn set_sink(&mut self, sink: Box<dyn PersistenceSink>) {
        self.sink = Some(sink);
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Hand the frame back, consuming the editor.
    pub fn into_frame(self) -> Frame {
        self.frame
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<SymbolId> {
        self.selected
    }

    /// Current state of the interaction session.
    pub fn session_state(&self) -> SessionState {
        match (&self.gesture, self.selected) {
            (Some(g), _) => SessionState::Transforming {
                symbol: g.symbol_id(),
                mode: g.mode(),
            },
            (None, Some(id)) => SessionState::Selected(id),
            (None, None) => SessionState::Idle,
        }
    }

    /// Select a symbol by id. Returns false for unknown ids.
    pub fn select(&mut self, id: SymbolId) -> bool {
        if self.frame.symbol(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Pointer pressed. Resolves, in order: the selected symbol's
    /// handles, then symbol bodies front to back. Starts the matching
    /// gesture and selects the symbol. A press on empty canvas starts
    /// nothing (deselection is the click handler's job).
    pub fn pointer_down(&mut self, pos_px: Point, metrics: CanvasMetrics) {
        if self.gesture.is_some() {
            // Single-pointer input; a second press mid-gesture is not
            // arbitrated.
            return;
        }

        // Resize/rotate handles only exist on the selected symbol.
        if let Some(id) = self.selected {
            if let Some(symbol) = self.frame.symbol(id) {
                match hit_test_handles(symbol, pos_px, &metrics) {
                    Some(HandleKind::Resize(corner)) => {
                        self.begin_gesture(id, TransformMode::Resize(corner), pos_px);
                        return;
                    }
                    Some(HandleKind::Rotate) => {
                        self.begin_gesture(id, TransformMode::Rotate, pos_px);
                        return;
                    }
                    Some(HandleKind::Body) => {
                        self.begin_gesture(id, TransformMode::Move, pos_px);
                        return;
                    }
                    None => {}
                }
            }
        }

        // Otherwise the topmost symbol body under the pointer.
        let pos_pct = metrics.px_to_percent(pos_px);
        let hit = self
            .frame
            .symbols_topmost_first()
            .find(|s| s.hit_test(pos_pct, 0.0))
            .map(Symbol::id);
        if let Some(id) = hit {
            self.selected = Some(id);
            self.begin_gesture(id, TransformMode::Move, pos_px);
        }
    }

    fn begin_gesture(&mut self, id: SymbolId, mode: TransformMode, anchor_px: Point) {
        let Some(symbol) = self.frame.symbol(id) else { return };
        debug!("begin {:?} gesture on symbol {}", mode, id);
        self.gesture = Some(Gesture::begin(symbol, mode, anchor_px));
        self.gesture_moved = false;
    }

    /// Pointer moved. While transforming, derives the geometry from the
    /// gesture snapshot and writes it through the store so intermediate
    /// states are observable.
    pub fn pointer_move(&mut self, pos_px: Point, metrics: CanvasMetrics) {
        let Some(gesture) = &self.gesture else { return };
        let patch = gesture.update(pos_px, &metrics, &self.config);
        let id = gesture.symbol_id();
        self.gesture_moved = true;
        if self.frame.mutate(id, &patch) {
            self.notify();
        }
    }

    /// Pointer released. Writes the final state, dissolves the gesture,
    /// and — when the gesture actually dragged — arms the one-shot
    /// suppression of the background click that the release produces.
    pub fn pointer_up(&mut self, pos_px: Point, metrics: CanvasMetrics) {
        let Some(gesture) = self.gesture.take() else { return };
        let patch = gesture.update(pos_px, &metrics, &self.config);
        if self.frame.mutate(gesture.symbol_id(), &patch) {
            self.notify();
        }
        if self.gesture_moved {
            self.suppress_background_click = true;
        }
        self.gesture_moved = false;
        debug!("end gesture on symbol {}", gesture.symbol_id());
    }

    /// Cancel the active gesture, restoring the snapshot geometry.
    pub fn cancel_gesture(&mut self) {
        let Some(gesture) = self.gesture.take() else { return };
        let patch = crate::frame::SymbolPatch::geometry_of(gesture.snapshot());
        if self.frame.mutate(gesture.symbol_id(), &patch) {
            self.notify();
        }
        self.gesture_moved = false;
    }

    /// Click landed on the canvas background. Deselects, unless this is
    /// the click immediately following a drag release.
    pub fn background_click(&mut self) {
        if self.suppress_background_click {
            self.suppress_background_click = false;
            return;
        }
        if self.gesture.is_none() {
            self.selected = None;
        }
    }

    /// Handle a palette drop. Malformed payloads are discarded without
    /// an error; placement rejections surface as [`StoreError`]. The new
    /// symbol is centered on the drop point and selected.
    pub fn drop_payload(
        &mut self,
        payload_json: &str,
        pos_px: Point,
        metrics: CanvasMetrics,
    ) -> Result<Option<SymbolId>, StoreError> {
        let Some(payload) = DragPayload::from_json(payload_json) else {
            warn!("discarding malformed drop payload");
            return Ok(None);
        };

        let size = self.config.default_symbol_size_pct;
        let center = metrics.px_to_percent(pos_px);
        let symbol = Symbol::new(
            payload.name,
            payload.icon,
            center.x - size / 2.0,
            center.y - size / 2.0,
            size,
            size,
        );

        let id = self.frame.add(symbol, &self.config)?;
        self.selected = Some(id);
        self.notify();
        Ok(Some(id))
    }

    /// Remove the selected symbol, if any.
    pub fn delete_selected(&mut self) -> Option<Symbol> {
        let id = self.selected.take()?;
        let removed = self.frame.remove(id);
        if removed.is_some() {
            self.notify();
        }
        removed
    }

    fn notify(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.frame_changed(&self.frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySink;
    use crate::symbol::{CameraMove, SymbolIcon};

    fn metrics() -> CanvasMetrics {
        CanvasMetrics::new(1000.0, 1000.0)
    }

    fn editor_with_symbol() -> (Editor, SymbolId) {
        let mut frame = Frame::new(1);
        let cfg = EditorConfig::default();
        let id = frame
            .add(
                Symbol::new("zoom", SymbolIcon::Camera(CameraMove::ZoomIn), 40.0, 40.0, 20.0, 20.0),
                &cfg,
            )
            .unwrap();
        (Editor::new(frame, cfg), id)
    }

    #[test]
    fn test_press_body_starts_move() {
        let (mut editor, id) = editor_with_symbol();
        assert_eq!(editor.session_state(), SessionState::Idle);

        editor.pointer_down(Point::new(500.0, 500.0), metrics());
        assert_eq!(
            editor.session_state(),
            SessionState::Transforming {
                symbol: id,
                mode: TransformMode::Move
            }
        );
    }

    #[test]
    fn test_drag_moves_symbol_and_release_keeps_selection() {
        let (mut editor, id) = editor_with_symbol();
        editor.pointer_down(Point::new(500.0, 500.0), metrics());
        editor.pointer_move(Point::new(600.0, 550.0), metrics());

        // Intermediate state observable mid-drag
        let sym = editor.frame().symbol(id).unwrap();
        assert!((sym.x - 50.0).abs() < 1e-9);
        assert!((sym.y - 45.0).abs() < 1e-9);

        editor.pointer_up(Point::new(600.0, 550.0), metrics());
        assert_eq!(editor.session_state(), SessionState::Selected(id));
    }

    #[test]
    fn test_release_swallows_one_background_click() {
        let (mut editor, id) = editor_with_symbol();
        editor.pointer_down(Point::new(500.0, 500.0), metrics());
        editor.pointer_move(Point::new(600.0, 500.0), metrics());
        editor.pointer_up(Point::new(600.0, 500.0), metrics());

        // The click fired by the drag release does not deselect...
        editor.background_click();
        assert_eq!(editor.selected(), Some(id));
        // ...but the next real background click does.
        editor.background_click();
        assert_eq!(editor.selected(), None);
    }

    #[test]
    fn test_plain_click_then_background_deselects() {
        let (mut editor, id) = editor_with_symbol();
        editor.pointer_down(Point::new(500.0, 500.0), metrics());
        editor.pointer_up(Point::new(500.0, 500.0), metrics());
        assert_eq!(editor.selected(), Some(id));

        // No drag happened, so no suppression is armed
        editor.background_click();
        assert_eq!(editor.selected(), None);
    }

    #[test]
    fn test_corner_handle_starts_resize() {
        let (mut editor, id) = editor_with_symbol();
        editor.select(id);
        // Symbol occupies 400..600px; SE corner at (600, 600)
        editor.pointer_down(Point::new(600.0, 600.0), metrics());
        assert!(matches!(
            editor.session_state(),
            SessionState::Transforming {
                mode: TransformMode::Resize(crate::interaction::Corner::SouthEast),
                ..
            }
        ));

        editor.pointer_move(Point::new(700.0, 650.0), metrics());
        let sym = editor.frame().symbol(id).unwrap();
        assert!((sym.width - 30.0).abs() < 1e-9);
        assert!((sym.height - 25.0).abs() < 1e-9);
        editor.pointer_up(Point::new(700.0, 650.0), metrics());
    }

    #[test]
    fn test_rotate_handle_drives_rotation() {
        let (mut editor, id) = editor_with_symbol();
        editor.select(id);
        // Rotate handle above top-center: (500, 400 - offset)
        let handle_y = 400.0 - crate::interaction::ROTATE_HANDLE_OFFSET;
        editor.pointer_down(Point::new(500.0, handle_y), metrics());
        assert!(matches!(
            editor.session_state(),
            SessionState::Transforming {
                mode: TransformMode::Rotate,
                ..
            }
        ));

        editor.pointer_move(Point::new(560.0, handle_y), metrics());
        let sym = editor.frame().symbol(id).unwrap();
        assert!((sym.rotation - 30.0).abs() < 1e-9); // 60px * 0.5°/px
        editor.pointer_up(Point::new(560.0, handle_y), metrics());
    }

    #[test]
    fn test_cancel_restores_snapshot() {
        let (mut editor, id) = editor_with_symbol();
        editor.pointer_down(Point::new(500.0, 500.0), metrics());
        editor.pointer_move(Point::new(900.0, 900.0), metrics());
        editor.cancel_gesture();

        let sym = editor.frame().symbol(id).unwrap();
        assert!((sym.x - 40.0).abs() < 1e-9);
        assert!((sym.y - 40.0).abs() < 1e-9);
        assert_eq!(editor.session_state(), SessionState::Selected(id));
    }

    #[test]
    fn test_drop_payload_adds_and_selects() {
        let frame = Frame::new(1);
        let mut editor = Editor::new(frame, EditorConfig::default());
        let payload = DragPayload {
            name: "zoom-in".to_string(),
            icon: SymbolIcon::Camera(CameraMove::ZoomIn),
        }
        .to_json();

        let id = editor
            .drop_payload(&payload, Point::new(500.0, 500.0), metrics())
            .unwrap()
            .unwrap();
        assert_eq!(editor.selected(), Some(id));

        let sym = editor.frame().symbol(id).unwrap();
        // Centered on the drop point with the default size
        assert!((sym.x - 40.0).abs() < 1e-9);
        assert!((sym.y - 40.0).abs() < 1e-9);
        assert!((sym.width - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_drop_malformed_payload_ignored() {
        let frame = Frame::new(1);
        let mut editor = Editor::new(frame, EditorConfig::default());
        let result = editor.drop_payload("definitely not json", Point::new(100.0, 100.0), metrics());
        assert!(matches!(result, Ok(None)));
        assert!(editor.frame().is_empty());
    }

    #[test]
    fn test_drop_surfaces_category_conflict() {
        let (mut editor, _) = editor_with_symbol();
        let payload = DragPayload {
            name: "pan-left".to_string(),
            icon: SymbolIcon::Camera(CameraMove::PanLeft),
        }
        .to_json();

        let err = editor
            .drop_payload(&payload, Point::new(100.0, 100.0), metrics())
            .unwrap_err();
        assert!(matches!(err, StoreError::CategoryConflict { .. }));
        assert_eq!(editor.frame().len(), 1);
    }

    #[test]
    fn test_delete_selected() {
        let (mut editor, id) = editor_with_symbol();
        editor.select(id);
        let removed = editor.delete_selected().unwrap();
        assert_eq!(removed.id(), id);
        assert!(editor.frame().is_empty());
        assert_eq!(editor.session_state(), SessionState::Idle);
    }

    #[test]
    fn test_mutations_reach_sink() {
        let (mut editor, _) = editor_with_symbol();
        editor.set_sink(Box::new(MemorySink::new()));

        editor.pointer_down(Point::new(500.0, 500.0), metrics());
        editor.pointer_move(Point::new(600.0, 500.0), metrics());
        editor.pointer_up(Point::new(600.0, 500.0), metrics());
        // Sink is attached and notified; behavior is covered by
        // MemorySink's own tests. Here we only assert the drag landed.
        let id = editor.selected().unwrap();
        assert!((editor.frame().symbol(id).unwrap().x - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_second_press_mid_gesture_ignored() {
        let (mut editor, id) = editor_with_symbol();
        editor.pointer_down(Point::new(500.0, 500.0), metrics());
        let before = editor.session_state();
        editor.pointer_down(Point::new(100.0, 100.0), metrics());
        assert_eq!(editor.session_state(), before);
        assert_eq!(editor.selected(), Some(id));
    }
}
