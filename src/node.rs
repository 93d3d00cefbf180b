//! The node entity.
//!
//! A node is a movable, resizable rectangle owned by a [`Graph`] and drawn by
//! the panel. Its pin geometry is derived state: it is recomputed eagerly on
//! every size or connection-count change so stale geometry is never
//! observable by a draw pass.
//!
//! [`Graph`]: crate::graph::Graph

use crate::geometry::{Point, Rect, Size};
use crate::layout::LayoutVariant;
use crate::pins::{clamp_output_count, PinGeometry, PinMode};
use std::rc::Rc;

/// Identifier carried by an output connection: the window id of the node the
/// connection points at.
pub type ConnectionId = i32;

/// A single node in the graph.
pub struct Node {
    rect: Rect,
    title: String,
    dragable: bool,
    /// Node position recorded when a press gesture started. Collaborators use
    /// it for drag-delta computation.
    pressed_position: Point,
    pin_geometry: PinGeometry,
    connections_output: Vec<ConnectionId>,
    variant: Rc<dyn LayoutVariant>,
}

impl Node {
    /// Create a node with the variant's default size.
    pub fn new(title: impl Into<String>, position: Point, variant: Rc<dyn LayoutVariant>) -> Self {
        let size = variant.default_size();
        let pin_geometry = variant.pin_geometry(size, 0);
        Self {
            rect: Rect::from_position_size(position, size),
            title: title.into(),
            dragable: true,
            pressed_position: position,
            pin_geometry,
            connections_output: Vec::new(),
            variant,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dragable(&self) -> bool {
        self.dragable
    }

    pub fn set_dragable(&mut self, dragable: bool) {
        self.dragable = dragable;
    }

    pub fn variant(&self) -> &Rc<dyn LayoutVariant> {
        &self.variant
    }

    /// Current derived pin geometry. Never stale: every size or connection
    /// mutation goes through a method that recomputes it.
    pub fn pin_geometry(&self) -> PinGeometry {
        self.pin_geometry
    }

    pub fn set_position(&mut self, position: Point) {
        self.rect.position = position;
    }

    pub fn translate(&mut self, delta: Point) {
        self.rect.position += delta;
    }

    /// Resize the node. Negative components clamp to zero (via [`Size`]) and
    /// pin geometry is recomputed immediately.
    pub fn set_size(&mut self, size: Size) {
        self.rect.size = size;
        self.recompute_pin_geometry();
    }

    /// Record the press position at gesture start.
    pub fn record_press(&mut self) {
        self.pressed_position = self.rect.position;
    }

    pub fn pressed_position(&self) -> Point {
        self.pressed_position
    }

    pub fn connections_output(&self) -> &[ConnectionId] {
        &self.connections_output
    }

    pub fn output_count(&self) -> usize {
        self.connections_output.len()
    }

    /// Append an output connection and recompute pin geometry.
    pub fn push_output_connection(&mut self, id: ConnectionId) {
        self.connections_output.push(id);
        self.recompute_pin_geometry();
    }

    /// Remove the first output connection with the given id, if any, and
    /// recompute pin geometry.
    pub fn remove_output_connection(&mut self, id: ConnectionId) {
        if let Some(pos) = self.connections_output.iter().position(|&c| c == id) {
            self.connections_output.remove(pos);
            self.recompute_pin_geometry();
        }
    }

    /// Boundary-inclusive hit test against the node rect.
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    /// Absolute anchor point for a connection curve on the given pin row.
    pub fn anchor(&self, mode: PinMode) -> Point {
        let row = match mode {
            PinMode::Input => self.pin_geometry.input_row_start,
            PinMode::Output => self.pin_geometry.output_row_start,
        };
        self.rect.position + row + self.pin_geometry.anchor_offset(mode)
    }

    /// Absolute rect of pin `index` on the given row. Output indices beyond
    /// the clamp range fold onto the last drawable slot.
    pub fn pin_rect(&self, mode: PinMode, index: usize) -> Rect {
        let index = match mode {
            PinMode::Input => index,
            PinMode::Output => index.min(clamp_output_count(self.output_count()) - 1),
        };
        let row = match mode {
            PinMode::Input => self.pin_geometry.input_row_start,
            PinMode::Output => self.pin_geometry.output_row_start,
        };
        let offset = self.pin_geometry.pin_offset(mode, index);
        Rect::from_position_size(self.rect.position + row + offset, self.pin_geometry.pin_size)
    }

    fn recompute_pin_geometry(&mut self) {
        self.pin_geometry = self.variant.pin_geometry(self.rect.size, self.output_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DialogueLayout, VerticalPinLayout};
    use crate::pins;

    fn dialogue_node() -> Node {
        Node::new("Start", Point::new(10.0, 10.0), Rc::new(DialogueLayout))
    }

    // ========================================================================
    // Construction
    // ========================================================================

    #[test]
    fn test_new_node_uses_variant_default_size() {
        let node = dialogue_node();
        assert_eq!(node.rect().size, DialogueLayout.default_size());
        assert!(node.dragable());
        assert_eq!(node.output_count(), 0);
    }

    #[test]
    fn test_new_node_pin_geometry_is_initialized() {
        let node = dialogue_node();
        let expected = DialogueLayout.pin_geometry(DialogueLayout.default_size(), 0);
        assert_eq!(node.pin_geometry(), expected);
    }

    // ========================================================================
    // Geometry invariant: no stale pin geometry after mutation
    // ========================================================================

    #[test]
    fn test_set_size_recomputes_pin_geometry() {
        let mut node = dialogue_node();
        node.set_size(Size::new(400.0, 200.0));
        let expected = DialogueLayout.pin_geometry(Size::new(400.0, 200.0), 0);
        assert_eq!(node.pin_geometry(), expected);
    }

    #[test]
    fn test_negative_size_clamps_to_zero() {
        let mut node = dialogue_node();
        node.set_size(Size::new(-50.0, 100.0));
        assert_eq!(node.rect().size.width(), 0.0);
        assert_eq!(node.rect().size.height(), 100.0);
    }

    #[test]
    fn test_push_connection_recomputes_pin_geometry() {
        let mut node = dialogue_node();
        let before = node.pin_geometry();
        node.push_output_connection(200);
        node.push_output_connection(201);
        let after = node.pin_geometry();
        // Two outputs narrow the pins relative to one
        assert!(after.pin_size.width() < before.pin_size.width());
        assert_eq!(
            after,
            DialogueLayout.pin_geometry(node.rect().size, 2)
        );
    }

    #[test]
    fn test_remove_connection_recomputes_pin_geometry() {
        let mut node = dialogue_node();
        node.push_output_connection(200);
        node.push_output_connection(201);
        node.remove_output_connection(200);
        assert_eq!(node.connections_output(), &[201]);
        assert_eq!(
            node.pin_geometry(),
            DialogueLayout.pin_geometry(node.rect().size, 1)
        );
    }

    #[test]
    fn test_remove_missing_connection_is_noop() {
        let mut node = dialogue_node();
        node.push_output_connection(200);
        let before = node.pin_geometry();
        node.remove_output_connection(999);
        assert_eq!(node.connections_output(), &[200]);
        assert_eq!(node.pin_geometry(), before);
    }

    // ========================================================================
    // record_press() / pressed_position()
    // ========================================================================

    #[test]
    fn test_record_press_captures_current_position() {
        let mut node = dialogue_node();
        node.set_position(Point::new(70.0, 80.0));
        node.record_press();
        node.translate(Point::new(5.0, 5.0));
        assert_eq!(node.pressed_position(), Point::new(70.0, 80.0));
    }

    // ========================================================================
    // anchor() / pin_rect()
    // ========================================================================

    #[test]
    fn test_anchor_includes_node_position_and_row() {
        let mut node = dialogue_node();
        node.set_position(Point::new(100.0, 50.0));
        let geom = node.pin_geometry();
        let expected = Point::new(100.0, 50.0)
            + geom.output_row_start
            + geom.anchor_offset(pins::PinMode::Output);
        assert_eq!(node.anchor(pins::PinMode::Output), expected);
    }

    #[test]
    fn test_anchor_moves_with_node() {
        let mut node = dialogue_node();
        let before = node.anchor(pins::PinMode::Input);
        node.translate(Point::new(30.0, -10.0));
        let after = node.anchor(pins::PinMode::Input);
        assert_eq!(after, before + Point::new(30.0, -10.0));
    }

    #[test]
    fn test_anchor_tracks_connection_count_changes() {
        // The connection anchor depends on pin width, which depends on the
        // output count; adding a connection must move the anchor.
        let mut node = dialogue_node();
        node.push_output_connection(200);
        let one = node.anchor(pins::PinMode::Output);
        node.push_output_connection(201);
        let two = node.anchor(pins::PinMode::Output);
        assert_ne!(one, two);
    }

    #[test]
    fn test_output_pin_rect_clamps_index() {
        let mut node = dialogue_node();
        node.push_output_connection(200);
        // Only one drawable output slot; index 7 folds onto it
        assert_eq!(
            node.pin_rect(pins::PinMode::Output, 7),
            node.pin_rect(pins::PinMode::Output, 0)
        );
    }

    // ========================================================================
    // Variant-specific behavior
    // ========================================================================

    #[test]
    fn test_vertical_pin_node_keeps_fixed_output_row() {
        let mut node = Node::new("V", Point::ZERO, Rc::new(VerticalPinLayout));
        node.set_size(Size::new(180.0, 500.0));
        assert_eq!(node.pin_geometry().output_row_start.y, 24.0);
    }
}
