//! The graph panel orchestrator.
//!
//! [`GraphPanel`] ties the pieces together for one editor panel: it owns the
//! graph, the viewport transform, the interaction state, the styles, and the
//! session save data, and it exposes the per-tick `update`/`draw` cycle plus
//! the host input entry points.
//!
//! The panel is a clone-able handle over shared state so it can be captured
//! by multiple host callbacks:
//!
//! ```ignore
//! let panel = GraphPanel::new(Rect::new(0.0, 0.0, 800.0, 600.0), 1000);
//!
//! window.on_pointer_moved({
//!     let panel = panel.clone();
//!     move |x, y| panel.pointer_moved(Point::new(x, y))
//! });
//! window.on_redraw({
//!     let panel = panel.clone();
//!     move || {
//!         panel.update();
//!         let draw_list = panel.draw();
//!         // hand draw_list to the renderer
//!     }
//! });
//! ```
//!
//! Tick ordering is strict: `update` computes the scroll delta first, applies
//! it to every node rect, then reconciles the interaction state; `draw` culls
//! against the reconciled state. Persistence runs on demand, never per tick.

use crate::geometry::{Point, Rect};
use crate::graph::Graph;
use crate::interaction::{InteractionTracker, PanelEvent};
use crate::layout::LayoutVariant;
use crate::node::Node;
use crate::path::{generate_link_path, BezierBias};
use crate::persistence::{LayoutStore, SaveData, SaveError};
use crate::pins::{clamp_output_count, PinMode};
use crate::style::{NodeStyle, StyleSet};
use crate::viewport::Viewport;
use slint::{Model, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

/// Default minimum control-point offset for connection curves.
const DEFAULT_BEZIER_MIN_OFFSET: f32 = 50.0;

/// Draw request for a single node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDraw {
    pub window_id: i32,
    pub rect: Rect,
    pub title: SharedString,
    pub style: NodeStyle,
    pub content_rect: Rect,
    pub input_pin: Rect,
    pub output_pins: Vec<Rect>,
}

/// Draw request for one connection curve.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkDraw {
    pub from_window_id: i32,
    pub to_window_id: i32,
    pub start: Point,
    pub end: Point,
    pub bias: BezierBias,
    pub path_commands: SharedString,
}

/// Everything the host renderer needs for one tick.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Background decoration rect: the panel rect grown by its padding.
    pub background: Rect,
    /// Scrollable content bounds for the host's scroll container.
    pub view_rect: Rect,
    pub nodes: Vec<NodeDraw>,
    pub links: Vec<LinkDraw>,
}

trait NodeModelSyncer {
    fn sync(&self, nodes: &[NodeDraw]);
}

struct ConcreteNodeModelSyncer<T, F> {
    model: Rc<VecModel<T>>,
    constructor: F,
}

impl<T, F> NodeModelSyncer for ConcreteNodeModelSyncer<T, F>
where
    T: Clone + 'static,
    F: Fn(&NodeDraw) -> T,
{
    fn sync(&self, nodes: &[NodeDraw]) {
        for (i, node) in nodes.iter().enumerate() {
            let item = (self.constructor)(node);
            if i < self.model.row_count() {
                self.model.set_row_data(i, item);
            } else {
                self.model.push(item);
            }
        }
        while self.model.row_count() > nodes.len() {
            self.model.remove(self.model.row_count() - 1);
        }
    }
}

struct PanelInner {
    graph: Graph,
    viewport: Viewport,
    interaction: InteractionTracker,
    save_data: SaveData,
    styles: StyleSet,
    cursor: Option<Point>,
    bezier_min_offset: f32,
    node_model: Option<Box<dyn NodeModelSyncer>>,
}

/// Clone-able handle to one graph panel.
#[derive(Clone)]
pub struct GraphPanel {
    inner: Rc<RefCell<PanelInner>>,
}

impl GraphPanel {
    pub fn new(panel_rect: Rect, unique_id_base: i32) -> Self {
        Self::with_styles(panel_rect, unique_id_base, StyleSet::new())
    }

    /// Create a panel with an injected style collection.
    pub fn with_styles(panel_rect: Rect, unique_id_base: i32, styles: StyleSet) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PanelInner {
                graph: Graph::new(unique_id_base),
                viewport: Viewport::new(panel_rect),
                interaction: InteractionTracker::new(),
                save_data: SaveData::new(),
                styles,
                cursor: None,
                bezier_min_offset: DEFAULT_BEZIER_MIN_OFFSET,
                node_model: None,
            })),
        }
    }

    pub fn set_bezier_min_offset(&self, offset: f32) {
        self.inner.borrow_mut().bezier_min_offset = offset;
    }

    /// Update the panel rect when the host window resizes. Affects
    /// visibility culling and where new nodes spawn.
    pub fn set_panel_rect(&self, rect: Rect) {
        self.inner.borrow_mut().viewport.set_panel_rect(rect);
    }

    pub fn panel_rect(&self) -> Rect {
        self.inner.borrow().viewport.panel_rect()
    }

    /// Visual margins for the background decoration rect.
    pub fn set_decoration_padding(&self, top_left: Point, bottom_right: Point) {
        self.inner
            .borrow_mut()
            .viewport
            .set_padding(top_left, bottom_right);
    }

    /// Scrollable content bounds: the newest node's layout variant decides,
    /// falling back to the viewport default over an empty graph.
    pub fn view_rect(&self) -> Rect {
        view_rect(&self.inner.borrow())
    }

    // === Graph mutation ===

    /// Add a node of the given layout variant at the variant's start
    /// position. Returns the new node's index.
    pub fn add_node(&self, title: impl Into<String>, variant: Rc<dyn LayoutVariant>) -> usize {
        let mut inner = self.inner.borrow_mut();
        let start = variant.node_start_position(inner.viewport.panel_rect());
        inner.graph.add_node(title, start, variant)
    }

    /// Remove a node; out-of-range indices are a no-op. Window ids of
    /// subsequent nodes shift, so any cached ids are invalid afterwards.
    pub fn remove_node(&self, index: usize) {
        self.inner.borrow_mut().graph.remove_node(index);
    }

    pub fn node_count(&self) -> usize {
        self.inner.borrow().graph.len()
    }

    /// Move a node to an absolute content-space position. No-op for
    /// out-of-range indices.
    pub fn set_node_position(&self, index: usize, position: Point) {
        if let Some(node) = self.inner.borrow_mut().graph.get_node_mut(index) {
            node.set_position(position);
        }
    }

    pub fn node_position(&self, index: usize) -> Option<Point> {
        self.inner
            .borrow()
            .graph
            .get_node(index)
            .map(|n| n.rect().position)
    }

    pub fn node_rect(&self, index: usize) -> Option<Rect> {
        self.inner.borrow().graph.get_node(index).map(|n| n.rect())
    }

    pub fn set_node_dragable(&self, index: usize, dragable: bool) {
        if let Some(node) = self.inner.borrow_mut().graph.get_node_mut(index) {
            node.set_dragable(dragable);
        }
    }

    /// Connect an output of `from` to the input of `to`. Returns `false`
    /// (and does nothing) when either index is out of range.
    pub fn connect(&self, from: usize, to: usize) -> bool {
        let mut inner = self.inner.borrow_mut();
        if from >= inner.graph.len() || to >= inner.graph.len() {
            return false;
        }
        let target_id = inner.graph.window_id(to);
        if let Some(node) = inner.graph.get_node_mut(from) {
            node.push_output_connection(target_id);
            true
        } else {
            false
        }
    }

    pub fn window_id(&self, index: usize) -> i32 {
        self.inner.borrow().graph.window_id(index)
    }

    pub fn any_node_contains(&self, point: Point) -> Option<usize> {
        self.inner.borrow().graph.any_node_contains(point)
    }

    // === Host input entry points ===

    /// Live cursor position in host coordinates. While a dragable node is
    /// pressed, the node follows the cursor delta.
    pub fn pointer_moved(&self, position: Point) {
        let mut inner = self.inner.borrow_mut();
        let delta = inner.cursor.map(|prev| position - prev);
        inner.cursor = Some(position);

        let (Some(delta), Some(index)) = (delta, inner.interaction.pressed_node()) else {
            return;
        };
        if let Some(node) = inner.graph.get_node_mut(index) {
            if node.dragable() {
                node.translate(delta);
            }
        }
    }

    /// Press event dispatched by the host for a node window id. Unknown ids
    /// (including ids stale after a removal) are ignored.
    pub fn node_pressed(&self, window_id: i32) {
        let mut inner = self.inner.borrow_mut();
        let Some(index) = inner.graph.index_for_window_id(window_id) else {
            return;
        };
        let Some(position) = inner.graph.get_node(index).map(|n| n.rect().position) else {
            return;
        };
        if inner.interaction.press(index, position) {
            if let Some(node) = inner.graph.get_node_mut(index) {
                node.record_press();
            }
        }
    }

    /// Release event dispatched by the host. Fires the release notification
    /// immediately; only cursor loss defers.
    pub fn node_released(&self, window_id: i32) {
        let mut inner = self.inner.borrow_mut();
        let Some(index) = inner.graph.index_for_window_id(window_id) else {
            return;
        };
        if inner.interaction.pressed_node() != Some(index) {
            return;
        }
        let position = inner
            .graph
            .get_node(index)
            .map(|n| n.rect().position)
            .unwrap_or(Point::ZERO);
        inner.interaction.release(position);
    }

    /// Scroll the panel so the content moves by `delta` on the next tick.
    pub fn scroll_panel(&self, delta: Point) {
        self.inner.borrow_mut().viewport.scroll_panel(delta);
    }

    // === Tick cycle ===

    /// Per-tick update: scroll delta first, node repositioning second,
    /// interaction reconciliation last. Call exactly once per redraw tick,
    /// before [`draw`].
    ///
    /// [`draw`]: Self::draw
    pub fn update(&self) {
        let mut inner = self.inner.borrow_mut();
        let delta = inner.viewport.compute_scroll_delta();
        inner.graph.translate_all(delta);

        // A press can only originate from a node window inside the panel, so
        // before any pointer event arrives the cursor is assumed on-panel;
        // treating it as lost would cancel a fresh press.
        let cursor_on_panel = inner
            .cursor
            .map(|c| inner.viewport.is_visible(c))
            .unwrap_or(true);
        let positions: Vec<Point> = inner.graph.iter().map(|n| n.rect().position).collect();
        inner.interaction.reconcile(cursor_on_panel, |i| {
            positions.get(i).copied().unwrap_or(Point::ZERO)
        });
    }

    /// Produce the draw list for this tick, applying visibility culling and
    /// the interaction skip rules. If a node model is bound, it is synced.
    pub fn draw(&self) -> DrawList {
        let inner = self.inner.borrow();
        let mut list = DrawList {
            background: inner.viewport.decoration_rect(),
            view_rect: view_rect(&inner),
            ..DrawList::default()
        };

        for (index, node) in inner.graph.iter().enumerate() {
            let visible = inner.viewport.is_visible(node.rect().position);
            if !inner.interaction.should_draw(index, visible) {
                continue;
            }
            list.nodes
                .push(node_draw(node, inner.graph.window_id(index), &inner.styles));
            link_draws(&inner.graph, index, node, inner.bezier_min_offset, &mut list.links);
        }

        if let Some(syncer) = &inner.node_model {
            syncer.sync(&list.nodes);
        }
        list
    }

    /// Pending press/release notifications, oldest first.
    pub fn drain_events(&self) -> Vec<PanelEvent> {
        self.inner.borrow_mut().interaction.drain_events()
    }

    /// True once after any release fired; the host should schedule an extra
    /// redraw.
    pub fn take_redraw_request(&self) -> bool {
        self.inner.borrow_mut().interaction.take_redraw_request()
    }

    // === Persistence ===

    /// Append the current node positions to the named slot and write the
    /// whole persisted structure to `store`.
    pub fn save_layout(&self, slot_name: &str, store: &mut dyn LayoutStore) -> Result<(), SaveError> {
        let mut inner = self.inner.borrow_mut();
        let positions: Vec<Point> = inner.graph.iter().map(|n| n.rect().position).collect();
        inner.save_data.save(slot_name, positions, store)
    }

    /// Reserved load hook; currently a no-op (see [`SaveData::load`]).
    pub fn load_layout(&self, slot_name: &str) -> Result<(), SaveError> {
        self.inner.borrow().save_data.load(slot_name)
    }

    /// Number of records accumulated in a slot, if the slot exists.
    pub fn slot_record_count(&self, slot_name: &str) -> Option<usize> {
        self.inner
            .borrow()
            .save_data
            .slot(slot_name)
            .map(|s| s.records.len())
    }

    // === Slint model sync ===

    /// Bind a `VecModel` that mirrors the per-tick node draw data. After
    /// binding, every [`draw`] call syncs the model.
    ///
    /// [`draw`]: Self::draw
    pub fn bind_node_model<T>(
        &self,
        model: Rc<VecModel<T>>,
        constructor: impl Fn(&NodeDraw) -> T + 'static,
    ) where
        T: Clone + 'static,
    {
        self.inner.borrow_mut().node_model = Some(Box::new(ConcreteNodeModelSyncer {
            model,
            constructor,
        }));
    }
}

fn view_rect(inner: &PanelInner) -> Rect {
    let panel_size = inner.viewport.panel_rect().size;
    match inner.graph.get_last_node() {
        Some(node) => node.variant().view_rect(panel_size),
        None => inner.viewport.view_rect(),
    }
}

fn node_draw(node: &Node, window_id: i32, styles: &StyleSet) -> NodeDraw {
    let variant = node.variant();
    let output_slots = clamp_output_count(node.output_count());
    NodeDraw {
        window_id,
        rect: node.rect(),
        title: SharedString::from(node.title()),
        style: styles.resolve(variant.style_name()),
        content_rect: variant
            .content_rect(node.rect().size)
            .translated(node.rect().position),
        input_pin: node.pin_rect(PinMode::Input, 0),
        output_pins: (0..output_slots)
            .map(|i| node.pin_rect(PinMode::Output, i))
            .collect(),
    }
}

fn link_draws(
    graph: &Graph,
    index: usize,
    node: &Node,
    min_offset: f32,
    out: &mut Vec<LinkDraw>,
) {
    for &target_id in node.connections_output() {
        let Some(target_index) = graph.index_for_window_id(target_id) else {
            // Target was removed; the connection is stale and not drawn.
            continue;
        };
        let Some(target) = graph.get_node(target_index) else {
            continue;
        };
        let start = node.anchor(PinMode::Output);
        let end = target.anchor(PinMode::Input);
        let bias = node.variant().bezier_bias();
        out.push(LinkDraw {
            from_window_id: graph.window_id(index),
            to_window_id: target_id,
            start,
            end,
            bias,
            path_commands: SharedString::from(generate_link_path(start, end, bias, min_offset)),
        });
    }
}
