//! Test harness wrapping a [`GraphPanel`] with a standard panel rect and
//! helpers for driving the tick cycle the way a host window would.

use super::EventRecorder;
use slint_graph_panel::{
    DialogueLayout, DrawList, GraphPanel, LayoutVariant, Point, Rect,
};
use std::rc::Rc;

pub const PANEL_WIDTH: f32 = 800.0;
pub const PANEL_HEIGHT: f32 = 600.0;
pub const ID_BASE: i32 = 1000;

pub struct PanelHarness {
    pub panel: GraphPanel,
    pub events: EventRecorder,
}

impl PanelHarness {
    pub fn new() -> Self {
        Self {
            panel: GraphPanel::new(
                Rect::new(0.0, 0.0, PANEL_WIDTH, PANEL_HEIGHT),
                ID_BASE,
            ),
            events: EventRecorder::new(),
        }
    }

    /// Add `count` dialogue nodes spaced out horizontally on the panel.
    pub fn with_dialogue_nodes(count: usize) -> Self {
        let harness = Self::new();
        for i in 0..count {
            let index = harness
                .panel
                .add_node(format!("Node {}", i), Rc::new(DialogueLayout));
            harness
                .panel
                .set_node_position(index, Point::new(50.0 + 350.0 * i as f32, 100.0));
        }
        harness
    }

    pub fn add_node(&self, title: &str, variant: Rc<dyn LayoutVariant>) -> usize {
        self.panel.add_node(title, variant)
    }

    /// One full redraw tick: update, draw, drain events into the recorder.
    pub fn tick(&mut self) -> DrawList {
        self.panel.update();
        let list = self.panel.draw();
        self.events.record(self.panel.drain_events());
        list
    }

    /// Press a node by index, resolving its window id the way the host does.
    pub fn press(&self, index: usize) {
        self.panel.node_pressed(self.panel.window_id(index));
    }

    pub fn release(&self, index: usize) {
        self.panel.node_released(self.panel.window_id(index));
    }

    /// Move the cursor to a point on the panel.
    pub fn move_cursor(&self, x: f32, y: f32) {
        self.panel.pointer_moved(Point::new(x, y));
    }

    /// Move the cursor outside the panel rect.
    pub fn move_cursor_off_panel(&self) {
        self.panel
            .pointer_moved(Point::new(PANEL_WIDTH + 100.0, PANEL_HEIGHT / 2.0));
    }
}
