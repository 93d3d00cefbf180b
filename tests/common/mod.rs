//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use slint_graph_panel::{PanelEvent, Point};

/// Accumulates drained panel events for assertion.
///
/// Events are recorded per kind with their arguments, mirroring how a host
/// would fan them out to callbacks.
#[derive(Default)]
pub struct EventRecorder {
    /// (index, position)
    pub pressed: Vec<(usize, Point)>,
    /// (index, position)
    pub released: Vec<(usize, Point)>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a batch of drained events in order.
    pub fn record(&mut self, events: Vec<PanelEvent>) {
        for event in events {
            match event {
                PanelEvent::NodePressed { index, position } => {
                    self.pressed.push((index, position));
                }
                PanelEvent::NodeReleased { index, position } => {
                    self.released.push((index, position));
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    pub fn total(&self) -> usize {
        self.pressed.len() + self.released.len()
    }
}
