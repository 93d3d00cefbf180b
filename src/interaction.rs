//! The press/drag/release interaction state machine.
//!
//! Tracks which node (if any) is pressed, reconciles input loss when the
//! cursor leaves the panel mid-press, and publishes press/release
//! notifications as plain-data events the host drains.
//!
//! The off-panel case is the delicate one: when the cursor disappears while a
//! node is pressed, the release is deferred by one tick. The node is skipped
//! from drawing for exactly that tick, which gives the host window system one
//! cycle to drop its idea that the node still has input focus, and only then
//! does the release notification fire.

use crate::geometry::Point;

/// Current interaction state. At most one node is pressed or pending release
/// at any time; the enum makes that exclusivity structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Pressed(usize),
    PendingRelease(usize),
}

/// Notification published by the panel. Plain data, no bound callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    NodePressed { index: usize, position: Point },
    NodeReleased { index: usize, position: Point },
}

/// Owns the interaction state and the pending notification queue for one
/// graph panel.
#[derive(Debug, Default)]
pub struct InteractionTracker {
    state: InteractionState,
    events: Vec<PanelEvent>,
    redraw_requested: bool,
}

impl InteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Index of the pressed node, if any.
    pub fn pressed_node(&self) -> Option<usize> {
        match self.state {
            InteractionState::Pressed(i) => Some(i),
            _ => None,
        }
    }

    /// True while a deferred release waits for the next tick.
    pub fn release_pending(&self) -> bool {
        matches!(self.state, InteractionState::PendingRelease(_))
    }

    /// Host-delivered press on a node window. Only honored from `Idle`;
    /// returns whether it was.
    pub fn press(&mut self, index: usize, node_position: Point) -> bool {
        if self.state != InteractionState::Idle {
            return false;
        }
        self.state = InteractionState::Pressed(index);
        self.events.push(PanelEvent::NodePressed {
            index,
            position: node_position,
        });
        true
    }

    /// Host-delivered release. Fires immediately; the one-tick deferral only
    /// applies to the off-panel-loss path.
    pub fn release(&mut self, node_position: Point) {
        if let InteractionState::Pressed(index) = self.state {
            self.state = InteractionState::Idle;
            self.events.push(PanelEvent::NodeReleased {
                index,
                position: node_position,
            });
            self.redraw_requested = true;
        }
    }

    /// Per-tick reconciliation, run before the draw loop.
    ///
    /// `cursor_on_panel` is the live cursor visibility; `position_of` resolves
    /// a node index to its current position for the release payload.
    pub fn reconcile(&mut self, cursor_on_panel: bool, position_of: impl Fn(usize) -> Point) {
        match self.state {
            InteractionState::Pressed(index) if !cursor_on_panel => {
                // Defer: no notification this tick, node hidden for one cycle.
                log::debug!("cursor left panel while node {} pressed, deferring release", index);
                self.state = InteractionState::PendingRelease(index);
            }
            InteractionState::PendingRelease(index) => {
                self.state = InteractionState::Idle;
                self.events.push(PanelEvent::NodeReleased {
                    index,
                    position: position_of(index),
                });
                self.redraw_requested = true;
            }
            _ => {}
        }
    }

    /// Drawing policy for this tick: a node is skipped iff it is not visible
    /// and not the pressed node, or a release is pending while nothing is
    /// pressed (the one-tick hide).
    pub fn should_draw(&self, index: usize, node_visible: bool) -> bool {
        let pressed = self.pressed_node();
        if !node_visible && pressed != Some(index) {
            return false;
        }
        if pressed.is_none() && self.release_pending() {
            return false;
        }
        true
    }

    /// Take the pending notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<PanelEvent> {
        std::mem::take(&mut self.events)
    }

    /// True once after any release fired; the host should schedule an extra
    /// redraw so the release's visual effects land immediately.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
