//! # Slint Graph Panel
//!
//! A Slint-oriented core for interactive visual graph panels: node layout,
//! pin geometry, connection curves, scrolling, press/drag/release handling,
//! and layout persistence.
//!
//! ## Features
//!
//! - **Layout Variants** - Node sizing and pin placement behind the
//!   [`LayoutVariant`] trait; ships [`DialogueLayout`] and
//!   [`VerticalPinLayout`]
//! - **Derived Pin Geometry** - Pin rows recomputed on every size or
//!   connection change, never observable stale
//! - **Tick-Based Interaction** - A small state machine covers press, drag,
//!   release, and the cursor-leaves-panel edge case
//! - **SVG Path Output** - Connection curves emitted as Slint-compatible
//!   command strings
//! - **Append-Only Persistence** - Named layout slots serialized with serde
//!
//! ## Quick Start
//!
//! ```no_run
//! use slint_graph_panel::{DialogueLayout, GraphPanel, Rect};
//! use std::rc::Rc;
//!
//! let panel = GraphPanel::new(Rect::new(0.0, 0.0, 800.0, 600.0), 1000);
//! let a = panel.add_node("Start", Rc::new(DialogueLayout));
//! let b = panel.add_node("Reply", Rc::new(DialogueLayout));
//! panel.connect(a, b);
//!
//! // Per redraw tick:
//! panel.update();
//! let draw_list = panel.draw();
//! for _event in panel.drain_events() {
//!     // react to presses and releases
//! }
//! ```
//!
//! ## Core Components
//!
//! - [`GraphPanel`] - Clone-able panel handle driving the tick cycle
//! - [`Graph`] / [`Node`] - Node container with stable window-id mapping
//! - [`LayoutVariant`] - Per-node-type sizing and pin placement
//! - [`Viewport`] - Scroll transform and visibility culling
//! - [`InteractionTracker`] - Press/drag/release state machine
//! - [`SaveData`] / [`LayoutStore`] - Layout slot persistence

pub mod geometry;
pub mod pins;
pub mod path;
pub mod layout;
pub mod node;
pub mod viewport;
pub mod interaction;
pub mod graph;
pub mod style;
pub mod persistence;
pub mod panel;

pub use geometry::{Point, Rect, Size};
pub use pins::{clamp_output_count, pin_width, OutputRowPlacement, PinGeometry, PinMode};
pub use path::{generate_link_path, BezierBias, CubicBezier};
pub use layout::{DialogueLayout, LayoutVariant, VerticalPinLayout};
pub use node::{ConnectionId, Node};
pub use viewport::Viewport;
pub use interaction::{InteractionState, InteractionTracker, PanelEvent};
pub use graph::Graph;
pub use style::{NodeStyle, StyleSet};
pub use persistence::{LayoutStore, MemoryStore, SaveData, SaveError, Slot, SlotRecord};
pub use panel::{DrawList, GraphPanel, LinkDraw, NodeDraw};
