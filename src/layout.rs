//! Node layout variants.
//!
//! Node subtypes (dialogue nodes, vertical-pin nodes) differ only in sizing
//! policy, pin-row placement, and bezier bias. Rather than a subclass
//! hierarchy, each node carries a [`LayoutVariant`] strategy object and the
//! rest of the engine stays generic over it.

use crate::geometry::{Point, Rect, Size};
use crate::pins::{compute_pin_geometry, OutputRowPlacement, PinGeometry};
use crate::path::BezierBias;

/// Sizing and pin-placement policy for one node type.
///
/// Implementations are stateless: a single instance is shared by every node
/// of that type.
pub trait LayoutVariant {
    /// Default size assigned to newly added nodes.
    fn default_size(&self) -> Size;

    /// Pin row height. Fixed per variant.
    fn pin_height(&self) -> f32 {
        24.0
    }

    /// Where this variant places the output pin row.
    fn output_row_placement(&self) -> OutputRowPlacement;

    /// Control-point axis for connection curves leaving this node type.
    fn bezier_bias(&self) -> BezierBias;

    /// Name of the visual style this node type asks the panel to resolve.
    /// Unknown names fall back to the unstyled default.
    fn style_name(&self) -> &str {
        "node"
    }

    /// Pin geometry for a node of `size` with `output_count` connections.
    fn pin_geometry(&self, size: Size, output_count: usize) -> PinGeometry {
        compute_pin_geometry(
            size,
            output_count,
            self.pin_height(),
            self.output_row_placement(),
        )
    }

    /// Node-local region left for the content widget, between the pin rows.
    fn content_rect(&self, size: Size) -> Rect {
        let h = self.pin_height();
        Rect::new(0.0, h, size.width(), (size.height() - 2.0 * h).max(0.0))
    }

    /// Scrollable content bounds. Default: twice the panel size, anchored at
    /// the origin.
    fn view_rect(&self, panel_size: Size) -> Rect {
        Rect::new(
            0.0,
            0.0,
            panel_size.width() * 2.0,
            panel_size.height() * 2.0,
        )
    }

    /// Start position for nodes added to a panel of `panel_rect`.
    fn node_start_position(&self, panel_rect: Rect) -> Point {
        Point::new(
            panel_rect.position.x + panel_rect.size.width() / 4.0,
            panel_rect.position.y + panel_rect.size.height() / 4.0,
        )
    }
}

/// Layout for dialogue-style nodes: wide boxes, pins on the horizontal rows,
/// output row anchored to the node bottom, sideways connection curves.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogueLayout;

impl LayoutVariant for DialogueLayout {
    fn default_size(&self) -> Size {
        Size::new(300.0, 120.0)
    }

    fn output_row_placement(&self) -> OutputRowPlacement {
        OutputRowPlacement::HeightBased
    }

    fn bezier_bias(&self) -> BezierBias {
        BezierBias::Horizontal
    }

    fn style_name(&self) -> &str {
        "dialogue"
    }
}

/// Layout for vertical-pin nodes: output row at a fixed offset below the
/// input row and connection curves extending along the vertical axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalPinLayout;

impl LayoutVariant for VerticalPinLayout {
    fn default_size(&self) -> Size {
        Size::new(180.0, 220.0)
    }

    fn output_row_placement(&self) -> OutputRowPlacement {
        OutputRowPlacement::FixedOffset
    }

    fn bezier_bias(&self) -> BezierBias {
        BezierBias::Vertical
    }

    fn style_name(&self) -> &str {
        "vertical-pin"
    }
}
