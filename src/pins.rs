//! Pin layout computation.
//!
//! Pure functions from a node's size and output-connection count to pin
//! dimensions, row start offsets, per-pin offsets, and connection anchor
//! offsets. All offsets are node-local; callers add the node position to get
//! absolute coordinates. Nothing here holds state: the same inputs always
//! produce the same outputs, which is what lets nodes recompute geometry
//! eagerly on every size or connection-count change.

use crate::geometry::{Point, Size};

/// Direction of a pin: where connections arrive or leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

/// Where a layout variant places the output pin row.
///
/// The two shipped variants disagree on this and both placements are part of
/// their contracts, so the choice is explicit rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputRowPlacement {
    /// Output row anchored to the bottom of the node: `height - 2 * pin_height`.
    HeightBased,
    /// Output row at a fixed offset of one pin height below the node top.
    FixedOffset,
}

/// Clamp an output-connection count to the supported pin-row range.
pub fn clamp_output_count(count: usize) -> usize {
    count.clamp(1, 4)
}

/// Pin width for a node of `size` with `output_count` output connections.
///
/// Width shrinks as the clamped count grows, so up to four output pins share
/// the node width with their separators.
pub fn pin_width(size: Size, output_count: usize) -> f32 {
    let n = clamp_output_count(output_count) as f32;
    size.width() / n - 50.0 / n - 12.0
}

/// Computed pin geometry for one node.
///
/// Recomputed whenever the node's size or output-connection count changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinGeometry {
    pub pin_size: Size,
    pub input_row_start: Point,
    pub output_row_start: Point,
}

impl PinGeometry {
    /// Node-local offset of pin `index` relative to its row start.
    ///
    /// Input pins share a single slot; output pins march right, one slot plus
    /// separator per index.
    pub fn pin_offset(&self, mode: PinMode, index: usize) -> Point {
        let w = self.pin_size.width();
        match mode {
            PinMode::Input => Point::new(w, 0.0),
            PinMode::Output => Point::new(
                w + (w + 26.0) * index as f32,
                self.pin_size.height(),
            ),
        }
    }

    /// Row-local offset where a connection curve attaches.
    ///
    /// Independent of pin index: input curves attach at the top center of the
    /// pin slot, output curves at the bottom center.
    pub fn anchor_offset(&self, mode: PinMode) -> Point {
        let w = self.pin_size.width();
        match mode {
            PinMode::Input => Point::new(w / 2.0, 0.0),
            PinMode::Output => Point::new(w / 2.0, self.pin_size.height()),
        }
    }
}

/// Compute the full pin geometry for a node.
///
/// # Arguments
/// * `size` - Current node size
/// * `output_count` - Number of output connections (clamped to 1..=4)
/// * `pin_height` - Pin row height, supplied by the layout variant
/// * `placement` - Output-row placement contract of the layout variant
pub fn compute_pin_geometry(
    size: Size,
    output_count: usize,
    pin_height: f32,
    placement: OutputRowPlacement,
) -> PinGeometry {
    // Nodes narrower than the separator allowance would give a negative raw
    // width; clamp before deriving the row starts so every offset agrees
    // with the zero-width pin slot.
    let width = pin_width(size, output_count).max(0.0);
    let row_x = -width + 25.0;

    let output_y = match placement {
        OutputRowPlacement::HeightBased => size.height() - 2.0 * pin_height,
        OutputRowPlacement::FixedOffset => pin_height,
    };

    PinGeometry {
        pin_size: Size::new(width, pin_height),
        input_row_start: Point::new(row_x, 0.0),
        output_row_start: Point::new(row_x, output_y),
    }
}
