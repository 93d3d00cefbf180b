//! Connection curve generation.
//!
//! The panel core does not rasterize anything; it hands the host renderer a
//! string of SVG-style path commands for each connection, computed from the
//! two anchor points and the node type's bezier bias.

use crate::geometry::Point;

/// Axis along which a connection curve's control points are offset.
///
/// Fixed per node layout variant, not per instance: horizontal-pin nodes get
/// sideways-extending curves, vertical-pin nodes get up/down-extending ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BezierBias {
    #[default]
    Horizontal,
    Vertical,
}

/// Generate SVG path commands for a connection curve between two anchors.
///
/// Produces a cubic bezier whose control points extend along the bias axis
/// from each anchor. Very short links degrade to a straight `L` segment to
/// avoid zig-zags.
///
/// # Arguments
/// * `start` - Output anchor (curve leaves here)
/// * `end` - Input anchor (curve arrives here)
/// * `bias` - Control-point axis of the source node's layout variant
/// * `min_offset` - Minimum control point offset (default: 50.0)
///
/// # Returns
/// Path command string, e.g. `"M 10 20 C 60 20 90 80 140 80"`.
pub fn generate_link_path(start: Point, end: Point, bias: BezierBias, min_offset: f32) -> String {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let dist_sq = dx * dx + dy * dy;

    if dist_sq < 10.0 * 10.0 {
        return format!("M {} {} L {} {}", start.x, start.y, end.x, end.y);
    }

    let (ctrl1, ctrl2) = control_points(start, end, bias, min_offset);

    format!(
        "M {} {} C {} {} {} {} {} {}",
        start.x, start.y, ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, end.x, end.y
    )
}

/// Control points for a biased connection curve.
fn control_points(start: Point, end: Point, bias: BezierBias, min_offset: f32) -> (Point, Point) {
    match bias {
        BezierBias::Horizontal => {
            let offset = ((end.x - start.x).abs() * 0.5).max(min_offset);
            (
                Point::new(start.x + offset, start.y),
                Point::new(end.x - offset, end.y),
            )
        }
        BezierBias::Vertical => {
            let offset = ((end.y - start.y).abs() * 0.5).max(min_offset);
            (
                Point::new(start.x, start.y + offset),
                Point::new(end.x, end.y - offset),
            )
        }
    }
}

/// Cubic bezier curve, mainly for verifying generated paths in tests.
pub struct CubicBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBezier {
    /// Build the curve `generate_link_path` would emit for the same inputs.
    pub fn from_anchors(start: Point, end: Point, bias: BezierBias, min_offset: f32) -> Self {
        let (p1, p2) = control_points(start, end, bias, min_offset);
        Self {
            p0: start,
            p1,
            p2,
            p3: end,
        }
    }

    /// Evaluate the curve at parameter `t` in `[0, 1]`.
    pub fn eval(&self, t: f32) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        Point::new(
            mt3 * self.p0.x + 3.0 * mt2 * t * self.p1.x + 3.0 * mt * t2 * self.p2.x + t3 * self.p3.x,
            mt3 * self.p0.y + 3.0 * mt2 * t * self.p1.y + 3.0 * mt * t2 * self.p2.y + t3 * self.p3.y,
        )
    }
}
