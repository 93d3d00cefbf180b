//! Basic 2D value types used throughout the panel core.
//!
//! All coordinates are `f32` to match Slint's logical pixel type. `Point` is
//! serde-enabled because node positions are what layout persistence records.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub};

/// A 2D position or offset in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// A 2D extent. Components are never negative: construction clamps to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Create a size, clamping negative components to zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle: top-left position plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub position: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_position_size(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Containment test, inclusive on all four edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.size.width()
            && point.y >= self.position.y
            && point.y <= self.position.y + self.size.height()
    }

    /// The same rect translated by `delta`.
    pub fn translated(&self, delta: Point) -> Rect {
        Rect {
            position: self.position + delta,
            size: self.size,
        }
    }

    /// Grow outward by separate top-left and bottom-right margins.
    ///
    /// Used for the background decoration: the visual margin is not part of
    /// hit-testing, so callers apply this only when emitting draw geometry.
    pub fn padded(&self, top_left: Point, bottom_right: Point) -> Rect {
        Rect::new(
            self.position.x - top_left.x,
            self.position.y - top_left.y,
            self.size.width() + top_left.x + bottom_right.x,
            self.size.height() + top_left.y + bottom_right.y,
        )
    }
}
