//! Geometry primitives: points, sizes and axis-aligned rectangles.
//!
//! All coordinates are arena units with the origin at the top-left corner and
//! `y` growing downward.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// 2D vector used for positions and per-tick velocities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(position: Vec2, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Same rectangle moved by `delta`.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::from_parts(self.position() + delta, self.size())
    }

    /// Same size, new top-left corner.
    pub fn moved_to(&self, position: Vec2) -> Self {
        Self::new(position.x, position.y, self.width, self.height)
    }

    /// Whether the top-left corner lies within `[0, bounds.width] x [0, bounds.height]`.
    ///
    /// Both ends are inclusive: an entity sitting exactly on the far edge is
    /// still in bounds.
    pub fn origin_within(&self, bounds: Size) -> bool {
        self.x >= 0.0 && self.x <= bounds.width && self.y >= 0.0 && self.y <= bounds.height
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        overlapping(self, other)
    }
}

/// Strict axis-aligned intersection test.
///
/// Rectangles that only share an edge (zero-area contact) do not overlap.
///
/// # Examples
///
/// ```
/// use tui_shooter_types::{overlapping, Rect};
///
/// let bullet = Rect::new(100.0, 100.0, 5.0, 20.0);
/// let enemy = Rect::new(100.0, 110.0, 36.0, 18.0);
/// assert!(overlapping(&bullet, &enemy));
///
/// let touching = Rect::new(105.0, 100.0, 10.0, 10.0);
/// assert!(!overlapping(&bullet, &touching));
/// ```
pub fn overlapping(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
