use serde::Serialize;

/// Integer size measured in terminal character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Signed displacement in cells, used for scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangle anchored within the cell grid.
///
/// Coordinates are signed because scrolled content may start above or left of
/// the visible area. Width and height are kept non-negative by every helper here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Full-screen rectangle anchored at the origin.
    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, i32::from(size.width), i32::from(size.height))
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// True when the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlapping region of both rectangles. Disjoint inputs yield a zero-area
    /// rectangle positioned at the clamped origin.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, (right - x).max(0), (bottom - y).max(0))
    }

    /// Shrink by `amount` cells on every side.
    pub fn inset(&self, amount: i32) -> Rect {
        self.shrink(amount, amount, amount, amount)
    }

    /// Shrink by independent amounts per side, never producing a negative extent.
    pub fn shrink(&self, left: i32, right: i32, top: i32, bottom: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(left),
            self.y.saturating_add(top),
            (self.width - left - right).max(0),
            (self.height - top - bottom).max(0),
        )
    }
}
