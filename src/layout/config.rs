use serde::Serialize;

use crate::geometry::{Offset, Rect};

/// Flow direction for a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Direction {
    /// Children flow left to right; the main axis is X.
    #[default]
    Row,
    /// Children flow top to bottom; the main axis is Y.
    Column,
}

impl Direction {
    pub fn main_axis(self) -> Axis {
        match self {
            Direction::Row => Axis::X,
            Direction::Column => Axis::Y,
        }
    }

    pub fn cross_axis(self) -> Axis {
        self.main_axis().other()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    pub(crate) fn extent(self, rect: &Rect) -> i32 {
        match self {
            Axis::X => rect.width,
            Axis::Y => rect.height,
        }
    }

    pub(crate) fn set_extent(self, rect: &mut Rect, value: i32) {
        match self {
            Axis::X => rect.width = value,
            Axis::Y => rect.height = value,
        }
    }

    pub(crate) fn origin(self, rect: &Rect) -> i32 {
        match self {
            Axis::X => rect.x,
            Axis::Y => rect.y,
        }
    }

    pub(crate) fn set_origin(self, rect: &mut Rect, value: i32) {
        match self {
            Axis::X => rect.x = value,
            Axis::Y => rect.y = value,
        }
    }
}

/// Sizing strategy for one axis of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum Sizing {
    /// Absolute cell count.
    Fixed(u16),
    /// Fraction in `[0, 1]` of the parent's content box.
    Percent(f32),
    /// Derived from children (containers) or own content (leaves).
    #[default]
    FitContent,
    /// Weighted share of the parent's leftover main-axis space. On the cross
    /// axis any weight stretches to the full content box.
    Grow(u16),
}

impl Sizing {
    pub fn fixed(cells: u16) -> Self {
        Self::Fixed(cells)
    }

    /// Out-of-range fractions are clamped into `[0, 1]`; NaN counts as zero.
    pub fn percent(fraction: f32) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Self::Percent(fraction)
    }

    pub fn fit() -> Self {
        Self::FitContent
    }

    pub fn grow(weight: u16) -> Self {
        Self::Grow(weight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Padding {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Padding {
    pub const fn new(left: u16, right: u16, top: u16, bottom: u16) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub const fn all(cells: u16) -> Self {
        Self::new(cells, cells, cells, cells)
    }

    /// Same padding left/right and top/bottom.
    pub const fn axes(horizontal: u16, vertical: u16) -> Self {
        Self::new(horizontal, horizontal, vertical, vertical)
    }

    /// Combined padding on both ends of `axis`.
    pub fn along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => i32::from(self.left) + i32::from(self.right),
            Axis::Y => i32::from(self.top) + i32::from(self.bottom),
        }
    }

    pub(crate) fn content_box(&self, rect: &Rect) -> Rect {
        rect.shrink(
            i32::from(self.left),
            i32::from(self.right),
            i32::from(self.top),
            i32::from(self.bottom),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Alignment {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl Alignment {
    pub const fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const fn center() -> Self {
        Self::new(HAlign::Center, VAlign::Center)
    }

    /// Offset into `free` cells along `axis`: start, half, or all of it.
    pub(crate) fn offset(&self, axis: Axis, free: i32) -> i32 {
        let free = free.max(0);
        match axis {
            Axis::X => match self.horizontal {
                HAlign::Left => 0,
                HAlign::Center => free / 2,
                HAlign::Right => free,
            },
            Axis::Y => match self.vertical {
                VAlign::Top => 0,
                VAlign::Center => free / 2,
                VAlign::Bottom => free,
            },
        }
    }
}

/// How a container treats children that extend past its content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Overflow {
    /// Clip drawing and clamp children into the content box.
    Hidden,
    /// No clamping; the inherited clip passes through unchanged.
    #[default]
    Visible,
    /// Like `Hidden`, after shifting children by the scroll offset.
    Scroll,
}

impl Overflow {
    pub fn clips(self) -> bool {
        !matches!(self, Overflow::Visible)
    }
}

/// Per-node layout request.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LayoutConfig {
    pub direction: Direction,
    pub width: Sizing,
    pub height: Sizing,
    pub padding: Padding,
    /// Spacing between adjacent children along the main axis.
    pub gap: u16,
    pub alignment: Alignment,
    pub overflow: Overflow,
    /// Subtracted from every child's position before clamping.
    pub scroll_offset: Offset,
    /// Text leaves only: wrap to the resolved width and grow in height.
    pub wrap_text: bool,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row() -> Self {
        Self::default().with_direction(Direction::Row)
    }

    pub fn column() -> Self {
        Self::default().with_direction(Direction::Column)
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_size(mut self, width: Sizing, height: Sizing) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_width(mut self, width: Sizing) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: Sizing) -> Self {
        self.height = height;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_scroll(mut self, offset: Offset) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    pub fn sizing(&self, axis: Axis) -> Sizing {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}
