//! Cell-grid geometry primitives shared by the layout passes and renderers.

mod core;

pub use self::core::{Offset, Rect, Size};
