//! Text measurement collaborator.
//!
//! The layout passes never look at glyphs directly; they ask a [`TextMeasure`]
//! for the display width of a run and use the greedy word wrapper here to turn
//! a resolved width into a line count.

mod core;

pub use self::core::{DisplayWidth, TextMeasure, display_width, measure_wrapped, text_extent, wrap_lines};
