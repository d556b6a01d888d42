//! Layout module orchestrator.
//!
//! Callers build a per-frame tree through [`LayoutContext`]; the passes live in
//! their own private modules and run in order from `finish`:
//! `measure` (bottom-up minimums), `resolve` (top-down sizes, Grow/Percent and
//! wrapped text heights), `position` (top-down coordinates and clamping).

mod config;
mod core;
mod measure;
mod node;
mod position;
mod resolve;

pub use config::{Alignment, Axis, Direction, HAlign, LayoutConfig, Overflow, Padding, Sizing, VAlign};
pub use self::core::{LayoutContext, NodeSnapshot};
pub use node::{Children, LayoutNode, NodeId, RenderCommand};
